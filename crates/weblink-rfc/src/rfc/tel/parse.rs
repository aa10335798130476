//! Telephone number scanner.

use weblink_core::constants::EXTENSION_DELIMITER;

/// Digits collected from a telephone link body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelParts {
    pub number: String,
    pub extension: String,
}

/// Scans `body` left to right, collecting number and extension digits.
///
/// A `+` is kept only as the first character. Everything up to the first
/// [`EXTENSION_DELIMITER`] goes to the number, digits after it to the
/// extension. Any other character, including an upper-case `P`, is dropped.
#[must_use]
pub fn scan_number(body: &str) -> TelParts {
    let mut parts = TelParts::default();
    let mut extension_found = false;

    for (idx, c) in body.chars().enumerate() {
        if idx == 0 && c == '+' {
            parts.number.push('+');
        }

        match c {
            EXTENSION_DELIMITER => extension_found = true,
            '0'..='9' if extension_found => parts.extension.push(c),
            '0'..='9' => parts.number.push(c),
            _ => {}
        }
    }

    parts
}
