//! Mail link recipient and parameter parsers.

use weblink_core::constants::{PARAM_DELIMITER, PARAM_VALUE_DELIMITER, RECIPIENT_DELIMITERS};

use crate::error::{LinkError, LinkResult};

/// Splits a recipient list on `,` or `;`.
///
/// Each recipient is trimmed and lower-cased. Empty recipients and duplicates
/// are dropped, keeping the first occurrence.
#[must_use]
pub fn split_recipients(value: &str) -> Vec<String> {
    let mut recipients: Vec<String> = Vec::new();

    for segment in value.split(RECIPIENT_DELIMITERS) {
        let recipient = segment.trim().to_lowercase();
        if recipient.is_empty() || recipients.contains(&recipient) {
            continue;
        }
        recipients.push(recipient);
    }

    recipients
}

/// Decodes a parameter value.
///
/// Literal `+` becomes a space first, then percent-escapes are decoded.
/// Malformed escapes are kept as written.
///
/// ## Errors
/// Returns [`LinkError::FormatError`] if the decoded bytes are not valid UTF-8.
pub fn unescape_param_value(value: &str) -> LinkResult<String> {
    let value = value.replace('+', " ");

    urlencoding::decode(&value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|err| LinkError::format(format!("invalid parameter value {value:?}: {err}")))
}

/// Splits a parameter block into decoded `(key, value)` pairs.
///
/// Keys are lower-cased. Segments without `=` or with an empty key are skipped,
/// as are empty values when `skip_empty` is set.
///
/// ## Errors
/// Returns [`LinkError::FormatError`] if a value cannot be decoded.
pub fn parse_parameters(block: &str, skip_empty: bool) -> LinkResult<Vec<(String, String)>> {
    let mut parameters = Vec::new();

    for segment in block.split(PARAM_DELIMITER).filter(|s| !s.is_empty()) {
        let Some((key, value)) = segment.split_once(PARAM_VALUE_DELIMITER) else {
            tracing::trace!(segment, "Skipping parameter without value delimiter");
            continue;
        };

        let key = key.to_lowercase();
        let value = unescape_param_value(value)?;

        if key.is_empty() || (skip_empty && value.is_empty()) {
            continue;
        }

        parameters.push((key, value));
    }

    Ok(parameters)
}
