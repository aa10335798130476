//! Telephone link type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use weblink_core::constants::{EXTENSION_DELIMITER, TEL_PREFIX};

use super::parse::scan_number;
use crate::error::{LinkError, LinkResult};
use crate::rfc::link::WebLink;

/// A parsed `tel:` link.
///
/// A successful parse always sets both fields, possibly to empty strings.
/// Both are `None` only on a new or cleared link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl TelLink {
    /// Creates a link with the given number and no extension.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: Some(number.into()),
            extension: None,
        }
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }
}

impl WebLink for TelLink {
    const PREFIX: &'static str = TEL_PREFIX;

    fn clear_fields(&mut self) {
        self.number = None;
        self.extension = None;
    }

    #[tracing::instrument(skip(rest), fields(rest_len = rest.len()))]
    fn parse_fields(rest: &str) -> LinkResult<Self> {
        let parts = scan_number(rest.trim());

        tracing::debug!(
            has_extension = !parts.extension.is_empty(),
            "Parsed telephone link"
        );

        Ok(Self {
            number: Some(parts.number),
            extension: Some(parts.extension),
        })
    }

    fn write_fields(&self, out: &mut String) {
        if let Some(number) = &self.number {
            out.push_str(number);
        }

        if let Some(extension) = self.extension.as_deref().filter(|ext| !ext.is_empty()) {
            out.push(EXTENSION_DELIMITER);
            out.push_str(extension);
        }
    }
}

impl fmt::Display for TelLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.generate_link(true))
    }
}

impl FromStr for TelLink {
    type Err = LinkError;

    fn from_str(s: &str) -> LinkResult<Self> {
        Self::from_link(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_handle_tel_prefix() {
        assert!(TelLink::can_handle("tel:123"));
        assert!(TelLink::can_handle(" TEL:123"));
        assert!(!TelLink::can_handle("mailto:a@x.com"));
        assert!(!TelLink::can_handle("telephone"));
    }

    #[test_log::test]
    fn parse_number_and_extension() {
        let link = TelLink::from_link("tel:+1-800-555p1234").unwrap();
        assert_eq!(link.number.as_deref(), Some("+1800555"));
        assert_eq!(link.extension.as_deref(), Some("1234"));
    }

    #[test]
    fn parse_without_extension() {
        let link = TelLink::from_link("tel:5551234").unwrap();
        assert_eq!(link.number.as_deref(), Some("5551234"));
        assert_eq!(link.extension.as_deref(), Some(""));
    }

    #[test]
    fn plus_after_whitespace_is_kept() {
        let link = TelLink::from_link("tel:  +44 20 7946 0000").unwrap();
        assert_eq!(link.number.as_deref(), Some("+442079460000"));
    }

    #[test]
    fn empty_body_yields_empty_fields() {
        let link = TelLink::from_link("TEL:").unwrap();
        assert_eq!(link.number.as_deref(), Some(""));
        assert_eq!(link.extension.as_deref(), Some(""));
    }

    #[test]
    fn read_link_missing_input() {
        let mut link = TelLink::default();
        assert_eq!(link.read_link(None), Err(LinkError::InvalidInput("link")));
    }

    #[test]
    fn read_link_wrong_scheme_keeps_fields() {
        let mut link = TelLink::new("123");
        assert!(matches!(
            link.read_link(Some("http://example.com")),
            Err(LinkError::FormatError(_))
        ));
        assert_eq!(link.number.as_deref(), Some("123"));
    }

    #[test]
    fn clear_fields_resets_to_absent() {
        let mut link = TelLink::new("123").with_extension("4");
        link.clear_fields();
        assert_eq!(link, TelLink::default());
    }

    #[test]
    fn generate_with_extension() {
        let link = TelLink::new("+1800555").with_extension("1234");
        assert_eq!(link.generate_link(true), "tel:+1800555p1234");
        assert_eq!(link.generate_link(false), "+1800555p1234");
    }

    #[test]
    fn generate_skips_empty_extension() {
        assert_eq!(TelLink::new("5551234").with_extension("").to_string(), "tel:5551234");
        assert_eq!(TelLink::default().to_string(), "tel:");
    }

    #[test]
    fn generate_writes_number_verbatim() {
        assert_eq!(TelLink::new("555-1234").to_string(), "tel:555-1234");
    }

    #[test]
    fn from_str_parses() {
        let link: TelLink = "tel:5551234p9".parse().unwrap();
        assert_eq!(link, TelLink::new("5551234").with_extension("9"));
    }

    #[test]
    fn serde_round_trip() {
        let link = TelLink::new("+1800555").with_extension("1234");
        let json = serde_json::to_string(&link).unwrap();
        assert_eq!(json, r#"{"number":"+1800555","extension":"1234"}"#);
        assert_eq!(serde_json::from_str::<TelLink>(&json).unwrap(), link);
    }
}
