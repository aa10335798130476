//! Black-box tests for `tel:` links.

use weblink_test::{LinkError, TelLink, WebLink};

#[test_log::test]
fn separators_dropped_and_extension_split() {
    let link = TelLink::from_link("tel:+1-800-555p1234").unwrap();
    assert_eq!(link.number.as_deref(), Some("+1800555"));
    assert_eq!(link.extension.as_deref(), Some("1234"));
}

#[test]
fn no_extension_marker_gives_empty_extension() {
    let link = TelLink::from_link("tel:5551234").unwrap();
    assert_eq!(link.number.as_deref(), Some("5551234"));
    assert_eq!(link.extension.as_deref(), Some(""));
}

#[test]
fn generation_with_extension() {
    let link = TelLink::new("+1800555").with_extension("1234");
    assert_eq!(link.generate_link(true), "tel:+1800555p1234");
    assert_eq!(link.to_string(), "tel:+1800555p1234");
}

#[test]
fn missing_input_is_invalid() {
    let mut link = TelLink::default();
    assert!(matches!(link.read_link(None), Err(LinkError::InvalidInput(_))));
}

#[test]
fn http_link_is_format_error() {
    assert!(matches!(
        TelLink::from_link("http://example.com"),
        Err(LinkError::FormatError(_))
    ));
}

#[test]
fn only_digits_survive() {
    let link = TelLink::from_link("tel:1+2;phone-context=+44").unwrap();
    assert_eq!(link.number.as_deref(), Some("12"));
    assert_eq!(link.extension.as_deref(), Some("44"));
}
