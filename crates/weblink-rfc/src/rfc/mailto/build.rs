//! Mail link generation helpers.

use weblink_core::constants::{PARAM_DELIMITER, PARAM_VALUE_DELIMITER, RECIPIENT_SEPARATOR};

/// Joins recipients with `,`. No escaping is applied.
#[must_use]
pub fn join_recipients(recipients: &[String]) -> String {
    recipients.join(RECIPIENT_SEPARATOR)
}

/// Percent-encodes a parameter value, keeping only RFC 3986 unreserved characters.
#[must_use]
pub fn escape_param_value(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Appends `key=escaped-value&` to `out`.
pub(super) fn push_parameter(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push(PARAM_VALUE_DELIMITER);
    out.push_str(&escape_param_value(value));
    out.push(PARAM_DELIMITER);
}
