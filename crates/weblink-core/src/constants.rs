/// Scheme and prefix constants shared across crates
pub const MAILTO_SCHEME: &str = "mailto";
pub const MAILTO_PREFIX: &str = const_str::concat!(MAILTO_SCHEME, ":");

pub const TEL_SCHEME: &str = "tel";
pub const TEL_PREFIX: &str = const_str::concat!(TEL_SCHEME, ":");

/// Separates the recipient list of a mail link from its parameter block.
pub const MAIL_PARAMS_DELIMITER: char = '?';
/// Recipient separators accepted when reading.
pub const RECIPIENT_DELIMITERS: [char; 2] = [',', ';'];
/// Recipient separator used when writing.
pub const RECIPIENT_SEPARATOR: &str = ",";
pub const PARAM_DELIMITER: char = '&';
pub const PARAM_VALUE_DELIMITER: char = '=';

/// Mail link parameter names (lower-case).
pub const TO_FIELD: &str = "to";
pub const CC_FIELD: &str = "cc";
pub const BCC_FIELD: &str = "bcc";
pub const SUBJECT_FIELD: &str = "subject";
pub const BODY_FIELD: &str = "body";

/// Marks the start of the extension in a telephone link.
pub const EXTENSION_DELIMITER: char = 'p';
