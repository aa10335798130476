//! `tel:` links (RFC 3966).
//!
//! Only the digits of the number are kept, plus a `+` when it is the very
//! first character. A lower-case `p` starts the extension.
//!
//! ```rust
//! use weblink_rfc::rfc::{TelLink, WebLink};
//!
//! let link = TelLink::from_link("tel:+1-800-555p1234").unwrap();
//! assert_eq!(link.number.as_deref(), Some("+1800555"));
//! assert_eq!(link.extension.as_deref(), Some("1234"));
//! ```

mod core;
mod parse;

pub use self::core::TelLink;
pub use self::parse::{TelParts, scan_number};
