//! `mailto:` links (RFC 6068).
//!
//! ## Overview
//!
//! A mail link carries a recipient list before `?` and an optional block of
//! `&`-separated `key=value` parameters after it. Recognised parameters are
//! `to`, `cc`, `bcc`, `subject` and `body`; anything else is ignored.
//!
//! ```rust
//! use weblink_rfc::rfc::{MailLink, WebLink};
//!
//! let link = MailLink::from_link("mailto:A@x.com;b@x.com?cc=c@x.com&subject=a+b").unwrap();
//! assert_eq!(link.to, Some(vec!["a@x.com".to_string(), "b@x.com".to_string()]));
//! assert_eq!(link.subject.as_deref(), Some("a b"));
//! assert_eq!(link.get_link(), "mailto:a@x.com,b@x.com?cc=c%40x.com&subject=a%20b");
//! ```
//!
//! ## Asymmetry
//!
//! The `to` list is written unescaped, while `cc`, `bcc`, `subject` and `body`
//! are percent-encoded. A `+` in a parameter value reads as a space.

mod build;
mod core;
mod parse;


pub use self::build::{escape_param_value, join_recipients};
pub use self::core::MailLink;
pub use self::parse::{parse_parameters, split_recipients, unescape_param_value};
