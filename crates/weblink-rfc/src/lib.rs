//! Parsing and generation of `mailto:` (RFC 6068) and `tel:` (RFC 3966) links.
//!
//! ```rust
//! use weblink_rfc::rfc::{AnyLink, MailLink, TelLink, WebLink};
//!
//! let mail = MailLink::from_link("mailto:a@x.com?subject=Hi%20there").unwrap();
//! assert_eq!(mail.subject.as_deref(), Some("Hi there"));
//!
//! let tel: TelLink = "tel:+1-800-555p1234".parse().unwrap();
//! assert_eq!(tel.generate_link(true), "tel:+1800555p1234");
//!
//! assert!(matches!(AnyLink::parse("TEL:5551234"), Ok(AnyLink::Tel(_))));
//! ```

pub mod error;
pub mod rfc;
