//! Weblink integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! short `weblink_test::` paths.

pub use weblink_app as app;
pub use weblink_core::{config, constants};
pub use weblink_rfc as rfc;

pub use weblink_rfc::error::{LinkError, LinkResult};
pub use weblink_rfc::rfc::{AnyLink, LinkKind, MailLink, TelLink, WebLink};

/// Builds an owned recipient list.
#[must_use]
pub fn recipients(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}
