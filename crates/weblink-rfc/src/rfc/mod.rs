//! Link types.
//!
//! ## Submodules
//!
//! - [`link`] - The [`WebLink`] contract shared by every link type
//! - [`mailto`] - `mailto:` links
//! - [`tel`] - `tel:` links
//! - [`any`] - Prefix detection over the known link types

pub mod any;
pub mod link;
pub mod mailto;
pub mod tel;

pub use any::{AnyLink, LinkKind};
pub use link::WebLink;
pub use mailto::MailLink;
pub use tel::TelLink;
