//! Prefix detection over the known link types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LinkError, LinkResult};
use crate::rfc::link::WebLink;
use crate::rfc::mailto::MailLink;
use crate::rfc::tel::TelLink;

/// The known link types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Mail,
    Tel,
}

impl LinkKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mail => "mail",
            Self::Tel => "tel",
        }
    }

    /// Returns the scheme prefix for this kind.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Mail => MailLink::PREFIX,
            Self::Tel => TelLink::PREFIX,
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed link of any known kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "fields", rename_all = "snake_case")]
pub enum AnyLink {
    Mail(MailLink),
    Tel(TelLink),
}

impl AnyLink {
    /// Returns the kind whose `can_handle` probe accepts `raw`, checking mail first.
    #[must_use]
    pub fn detect(raw: &str) -> Option<LinkKind> {
        if MailLink::can_handle(raw) {
            Some(LinkKind::Mail)
        } else if TelLink::can_handle(raw) {
            Some(LinkKind::Tel)
        } else {
            None
        }
    }

    /// Detects the kind of `raw` and parses it. Surrounding whitespace is ignored.
    ///
    /// ## Errors
    /// Returns [`LinkError::FormatError`] if no kind handles `raw` or if parsing fails.
    #[tracing::instrument(skip(raw), fields(raw_len = raw.len()))]
    pub fn parse(raw: &str) -> LinkResult<Self> {
        let raw = raw.trim();

        let Some(kind) = Self::detect(raw) else {
            tracing::debug!("No link type handles input");
            return Err(LinkError::format("unsupported link scheme"));
        };

        tracing::trace!(kind = %kind, "Detected link type");

        match kind {
            LinkKind::Mail => MailLink::from_link(raw).map(Self::Mail),
            LinkKind::Tel => TelLink::from_link(raw).map(Self::Tel),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> LinkKind {
        match self {
            Self::Mail(_) => LinkKind::Mail,
            Self::Tel(_) => LinkKind::Tel,
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &'static str {
        self.kind().prefix()
    }

    #[must_use]
    pub fn generate_link(&self, include_prefix: bool) -> String {
        match self {
            Self::Mail(link) => link.generate_link(include_prefix),
            Self::Tel(link) => link.generate_link(include_prefix),
        }
    }
}

impl From<MailLink> for AnyLink {
    fn from(link: MailLink) -> Self {
        Self::Mail(link)
    }
}

impl From<TelLink> for AnyLink {
    fn from(link: TelLink) -> Self {
        Self::Tel(link)
    }
}

impl fmt::Display for AnyLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.generate_link(true))
    }
}

impl FromStr for AnyLink {
    type Err = LinkError;

    fn from_str(s: &str) -> LinkResult<Self> {
        Self::parse(s)
    }
}
