//! The contract shared by every link type.
//!
//! A link type supplies its prefix, how to clear its fields, how to parse the
//! text after the prefix and how to write its fields back. Prefix validation,
//! prefix stripping and the prefix part of generation are provided here.

use crate::error::{LinkError, LinkResult};

/// A scheme-prefixed link that can be parsed into fields and generated back.
pub trait WebLink: Default {
    /// Scheme prefix including the trailing delimiter, e.g. `"mailto:"`.
    const PREFIX: &'static str;

    /// Resets all fields to their absent state.
    fn clear_fields(&mut self);

    /// Parses the text following the prefix into a fresh link.
    ///
    /// ## Errors
    /// Returns [`LinkError::FormatError`] if the text cannot be decoded.
    fn parse_fields(rest: &str) -> LinkResult<Self>;

    /// Appends the formatted fields to `out`, which already holds the prefix if requested.
    fn write_fields(&self, out: &mut String);

    /// Returns the scheme prefix of this link.
    #[must_use]
    fn prefix(&self) -> &'static str {
        Self::PREFIX
    }

    /// Returns whether `raw`, once trimmed, starts with this link type's prefix.
    #[must_use]
    fn can_handle(raw: &str) -> bool {
        starts_with_ignore_case(raw.trim(), Self::PREFIX)
    }

    /// Checks that `raw` is present and starts with the prefix. No trimming is done.
    ///
    /// ## Errors
    /// Returns [`LinkError::InvalidInput`] if `raw` is `None` and
    /// [`LinkError::FormatError`] if the prefix does not match.
    fn validate_link(raw: Option<&str>) -> LinkResult<&str> {
        let raw = raw.ok_or(LinkError::InvalidInput("link"))?;

        if !starts_with_ignore_case(raw, Self::PREFIX) {
            return Err(LinkError::format(format!(
                "invalid link, expected prefix {}",
                Self::PREFIX
            )));
        }

        Ok(raw)
    }

    /// Trims `raw` and strips the prefix if present. Never fails.
    #[must_use]
    fn exclude_prefix(raw: &str) -> &str {
        let raw = raw.trim();
        if starts_with_ignore_case(raw, Self::PREFIX) {
            raw[Self::PREFIX.len()..].trim()
        } else {
            raw
        }
    }

    /// Loads `raw` into this link.
    ///
    /// Fields are left untouched if validation fails, and cleared if the body
    /// cannot be parsed. Partially parsed values are never assigned.
    ///
    /// ## Errors
    /// See [`WebLink::validate_link`] and [`WebLink::parse_fields`].
    fn read_link(&mut self, raw: Option<&str>) -> LinkResult<()> {
        let raw = Self::validate_link(raw)?;
        self.clear_fields();

        *self = Self::parse_fields(Self::exclude_prefix(raw)).inspect_err(|err| {
            tracing::debug!(prefix = Self::PREFIX, error = %err, "Failed to read link");
        })?;

        Ok(())
    }

    /// Builds a link from `raw`; equivalent to `default()` followed by `read_link`.
    ///
    /// ## Errors
    /// See [`WebLink::read_link`].
    fn from_link(raw: &str) -> LinkResult<Self> {
        let mut link = Self::default();
        link.read_link(Some(raw))?;
        Ok(link)
    }

    /// Generates the link text, optionally starting with the prefix.
    #[must_use]
    fn generate_link(&self, include_prefix: bool) -> String {
        let mut out = if include_prefix {
            Self::PREFIX.to_owned()
        } else {
            String::new()
        };
        self.write_fields(&mut out);
        out
    }
}

/// ASCII case-insensitive `starts_with`.
pub(crate) fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
