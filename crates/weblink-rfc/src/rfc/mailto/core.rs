//! Mail link type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use weblink_core::constants::{
    BCC_FIELD, BODY_FIELD, CC_FIELD, MAIL_PARAMS_DELIMITER, MAILTO_PREFIX, PARAM_DELIMITER,
    SUBJECT_FIELD, TO_FIELD,
};

use super::build::{join_recipients, push_parameter};
use super::parse::{parse_parameters, split_recipients};
use crate::error::{LinkError, LinkResult};
use crate::rfc::link::WebLink;

/// A parsed `mailto:` link.
///
/// `None` means the field is absent. Recipient lists hold trimmed,
/// lower-cased and distinct addresses.
///
/// Parsing always sets `to`, possibly to an empty list. A link built
/// without `to`, such as `MailLink::new().with_subject("s")`, reads back
/// with `to: Some(vec![])`. The other fields round-trip unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl MailLink {
    /// Creates an empty mail link.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the full link including the `mailto:` prefix.
    #[must_use]
    pub fn get_link(&self) -> String {
        self.generate_link(true)
    }

    #[must_use]
    pub fn with_to<I, S>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.to = Some(recipients.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_cc<I, S>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cc = Some(recipients.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_bcc<I, S>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bcc = Some(recipients.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Returns the list if it is present and non-empty.
fn non_empty(list: Option<&Vec<String>>) -> Option<&[String]> {
    list.map(Vec::as_slice).filter(|list| !list.is_empty())
}

fn non_empty_str(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|value| !value.is_empty())
}

impl WebLink for MailLink {
    const PREFIX: &'static str = MAILTO_PREFIX;

    fn clear_fields(&mut self) {
        self.to = None;
        self.cc = None;
        self.bcc = None;
        self.subject = None;
        self.body = None;
    }

    #[tracing::instrument(skip(rest), fields(rest_len = rest.len()))]
    fn parse_fields(rest: &str) -> LinkResult<Self> {
        let (recipients, block) = match rest.split_once(MAIL_PARAMS_DELIMITER) {
            Some((recipients, block)) => (recipients, Some(block)),
            None => (rest, None),
        };

        let mut link = Self {
            to: Some(split_recipients(recipients)),
            ..Self::default()
        };

        let Some(block) = block else {
            tracing::trace!("Mail link has no parameter block");
            return Ok(link);
        };

        for (key, value) in parse_parameters(block, true)? {
            match key.as_str() {
                // Overrides the recipients before `?`
                TO_FIELD => link.to = Some(split_recipients(&value)),
                CC_FIELD => link.cc = Some(split_recipients(&value)),
                BCC_FIELD => link.bcc = Some(split_recipients(&value)),
                SUBJECT_FIELD => link.subject = Some(value),
                BODY_FIELD => link.body = Some(value),
                _ => tracing::trace!(key = %key, "Ignoring unrecognised mail parameter"),
            }
        }

        tracing::debug!(
            to = link.to.as_ref().map_or(0, Vec::len),
            cc = link.cc.as_ref().map_or(0, Vec::len),
            bcc = link.bcc.as_ref().map_or(0, Vec::len),
            "Parsed mail link"
        );

        Ok(link)
    }

    fn write_fields(&self, out: &mut String) {
        if let Some(to) = non_empty(self.to.as_ref()) {
            out.push_str(&join_recipients(to));
        }

        out.push(MAIL_PARAMS_DELIMITER);

        if let Some(cc) = non_empty(self.cc.as_ref()) {
            push_parameter(out, CC_FIELD, &join_recipients(cc));
        }

        if let Some(bcc) = non_empty(self.bcc.as_ref()) {
            push_parameter(out, BCC_FIELD, &join_recipients(bcc));
        }

        if let Some(subject) = non_empty_str(self.subject.as_ref()) {
            push_parameter(out, SUBJECT_FIELD, subject);
        }

        if let Some(body) = non_empty_str(self.body.as_ref()) {
            push_parameter(out, BODY_FIELD, body);
        }

        let trimmed = out
            .trim_end_matches([MAIL_PARAMS_DELIMITER, PARAM_DELIMITER])
            .len();
        out.truncate(trimmed);
    }
}

impl fmt::Display for MailLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.generate_link(true))
    }
}

impl FromStr for MailLink {
    type Err = LinkError;

    fn from_str(s: &str) -> LinkResult<Self> {
        Self::from_link(s)
    }
}
