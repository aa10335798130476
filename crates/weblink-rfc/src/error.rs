use thiserror::Error;

/// Link parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("Invalid input: {0} is missing")]
    InvalidInput(&'static str),

    #[error("Format error: {0}")]
    FormatError(String),
}

impl LinkError {
    /// Creates a format error with the given message.
    #[must_use]
    pub fn format(message: impl Into<String>) -> Self {
        Self::FormatError(message.into())
    }
}

pub type LinkResult<T> = std::result::Result<T, LinkError>;
