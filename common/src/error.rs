use std::path::PathBuf;

use thiserror::Error;

/// Raised while turning user input into target units.
///
/// Every variant is produced before a single worker is spawned, so a caller
/// either gets one of these or a complete result set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    #[error("invalid target range '{input}': {reason}")]
    InvalidRange { input: String, reason: String },

    #[error("invalid port specification '{input}': {reason}")]
    InvalidPortSpec { input: String, reason: String },

    #[error("wordlist not found: {}", path.display())]
    WordlistNotFound { path: PathBuf },

    #[error("wordlist {} could not be read: {reason}", path.display())]
    WordlistUnreadable { path: PathBuf, reason: String },

    #[error("invalid domain '{0}'")]
    InvalidDomain(String),
}

impl EnumerationError {
    pub(crate) fn range(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn port_spec(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPortSpec {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
