//! Error types for the landing page library.

use thiserror::Error;

/// Misuse of the static content tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("cannot rotate over an empty sequence")]
    EmptySequence,

    #[error("index {index} is out of range for a sequence of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Failure reported by a waitlist backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WaitlistError {
    /// The service answered and refused the address.
    #[error("the waitlist rejected this address: {0}")]
    Rejected(String),

    /// The service could not be reached.
    #[error("the waitlist is unavailable right now")]
    Unavailable,
}

/// Invalid runtime configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("malformed landing config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid landing config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
