use thiserror::Error;

/// Errors produced by the genetics core.
///
/// Both kinds are precondition violations: nothing is retried and no state is
/// mutated when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A genotype or gamete string is malformed.
    #[error("invalid input {input:?}: {reason}")]
    Validation { input: String, reason: String },

    /// An operation was invoked before the cross or gamete pool it needs exists.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl Error {
    pub(crate) fn validation(input: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
