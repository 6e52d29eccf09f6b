//! Domain error types.
//!
//! These errors represent validation failures of caller-supplied values.
//! They are distinct from API/IO errors.

/// Domain-level errors for argument validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A numeric or calendar argument is outside its documented domain
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },
}

impl DomainError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        DomainError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
