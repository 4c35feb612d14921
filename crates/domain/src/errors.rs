use crate::answer::UpstreamFailure;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown resolver: {0}")]
    UnknownResolver(String),

    #[error("Unsupported response dialect: {0}")]
    UnsupportedDialect(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamFailure),

    #[error("Malformed query: {0}")]
    MalformedQuery(String),
}

impl DomainError {
    /// Caller errors are rejected before any upstream request is made.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownResolver(_) | DomainError::MalformedQuery(_)
        )
    }
}
