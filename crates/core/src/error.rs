//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant maps to one class of stock-keeping failure. None of them are
/// fatal: the store logs them where they happen and hands them back so callers
/// may branch on the outcome.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument had the wrong shape (e.g. empty item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A well-formed request that the store refuses to act on
    /// (e.g. adding a non-positive quantity).
    #[error("rejected: {0}")]
    Rejected(String),

    /// The named item is not in stock.
    #[error("item '{0}' not in stock")]
    NotFound(String),

    /// The stored value for the named item is not a usable quantity.
    #[error("data for item '{0}' is corrupt")]
    CorruptData(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn corrupt(item: impl Into<String>) -> Self {
        Self::CorruptData(item.into())
    }

    /// Expected run-time outcomes (as opposed to caller or data errors).
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::Rejected(_) | Self::NotFound(_))
    }
}
