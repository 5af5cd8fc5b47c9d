//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic request-shape failures (malformed ids,
/// missing required fields). Backing-service concerns live in [`ServiceError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty required field).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (non-positive or unparseable).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

/// Result type returned by every service-contract operation.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure raised by a backing service.
///
/// Handlers never interpret this; it crosses the handler untouched and is
/// mapped to a generic server-fault response at the transport boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("backing service failure: {0}")]
    Backend(#[source] anyhow::Error),
}

impl ServiceError {
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }
}
