//! Resource framework error types
//!
//! Error definitions with not-found/transient/fatal classification. The
//! classification drives the one place the lifecycle layer is allowed to
//! interpret a failure: a `NotFound` during read clears the record identity
//! instead of surfacing an error.

use thiserror::Error;

/// Result type for resource operations.
pub type ResourceResult<T> = Result<T, ResourceError>;

/// Error that can occur during resource reconciliation.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Configuration validation error.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Token acquisition or refresh failed.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Remote API rejected the request.
    #[error("remote API error ({status}): {code} - {message}")]
    Api {
        /// HTTP status returned by the remote service.
        status: u16,
        /// Machine-readable error code from the response body.
        code: String,
        /// Human-readable message from the response body.
        message: String,
    },

    /// HTTP transport failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Remote response was missing data the operation depends on.
    #[error("malformed remote response: {0}")]
    Decode(String),

    /// Remote object with the given identity does not exist.
    #[error("object not found: {id}")]
    NotFound { id: String },

    /// Operation requires a remote identity but the record has none.
    #[error("record has no identity, cannot {operation}")]
    MissingIdentity { operation: &'static str },
}

/// Coarse failure classification for reconciliation decisions.
///
/// Only `NotFound` ever changes lifecycle behavior; the transient/fatal
/// split exists so hosts can make a sensible retry decision without
/// re-parsing error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Terminal absence of the remote object.
    NotFound,
    /// Temporary condition; the same call may succeed later.
    Transient,
    /// Permanent failure; retry won't help.
    Fatal,
}

impl ResourceError {
    /// Classify this error for reconciliation purposes.
    pub fn class(&self) -> ErrorClass {
        match self {
            ResourceError::NotFound { .. } => ErrorClass::NotFound,
            ResourceError::Api { status, .. } => match *status {
                404 => ErrorClass::NotFound,
                408 | 429 | 500..=599 => ErrorClass::Transient,
                _ => ErrorClass::Fatal,
            },
            ResourceError::Transport(e) if e.is_timeout() || e.is_connect() => {
                ErrorClass::Transient
            }
            ResourceError::Transport(_)
            | ResourceError::Config(_)
            | ResourceError::Auth(_)
            | ResourceError::Decode(_)
            | ResourceError::MissingIdentity { .. } => ErrorClass::Fatal,
        }
    }

    /// Check if this error means the remote object is terminally absent.
    pub fn is_not_found(&self) -> bool {
        self.class() == ErrorClass::NotFound
    }

    /// Check if this error is transient and the operation may be retried.
    pub fn is_transient(&self) -> bool {
        self.class() == ErrorClass::Transient
    }

    /// Create a not-found error for the given identity.
    pub fn not_found(id: impl Into<String>) -> Self {
        ResourceError::NotFound { id: id.into() }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        ResourceError::Config(message.into())
    }

    /// Create an authentication error.
    pub fn auth(message: impl Into<String>) -> Self {
        ResourceError::Auth(message.into())
    }
}
