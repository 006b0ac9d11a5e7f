//! Error types for Chinadep platform operations.

use crate::types::MAX_BATCH_SIZE;

/// HTTP-status classification shared by every platform endpoint.
///
/// The platform returns business results inside HTTP 200 bodies; any other
/// status is a transport-level rejection classified here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    /// The submitted data was malformed (400).
    #[error("bad request: {0}")]
    BadRequest(u16),

    /// Authentication was rejected (401).
    #[error("unauthorized: {0}")]
    Unauthorized(u16),

    /// The request was blocked by the platform's security policy; contact
    /// the administrator to be whitelisted (403).
    #[error("security policy error, contact the platform administrator: {0}")]
    Forbidden(u16),

    /// The requested resource does not exist (404).
    #[error("resource not found: {0}")]
    NotFound(u16),

    /// The platform failed internally (500).
    #[error("internal server error: {0}")]
    Internal(u16),

    /// Any other status code.
    #[error("unexpected status code: {0}")]
    Unknown(u16),
}

impl StatusError {
    /// Classify a response status code. Exactly HTTP 200 passes.
    pub fn check(status: u16) -> Result<(), StatusError> {
        match status {
            200 => Ok(()),
            400 => Err(Self::BadRequest(status)),
            401 => Err(Self::Unauthorized(status)),
            403 => Err(Self::Forbidden(status)),
            404 => Err(Self::NotFound(status)),
            500 => Err(Self::Internal(status)),
            other => Err(Self::Unknown(other)),
        }
    }
}

/// Errors that can occur when applying for or refreshing a token.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to decode the response body.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Server returned a non-success HTTP status.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// Refresh was attempted before a token was obtained.
    #[error("not authenticated: apply for a token first")]
    NotAuthenticated,

    /// HTTP succeeded but the platform rejected the request.
    #[error("token request rejected: {0}")]
    Rejected(String),
}

/// Errors that can occur when registering assets.
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to serialize the batch or decode the response body.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Server returned a non-success HTTP status.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// No token has been obtained yet.
    #[error("not authenticated: apply for a token first")]
    NotAuthenticated,

    /// The held access token has passed its expiry.
    #[error("access token expired, refresh it first")]
    TokenExpired,

    /// The batch exceeds the per-call record limit.
    #[error("batch of {0} records exceeds the limit of {max}", max = MAX_BATCH_SIZE)]
    BatchTooLarge(usize),

    /// HTTP succeeded but the platform rejected the batch.
    #[error("registration rejected: {0}")]
    Rejected(String),
}
