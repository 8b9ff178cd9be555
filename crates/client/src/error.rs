//! Client-side error taxonomy.

use reqwest::StatusCode;

/// Errors surfaced by [`crate::ApiClient`] and [`crate::TokenStore`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server rejected the bearer token (HTTP 401). The caller must drop
    /// the stored session and log in again.
    #[error("Session expired, please log in again")]
    SessionExpired,

    /// The server answered with a non-success status and (usually) a
    /// `message` body.
    #[error("{message} (HTTP {status})")]
    Api { status: StatusCode, message: String },

    /// The request never completed (connection refused, timeout, bad URL).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Token store file I/O failed.
    #[error("Token store error: {0}")]
    TokenStore(#[from] std::io::Error),
}
