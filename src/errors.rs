//! Error taxonomy for scoring requests.
//!
//! Two categories exist: malformed input (`InvalidRequest`) and failures
//! from the externally-backed collaborators (`Collaborator`). Collaborator
//! failures are usually absorbed by the engine's degraded-mode policy and
//! only surface here when a caller invokes a collaborator directly.

use thiserror::Error;

/// Failures from the grammar-checking or sentiment-analysis collaborators.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// The HTTP request itself failed (connection, timeout, body read).
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The service answered with a non-success status.
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
    /// The service answered but the payload was not understood.
    #[error("malformed collaborator response: {0}")]
    Malformed(String),
}

/// Top-level error for scoring operations.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The request body could not be parsed into the expected structure.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}
