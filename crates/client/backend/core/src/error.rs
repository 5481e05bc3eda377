//! Backend error types.

/// Errors from any backend implementation.
///
/// Failures are surfaced inline by the frontend and leave prior state
/// untouched; no implementation retries on its own.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Network-level failure before a response arrived.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the documented contract.
    #[error("failed to decode backend response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, BackendError>;
