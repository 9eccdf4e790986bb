//! Transport layer error types.

/// Failure below the HTTP status line.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// Could not reach the provider.
    #[error("Connection error: {0}")]
    Connection(String),
    /// The request exceeded its timeout.
    #[error("Timeout")]
    Timeout,
    /// The request or its body failed mid-flight.
    #[error("Request error: {0}")]
    Request(String),
}
