//! Error category types for granular error handling.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// The configured base URL does not parse.
    #[error("Invalid base URL: {url}")]
    InvalidBaseUrl {
        /// Parser message for the rejected URL.
        url: String,
    },
}

/// Authentication-related errors.
///
/// A missing credential is accepted at startup and only shows up here, once the
/// provider rejects the first call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthenticationError {
    /// The key was empty, unknown or revoked.
    #[error("Invalid or missing API key")]
    InvalidApiKey,

    /// The key is valid but may not use this model or endpoint.
    #[error("Permission denied: {message}")]
    PermissionDenied {
        /// Provider message.
        message: String,
    },
}

/// Network-related errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// The request never produced an HTTP answer.
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Transport message.
        message: String,
    },

    /// The configured timeout elapsed.
    #[error("Request timed out")]
    Timeout,
}

/// Non-success answers from the provider that are not authentication failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// 400 not caused by the credential.
    #[error("Bad request: {message}")]
    BadRequest {
        /// Provider message.
        message: String,
    },

    /// 404, usually an unknown model or operation name.
    #[error("Not found: {message}")]
    NotFound {
        /// Provider message.
        message: String,
    },

    /// 429 quota exhaustion.
    #[error("Too many requests")]
    RateLimited,

    /// Any other non-success status.
    #[error("Provider error (HTTP {status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Provider message or raw body.
        message: String,
    },
}

/// Response parsing and extraction errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResponseError {
    /// The body did not match the expected shape.
    #[error("Failed to deserialize response: {message}")]
    DeserializationError {
        /// Parser message.
        message: String,
    },

    /// Text was expected but none came back.
    #[error("Response contained no text")]
    EmptyResponse,

    /// No image payload in an image response.
    #[error("No image generated in response")]
    NoImageGenerated,

    /// No inline audio in a speech response.
    #[error("Failed to generate audio from text")]
    AudioGenerationFailed,
}

/// Failure reported by a long-running operation that reached its terminal state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Operation {operation} failed (code {code}): {message}")]
pub struct OperationError {
    /// Identifier of the failed operation.
    pub operation: String,
    /// Provider status code, 0 when absent.
    pub code: i32,
    /// Provider message.
    pub message: String,
}
