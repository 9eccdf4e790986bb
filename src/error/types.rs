//! Main error type for the HERO generation client.

use thiserror::Error;
use super::categories::*;

/// Result type alias for orchestration calls.
pub type HeroResult<T> = Result<T, HeroError>;

/// Top-level error type for the orchestration layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HeroError {
    /// Local configuration could not be built.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The provider rejected the credential.
    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    /// No HTTP answer was received.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Non-success HTTP answer.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The answer lacked the expected artifact or did not parse.
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// A video operation finished with an error.
    #[error("Operation error: {0}")]
    Operation(#[from] OperationError),
}

/// Coarse classification the presentation layer uses to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Local configuration could not be built.
    Configuration,
    /// Bad or missing credential.
    AuthenticationFailure,
    /// Text was expected but absent.
    EmptyResponse,
    /// No image in an image response.
    NoImageGenerated,
    /// No inline audio in a speech response.
    AudioGenerationFailed,
    /// A video operation finished with an error.
    OperationError,
    /// Network fault or non-success provider answer.
    TransportFailure,
    /// The provider answered with a body we could not parse.
    MalformedResponse,
}

impl ErrorKind {
    /// Snake-case label for logs and metrics.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::AuthenticationFailure => "authentication_failure",
            ErrorKind::EmptyResponse => "empty_response",
            ErrorKind::NoImageGenerated => "no_image_generated",
            ErrorKind::AudioGenerationFailed => "audio_generation_failed",
            ErrorKind::OperationError => "operation_error",
            ErrorKind::TransportFailure => "transport_failure",
            ErrorKind::MalformedResponse => "malformed_response",
        }
    }
}

impl HeroError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HeroError::Configuration(_) => ErrorKind::Configuration,
            HeroError::Authentication(_) => ErrorKind::AuthenticationFailure,
            HeroError::Network(_) | HeroError::Provider(_) => ErrorKind::TransportFailure,
            HeroError::Response(ResponseError::EmptyResponse) => ErrorKind::EmptyResponse,
            HeroError::Response(ResponseError::NoImageGenerated) => ErrorKind::NoImageGenerated,
            HeroError::Response(ResponseError::AudioGenerationFailed) => ErrorKind::AudioGenerationFailed,
            HeroError::Response(ResponseError::DeserializationError { .. }) => ErrorKind::MalformedResponse,
            HeroError::Operation(_) => ErrorKind::OperationError,
        }
    }
}

impl From<serde_json::Error> for HeroError {
    fn from(err: serde_json::Error) -> Self {
        HeroError::Response(ResponseError::DeserializationError {
            message: err.to_string(),
        })
    }
}

impl From<url::ParseError> for HeroError {
    fn from(err: url::ParseError) -> Self {
        HeroError::Configuration(ConfigurationError::InvalidBaseUrl {
            url: err.to_string(),
        })
    }
}

impl From<crate::transport::TransportError> for HeroError {
    fn from(err: crate::transport::TransportError) -> Self {
        use crate::transport::TransportError;
        match err {
            TransportError::Timeout => HeroError::Network(NetworkError::Timeout),
            TransportError::Connection(message) | TransportError::Request(message) => {
                HeroError::Network(NetworkError::ConnectionFailed { message })
            }
        }
    }
}
