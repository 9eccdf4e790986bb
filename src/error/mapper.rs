//! Error mapping utilities for HTTP status codes and API responses.

use serde::Deserialize;
use super::categories::*;
use super::types::HeroError;

/// Structured API error response from the provider.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    /// The `error` object.
    pub error: ApiErrorDetail,
}

/// Detailed error information from API.
#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    /// Numeric code, mirrors the HTTP status.
    #[serde(default)]
    pub code: i32,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// Canonical status such as `PERMISSION_DENIED`.
    #[serde(default)]
    pub status: String,
}

/// Maps HTTP status codes and response body to the matching `HeroError`.
///
/// 401 and 403 are authentication failures (this is how an empty credential
/// surfaces); every other non-success status is a provider-side transport failure.
pub fn map_http_status_with_body(status: u16, body: &[u8]) -> HeroError {
    let (message, api_status) = match serde_json::from_slice::<ApiErrorResponse>(body) {
        Ok(error_response) => (error_response.error.message, Some(error_response.error.status)),
        Err(_) => (String::from_utf8_lossy(body).to_string(), None),
    };

    match status {
        400 => {
            // The provider reports a missing or malformed key as 400 INVALID_ARGUMENT.
            if looks_like_key_problem(&message) {
                HeroError::Authentication(AuthenticationError::InvalidApiKey)
            } else {
                HeroError::Provider(ProviderError::BadRequest { message })
            }
        }

        401 => HeroError::Authentication(AuthenticationError::InvalidApiKey),

        403 => {
            if api_status.as_deref() == Some("PERMISSION_DENIED") || !message.is_empty() {
                HeroError::Authentication(AuthenticationError::PermissionDenied { message })
            } else {
                HeroError::Authentication(AuthenticationError::InvalidApiKey)
            }
        }

        404 => HeroError::Provider(ProviderError::NotFound { message }),

        429 => HeroError::Provider(ProviderError::RateLimited),

        _ => HeroError::Provider(ProviderError::Server { status, message }),
    }
}

/// Maps the `error` object of a finished long-running operation.
pub fn map_operation_error(operation: &str, code: i32, message: String) -> HeroError {
    HeroError::Operation(OperationError {
        operation: operation.to_string(),
        code,
        message,
    })
}

fn looks_like_key_problem(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("api key") || lower.contains("api_key")
}
