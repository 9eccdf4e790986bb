//! HTTP response parser for the provider API.

use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::error::{HeroError, map_http_status_with_body};
use super::http::HttpResponse;

/// Parser for HTTP responses from the provider API.
pub struct ResponseParser;

impl ResponseParser {
    /// Parses a successful HTTP response into the expected type, or maps the
    /// error status.
    pub fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T, HeroError> {
        if (200..300).contains(&response.status) {
            let parsed: T = serde_json::from_slice(&response.body)?;
            Ok(parsed)
        } else {
            Err(Self::parse_error_response(response))
        }
    }

    /// Maps a non-success response to a `HeroError`.
    ///
    /// 401/403 (and a 400 naming the key) classify as authentication
    /// failures; every other status classifies as a transport failure.
    pub fn parse_error_response(response: HttpResponse) -> HeroError {
        let error = map_http_status_with_body(response.status, &response.body);

        tracing::debug!(
            request_id = Self::extract_request_id(&response.headers).as_deref().unwrap_or("-"),
            status = response.status,
            kind = error.kind().as_str(),
            "Provider returned an error status"
        );

        error
    }

    /// Extracts the request ID from response headers for debugging.
    pub fn extract_request_id(headers: &HashMap<String, String>) -> Option<String> {
        let possible_headers = ["x-request-id", "x-goog-request-id", "request-id"];

        headers
            .iter()
            .find(|(key, _)| {
                let key_lower = key.to_lowercase();
                possible_headers.contains(&key_lower.as_str())
            })
            .map(|(_, value)| value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AuthenticationError, ErrorKind, ProviderError};
    use bytes::Bytes;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct TestResponse {
        name: String,
        value: i32,
    }

    fn create_response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: HashMap::new(),
            body: Bytes::from(body.to_string()),
        }
    }

    #[test]
    fn test_parse_successful_response() {
        let response = create_response(200, r#"{"name":"test","value":42}"#);
        let parsed: TestResponse = ResponseParser::parse_response(response).unwrap();

        assert_eq!(parsed, TestResponse { name: "test".into(), value: 42 });
    }

    #[test]
    fn test_parse_malformed_success_body() {
        let response = create_response(200, "not json");
        let error = ResponseParser::parse_response::<TestResponse>(response).unwrap_err();

        assert!(matches!(error, HeroError::Response(_)));
    }

    #[test]
    fn test_parse_401_auth_error() {
        let response = create_response(401, r#"{"error":{"message":"Invalid API key"}}"#);
        let error = ResponseParser::parse_response::<TestResponse>(response).unwrap_err();

        assert!(matches!(error, HeroError::Authentication(AuthenticationError::InvalidApiKey)));
    }

    #[test]
    fn test_parse_429_is_transport_failure() {
        let response = create_response(429, r#"{"error":{"message":"Too many requests"}}"#);
        let error = ResponseParser::parse_response::<TestResponse>(response).unwrap_err();

        assert_eq!(error, HeroError::Provider(ProviderError::RateLimited));
        assert_eq!(error.kind(), ErrorKind::TransportFailure);
    }

    #[test]
    fn test_parse_503_is_server_error() {
        let response = create_response(503, r#"{"error":{"message":"Service unavailable"}}"#);
        let error = ResponseParser::parse_response::<TestResponse>(response).unwrap_err();

        assert!(matches!(error, HeroError::Provider(ProviderError::Server { status: 503, .. })));
    }

    #[test]
    fn test_extract_request_id_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("X-Goog-Request-ID".to_string(), "goog123".to_string());

        let request_id = ResponseParser::extract_request_id(&headers);
        assert_eq!(request_id, Some("goog123".to_string()));
    }
}
