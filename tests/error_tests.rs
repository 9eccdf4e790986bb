//! Tests for the error taxonomy exposed to the presentation layer.

use integrations_hero_genai::error::{map_http_status_with_body, map_operation_error};
use integrations_hero_genai::transport::{HttpResponse, ResponseParser, TransportError};
use integrations_hero_genai::{ErrorKind, HeroError, ProviderError};
use bytes::Bytes;
use std::collections::HashMap;

fn response(status: u16, body: &str, headers: &[(&str, &str)]) -> HttpResponse {
    HttpResponse {
        status,
        headers: headers.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<HashMap<_, _>>(),
        body: Bytes::from(body.to_string()),
    }
}

#[test]
fn test_status_classification() {
    let cases = [
        (400, r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#, ErrorKind::AuthenticationFailure),
        (400, r#"{"error":{"code":400,"message":"Unsupported aspect ratio","status":"INVALID_ARGUMENT"}}"#, ErrorKind::TransportFailure),
        (401, "", ErrorKind::AuthenticationFailure),
        (403, r#"{"error":{"code":403,"message":"denied","status":"PERMISSION_DENIED"}}"#, ErrorKind::AuthenticationFailure),
        (404, r#"{"error":{"code":404,"message":"model not found","status":"NOT_FOUND"}}"#, ErrorKind::TransportFailure),
        (429, "", ErrorKind::TransportFailure),
        (500, "<html>oops</html>", ErrorKind::TransportFailure),
    ];

    for (status, body, expected) in cases {
        let error = map_http_status_with_body(status, body.as_bytes());
        assert_eq!(error.kind(), expected, "status {} body {}", status, body);
    }
}

#[test]
fn test_error_statuses_surface_as_transport_failures() {
    for status in [429, 500, 503] {
        let error = ResponseParser::parse_error_response(response(
            status,
            r#"{"error":{"message":"try later"}}"#,
            &[("x-goog-request-id", "req-7")],
        ));
        assert_eq!(error.kind(), ErrorKind::TransportFailure, "status {}", status);
    }

    let error = ResponseParser::parse_error_response(response(429, "{}", &[("retry-after", "12")]));
    assert_eq!(error, HeroError::Provider(ProviderError::RateLimited));
}

#[test]
fn test_auth_statuses_surface_as_authentication_failures() {
    for status in [401, 403] {
        let error = ResponseParser::parse_error_response(response(status, "", &[]));
        assert_eq!(error.kind(), ErrorKind::AuthenticationFailure, "status {}", status);
    }
}

#[test]
fn test_transport_errors_are_transport_failures() {
    for error in [
        TransportError::Timeout,
        TransportError::Connection("refused".into()),
        TransportError::Request("body".into()),
    ] {
        assert_eq!(HeroError::from(error).kind(), ErrorKind::TransportFailure);
    }
}

#[test]
fn test_operation_error_display() {
    let error = map_operation_error("operations/1", 3, "bad prompt".into());

    assert_eq!(error.kind(), ErrorKind::OperationError);
    assert_eq!(error.to_string(), "Operation error: Operation operations/1 failed (code 3): bad prompt");
}

#[test]
fn test_kind_labels() {
    assert_eq!(ErrorKind::AudioGenerationFailed.as_str(), "audio_generation_failed");
    assert_eq!(ErrorKind::TransportFailure.as_str(), "transport_failure");
}
