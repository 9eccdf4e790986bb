//! End-to-end tests of the reqwest transport against a local mock server.

use integrations_hero_genai::{
    AuthMethod, ClientFactory, ErrorKind, HeroConfig, OperationHandle, OperationState, Orchestrator,
};
use secrecy::SecretString;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn orchestrator_for(config: HeroConfig) -> Orchestrator {
    Orchestrator::new(Arc::new(ClientFactory::new(config)))
}

fn config_for(server: &MockServer, api_key: &str) -> HeroConfig {
    HeroConfig::builder()
        .api_key(SecretString::new(api_key.into()))
        .base_url(&server.uri())
        .unwrap()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_generate_content_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": "Inhale for four."}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let orchestrator = orchestrator_for(config_for(&server, "test-key"));
    let guide = orchestrator.generate_guide_text("Box Breathing").await.unwrap();

    assert_eq!(guide, "Inhale for four.");
}

#[tokio::test]
async fn test_missing_key_surfaces_on_first_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"code": 401, "message": "Request is missing required authentication credential.", "status": "UNAUTHENTICATED"}
        })))
        .mount(&server)
        .await;

    let orchestrator = orchestrator_for(config_for(&server, ""));

    // Construction tolerates the empty key and always yields the same client.
    let first = orchestrator.factory().get_client().unwrap();
    let second = orchestrator.factory().get_client().unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let err = orchestrator.get_communication_advice("holidays").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AuthenticationFailure);
}

#[tokio::test]
async fn test_query_param_auth() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/imagen-4.0-generate-001:predict"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "predictions": [{"bytesBase64Encoded": "AAAA", "mimeType": "image/jpeg"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = HeroConfig::builder()
        .api_key(SecretString::new("test-key".into()))
        .base_url(&server.uri())
        .unwrap()
        .auth_method(AuthMethod::QueryParam)
        .build()
        .unwrap();

    let image = orchestrator_for(config)
        .generate_image("a lighthouse", integrations_hero_genai::AspectRatio::Square)
        .await
        .unwrap();

    assert_eq!(image.data, "AAAA");
}

#[tokio::test]
async fn test_poll_operation_over_http() {
    let server = MockServer::start().await;
    let name = "models/veo-3.1-fast-generate-preview/operations/xyz";

    Mock::given(method("GET"))
        .and(path(format!("/v1beta/{}", name)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": name,
            "done": true,
            "response": {"generateVideoResponse": {"generatedSamples": [{"video": {"uri": "https://example.com/v.mp4"}}]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let orchestrator = orchestrator_for(config_for(&server, "test-key"));
    let handle = orchestrator.poll_video_operation(&OperationHandle::pending(name)).await.unwrap();

    assert_eq!(handle.state(), OperationState::Resolved);
    assert_eq!(handle.result().unwrap().uri, "https://example.com/v.mp4");
}

#[tokio::test]
async fn test_rate_limit_is_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "30")
                .set_body_json(json!({"error": {"code": 429, "message": "quota", "status": "RESOURCE_EXHAUSTED"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = orchestrator_for(config_for(&server, "test-key"))
        .generate_speech("hello")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TransportFailure);
}

#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    let config = HeroConfig::builder()
        .base_url("http://127.0.0.1:1")
        .unwrap()
        .timeout(Duration::from_secs(2))
        .connect_timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    let err = orchestrator_for(config).generate_guide_text("Grounding").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransportFailure);
}
