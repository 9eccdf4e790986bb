//! Integration tests for the capability orchestrator over a mock transport.

use integrations_hero_genai::fixtures::load_fixture;
use integrations_hero_genai::mocks::MockHttpTransport;
use integrations_hero_genai::observability::create_noop_stack;
use integrations_hero_genai::transport::{HttpMethod, TransportError};
use integrations_hero_genai::{
    AspectRatio, CapabilityOutcome, CapabilityRequest, ClientFactory, ErrorKind, GenAiClientBuilder,
    GeneratedArtifact, HeroConfig, Orchestrator, SourceKind, VideoAspectRatio,
    HERO_SYSTEM_INSTRUCTION,
};
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::{json, Value};
use std::sync::Arc;

/// Helper to create an orchestrator over a mock transport.
fn create_test_orchestrator() -> (Arc<MockHttpTransport>, Orchestrator) {
    let transport = Arc::new(MockHttpTransport::new());
    let config = HeroConfig::builder()
        .api_key(SecretString::new("test-key".into()))
        .build()
        .unwrap();

    let builder = GenAiClientBuilder::new(config)
        .transport(transport.clone())
        .observability(create_noop_stack("test"));

    (transport, Orchestrator::new(Arc::new(ClientFactory::with_builder(builder))))
}

fn text_response(text: &str) -> Value {
    json!({"candidates": [{"content": {"role": "model", "parts": [{"text": text}]}, "finishReason": "STOP"}]})
}

fn last_body(transport: &MockHttpTransport) -> Value {
    transport.last_request().unwrap().json_body().unwrap()
}

fn system_instruction(body: &Value) -> Option<String> {
    body.get("systemInstruction")
        .map(|si| si["parts"][0]["text"].as_str().unwrap().to_string())
}

#[tokio::test]
async fn test_guide_text_returns_markdown_and_carries_policy() {
    // Arrange
    let (transport, orchestrator) = create_test_orchestrator();
    transport.enqueue_json_response(200, &load_fixture("content/guide_response.json"));

    // Act
    let guide = orchestrator.generate_guide_text("Box Breathing").await.unwrap();

    // Assert
    assert!(guide.starts_with("## Box Breathing"));
    transport.verify_request_count(1);
    transport.verify_request(0, HttpMethod::Post, "/v1beta/models/gemini-2.5-flash:generateContent");

    let body = last_body(&transport);
    assert_eq!(system_instruction(&body).as_deref(), Some(HERO_SYSTEM_INSTRUCTION));
    assert!(body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap()
        .contains("\"Box Breathing\" exercise"));
}

#[tokio::test]
async fn test_api_key_header_sent() {
    let (transport, orchestrator) = create_test_orchestrator();
    transport.enqueue_json(&text_response("ok"));

    orchestrator.get_communication_advice("holiday visits").await.unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.headers.get("x-goog-api-key").map(String::as_str), Some("test-key"));
}

#[tokio::test]
async fn test_mode_suffixes() {
    let (transport, orchestrator) = create_test_orchestrator();

    transport.enqueue_json(&text_response("plan"));
    orchestrator.generate_fitness_plan("gentle, 20 minutes").await.unwrap();
    let fitness = last_body(&transport);
    transport.verify_request(0, HttpMethod::Post, "models/gemini-2.5-pro:generateContent");
    assert_eq!(fitness["generationConfig"]["thinkingConfig"]["thinkingBudget"], 32768);
    assert!(system_instruction(&fitness).unwrap().ends_with(
        "Emphasize breath-paced movement and self-compassion."
    ));

    transport.enqueue_json(&text_response("edited"));
    orchestrator.get_writing_assistance("My first day home.", "make it shorter").await.unwrap();
    let writing = system_instruction(&last_body(&transport)).unwrap();
    assert_eq!(
        writing,
        format!(
            "{} You are a supportive writing assistant for a veteran. Your goal is to help them tell their story in their own voice.",
            HERO_SYSTEM_INSTRUCTION
        )
    );

    transport.enqueue_json(&text_response("advice"));
    orchestrator.get_communication_advice("holiday visits").await.unwrap();
    let communication = system_instruction(&last_body(&transport)).unwrap();
    assert!(communication.ends_with("supporting veterans' families."));
}

#[tokio::test]
async fn test_media_capabilities_never_carry_policy() {
    let (transport, orchestrator) = create_test_orchestrator();

    transport.enqueue_json_response(200, &load_fixture("images/predict_response.json"));
    orchestrator.generate_image("a calm lake", AspectRatio::Square).await.unwrap();
    assert_eq!(system_instruction(&last_body(&transport)), None);

    transport.enqueue_json_response(200, &load_fixture("content/edit_response.json"));
    orchestrator.edit_image("add a sunrise", "iVBORw0KGgo=", "image/png").await.unwrap();
    assert_eq!(system_instruction(&last_body(&transport)), None);

    transport.enqueue_json_response(200, &load_fixture("content/speech_response.json"));
    orchestrator.generate_speech("You are safe here.").await.unwrap();
    assert_eq!(system_instruction(&last_body(&transport)), None);

    transport.enqueue_json_response(200, &load_fixture("videos/operation_submitted.json"));
    orchestrator.generate_video_from_text("waves", VideoAspectRatio::Landscape).await.unwrap();
    assert_eq!(system_instruction(&last_body(&transport)), None);
}

#[tokio::test]
async fn test_generate_image_passes_aspect_ratio_unchanged() {
    let (transport, orchestrator) = create_test_orchestrator();
    transport.enqueue_json_response(200, &load_fixture("images/predict_response.json"));

    let image = orchestrator.generate_image("mountain trail", AspectRatio::Widescreen).await.unwrap();

    assert_eq!(image.mime_type, "image/jpeg");
    assert!(image.data_url().starts_with("data:image/jpeg;base64,"));
    transport.verify_request(0, HttpMethod::Post, "models/imagen-4.0-generate-001:predict");

    let body = last_body(&transport);
    assert_eq!(body["parameters"]["aspectRatio"], "16:9");
    assert_eq!(body["parameters"]["sampleCount"], 1);
}

#[tokio::test]
async fn test_no_image_generated() {
    let (transport, orchestrator) = create_test_orchestrator();
    transport.enqueue_json(&json!({}));

    let err = orchestrator.generate_image("anything", AspectRatio::Portrait).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoImageGenerated);
}

#[tokio::test]
async fn test_edit_and_analyze_send_both_parts() {
    let (transport, orchestrator) = create_test_orchestrator();

    transport.enqueue_json_response(200, &load_fixture("content/edit_response.json"));
    let edited = orchestrator.edit_image("add a sunrise", "AAAA", "image/png").await.unwrap();
    assert_eq!(edited.data_url(), "data:image/png;base64,iVBORw0KGgo=");

    let body = last_body(&transport);
    assert_eq!(
        body["contents"][0]["parts"],
        json!([
            {"inlineData": {"mimeType": "image/png", "data": "AAAA"}},
            {"text": "add a sunrise"}
        ])
    );

    transport.enqueue_json(&text_response("A quiet forest path."));
    let answer = orchestrator.analyze_image("What is in this picture?", "BBBB", "image/jpeg").await.unwrap();
    assert_eq!(answer, "A quiet forest path.");

    let body = last_body(&transport);
    let parts = body["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0]["inlineData"]["data"], "BBBB");
    assert_eq!(parts[1]["text"], "What is in this picture?");
    assert_eq!(system_instruction(&body).as_deref(), Some(HERO_SYSTEM_INSTRUCTION));
}

#[tokio::test]
async fn test_speech_returns_audio() {
    let (transport, orchestrator) = create_test_orchestrator();
    transport.enqueue_json_response(200, &load_fixture("content/speech_response.json"));

    let audio = orchestrator.generate_speech("Breathe in slowly.").await.unwrap();

    assert_eq!(audio.data, "AAABAAIAAwA=");
    assert_eq!(audio.sample_rate(), Some(24000));
    assert_eq!(audio.decode().unwrap().len(), 8);
    transport.verify_request(0, HttpMethod::Post, "models/gemini-2.5-flash-preview-tts:generateContent");
}

#[tokio::test]
async fn test_speech_without_audio_fails() {
    let (transport, orchestrator) = create_test_orchestrator();
    transport.enqueue_json(&text_response("I cannot speak that."));

    let err = orchestrator.generate_speech("hello").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AudioGenerationFailed);
}

#[tokio::test]
async fn test_grounded_text_with_sources() {
    let (transport, orchestrator) = create_test_orchestrator();
    transport.enqueue_json_response(200, &load_fixture("content/grounded_response.json"));

    let grounded = orchestrator.generate_grounded_text("How do I reach the crisis line?").await.unwrap();

    assert!(grounded.text.contains("988"));
    assert_eq!(grounded.sources.len(), 1);
    assert_eq!(grounded.sources[0].kind, SourceKind::Web);
    assert_eq!(last_body(&transport)["tools"], json!([{"googleSearch": {}}]));
}

#[tokio::test]
async fn test_location_grounded_text() {
    let (transport, orchestrator) = create_test_orchestrator();
    transport.enqueue_json(&text_response("There is a clinic two miles north."));

    let grounded = orchestrator
        .generate_location_grounded_text("Nearest VA clinic?", 40.7128, -74.006)
        .await
        .unwrap();

    assert!(grounded.sources.is_empty());
    let body = last_body(&transport);
    let lat_lng = &body["toolConfig"]["retrievalConfig"]["latLng"];
    assert!((lat_lng["latitude"].as_f64().unwrap() - 40.7128).abs() < 1e-9);
    assert!((lat_lng["longitude"].as_f64().unwrap() + 74.006).abs() < 1e-9);
}

#[tokio::test]
async fn test_meditation_text() {
    let (transport, orchestrator) = create_test_orchestrator();
    transport.enqueue_json(&text_response("Find a comfortable position..."));

    let script = orchestrator.generate_meditation_text("feeling safe", 5).await.unwrap();

    assert_eq!(script, "Find a comfortable position...");
    let prompt = last_body(&transport)["contents"][0]["parts"][0]["text"].as_str().unwrap().to_string();
    assert!(prompt.starts_with("Generate a 5-minute guided meditation script about \"feeling safe\"."));
}

#[tokio::test]
async fn test_empty_text_response() {
    let (transport, orchestrator) = create_test_orchestrator();
    transport.enqueue_json(&json!({"candidates": [{"content": {"parts": []}, "finishReason": "SAFETY"}]}));

    let err = orchestrator.generate_guide_text("Grounding").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyResponse);
}

#[tokio::test]
async fn test_provider_errors_map_to_kinds() {
    let (transport, orchestrator) = create_test_orchestrator();

    transport.enqueue_json_response(401, r#"{"error":{"code":401,"message":"Unauthenticated","status":"UNAUTHENTICATED"}}"#);
    let err = orchestrator.generate_guide_text("Grounding").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AuthenticationFailure);

    transport.enqueue_json_response(403, r#"{"error":{"code":403,"message":"denied","status":"PERMISSION_DENIED"}}"#);
    let err = orchestrator.generate_guide_text("Grounding").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AuthenticationFailure);

    transport.enqueue_json_response(503, r#"{"error":{"code":503,"message":"overloaded","status":"UNAVAILABLE"}}"#);
    let err = orchestrator.generate_guide_text("Grounding").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransportFailure);

    transport.enqueue_error(TransportError::Timeout);
    let err = orchestrator.generate_guide_text("Grounding").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransportFailure);

    transport.enqueue_json_response(200, "not json");
    let err = orchestrator.generate_guide_text("Grounding").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);

    // No retries: one request per call.
    transport.verify_request_count(5);
}

#[tokio::test]
async fn test_errors_do_not_poison_shared_client() {
    let (transport, orchestrator) = create_test_orchestrator();
    transport.enqueue_error(TransportError::Connection("reset".into()));
    transport.enqueue_json(&text_response("still here"));

    assert!(orchestrator.generate_guide_text("Grounding").await.is_err());
    assert_eq!(orchestrator.generate_guide_text("Grounding").await.unwrap(), "still here");
}

#[tokio::test]
async fn test_execute_dispatches_every_shape() {
    let (transport, orchestrator) = create_test_orchestrator();

    let outcome = orchestrator.execute(CapabilityRequest::ChatCreate).await.unwrap();
    assert!(matches!(outcome, CapabilityOutcome::Chat(_)));
    transport.verify_request_count(0);

    transport.enqueue_json(&text_response("advice"));
    let outcome = orchestrator
        .execute(CapabilityRequest::CommunicationAdvice { scenario: "s".into() })
        .await
        .unwrap();
    match outcome {
        CapabilityOutcome::Artifact(GeneratedArtifact::Text(text)) => assert_eq!(text, "advice"),
        other => panic!("expected text artifact, got {:?}", other),
    }

    transport.enqueue_json_response(200, &load_fixture("videos/operation_submitted.json"));
    let outcome = orchestrator
        .execute(CapabilityRequest::VideoFromText { prompt: "p".into(), aspect_ratio: VideoAspectRatio::Portrait })
        .await
        .unwrap();
    match outcome {
        CapabilityOutcome::Operation(handle) => assert!(!handle.is_done()),
        other => panic!("expected operation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_concurrent_calls_share_client() {
    let (transport, orchestrator) = create_test_orchestrator();
    for _ in 0..4 {
        transport.enqueue_json(&text_response("ok"));
    }

    let calls = (0..4).map(|_| orchestrator.generate_guide_text("Grounding"));
    let results = futures::future::join_all(calls).await;

    assert!(results.iter().all(Result::is_ok));
    transport.verify_request_count(4);
    assert!(orchestrator.factory().is_initialized());
}
