//! Entry point for every capability call.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

use crate::capability::{
    build, AspectRatio, CapabilityRequest, InlineImage, ProviderRequest, VideoAspectRatio,
};
use crate::client::{ClientFactory, GenAiClient};
use crate::error::HeroResult;
use crate::extract::{
    self, AudioArtifact, Extracted, GeneratedArtifact, GroundedText, ImageArtifact, ProviderResponse,
};
use crate::observability::SpanStatus;
use crate::operation::{self, advance, OperationHandle, OperationPoller};

use super::chat::ChatSession;

/// Result of [`Orchestrator::execute`].
#[derive(Debug, Clone)]
pub enum CapabilityOutcome {
    /// A new chat session.
    Chat(ChatSession),
    /// A finished artifact.
    Artifact(GeneratedArtifact),
    /// A submitted video job.
    Operation(OperationHandle),
}

/// Maps domain calls onto the shared client.
///
/// Each call builds its provider request (policy included), performs exactly
/// one network call (none for chat creation) and extracts the typed result.
/// No validation, retry or caching happens here.
///
/// # Example
///
/// ```no_run
/// use integrations_hero_genai::services::Orchestrator;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let orchestrator = Orchestrator::from_env()?;
/// let guide = orchestrator.generate_guide_text("Box Breathing").await?;
/// println!("{}", guide);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Orchestrator {
    factory: Arc<ClientFactory>,
}

impl Orchestrator {
    /// Creates an orchestrator over the given factory.
    pub fn new(factory: Arc<ClientFactory>) -> Self {
        Self { factory }
    }

    /// Creates an orchestrator configured from the environment.
    pub fn from_env() -> HeroResult<Self> {
        Ok(Self::new(Arc::new(ClientFactory::from_env()?)))
    }

    /// The client factory.
    pub fn factory(&self) -> &Arc<ClientFactory> {
        &self.factory
    }

    /// Runs any capability request through the pipeline.
    pub async fn execute(&self, request: CapabilityRequest) -> HeroResult<CapabilityOutcome> {
        let kind = request.kind();
        let extracted = self.invoke(request, |response| extract::extract(kind, response)).await?;

        Ok(match extracted {
            Extracted::Chat(config) => CapabilityOutcome::Chat(ChatSession::new(self.factory.get_client()?, config)),
            Extracted::Artifact(artifact) => CapabilityOutcome::Artifact(artifact),
            Extracted::Operation(handle) => CapabilityOutcome::Operation(handle),
        })
    }

    /// Starts a chat session. No network call is made.
    pub async fn create_chat(&self) -> HeroResult<ChatSession> {
        let config = self.invoke(CapabilityRequest::ChatCreate, extract::chat_config).await?;
        Ok(ChatSession::new(self.factory.get_client()?, config))
    }

    /// Web-grounded answer with its sources.
    pub async fn generate_grounded_text(&self, prompt: &str) -> HeroResult<GroundedText> {
        let request = CapabilityRequest::GroundedText { prompt: prompt.to_string() };
        self.invoke(request, |r| extract::grounded_text(&r)).await
    }

    /// Map-grounded answer near the given location.
    pub async fn generate_location_grounded_text(
        &self,
        prompt: &str,
        latitude: f64,
        longitude: f64,
    ) -> HeroResult<GroundedText> {
        let request = CapabilityRequest::LocationGroundedText {
            prompt: prompt.to_string(),
            latitude,
            longitude,
        };
        self.invoke(request, |r| extract::grounded_text(&r)).await
    }

    /// Markdown walkthrough of a self-guided exercise.
    pub async fn generate_guide_text(&self, tool_name: &str) -> HeroResult<String> {
        let request = CapabilityRequest::GuideText { tool_name: tool_name.to_string() };
        self.invoke(request, |r| extract::text(&r)).await
    }

    /// Adaptive workout plan.
    pub async fn generate_fitness_plan(&self, prompt: &str) -> HeroResult<String> {
        let request = CapabilityRequest::FitnessPlanText { prompt: prompt.to_string() };
        self.invoke(request, |r| extract::text(&r)).await
    }

    /// Image from a text prompt.
    pub async fn generate_image(&self, prompt: &str, aspect_ratio: AspectRatio) -> HeroResult<ImageArtifact> {
        let request = CapabilityRequest::ImageGenerate { prompt: prompt.to_string(), aspect_ratio };
        self.invoke(request, |r| extract::image(&r)).await
    }

    /// Edits an image according to `prompt`.
    pub async fn edit_image(
        &self,
        prompt: &str,
        image_base64: &str,
        mime_type: &str,
    ) -> HeroResult<ImageArtifact> {
        let request = CapabilityRequest::ImageEdit {
            prompt: prompt.to_string(),
            image: InlineImage::new(image_base64, mime_type),
        };
        self.invoke(request, |r| extract::image(&r)).await
    }

    /// Submits a text-to-video job.
    pub async fn generate_video_from_text(
        &self,
        prompt: &str,
        aspect_ratio: VideoAspectRatio,
    ) -> HeroResult<OperationHandle> {
        let request = CapabilityRequest::VideoFromText { prompt: prompt.to_string(), aspect_ratio };
        self.invoke(request, extract::operation).await
    }

    /// Submits an image-to-video job.
    pub async fn generate_video_from_image(
        &self,
        prompt: &str,
        image_base64: &str,
        mime_type: &str,
        aspect_ratio: VideoAspectRatio,
    ) -> HeroResult<OperationHandle> {
        let request = CapabilityRequest::VideoFromImage {
            prompt: prompt.to_string(),
            image: InlineImage::new(image_base64, mime_type),
            aspect_ratio,
        };
        self.invoke(request, extract::operation).await
    }

    /// Checks a video job once.
    ///
    /// A terminal handle is returned unchanged and no network call is made.
    pub async fn poll_video_operation(&self, handle: &OperationHandle) -> HeroResult<OperationHandle> {
        if handle.is_done() {
            return Ok(handle.clone());
        }

        let client = self.factory.get_client()?;
        let observability = client.observability();

        let mut span = observability.tracer.start_span("hero.video_poll");
        span.set_attribute("operation", handle.id());

        let next = match client.get_operation(handle.id()).await {
            Ok(status) => advance(handle.clone(), &status),
            Err(e) => {
                observability.metrics.record_poll_failure(e.kind().as_str());
                observability.logger.warn("Video operation poll failed", json!({
                    "operation": handle.id(),
                    "error_kind": e.kind().as_str(),
                    "error": e.to_string(),
                }));
                span.set_status(SpanStatus::failed(&e));
                span.end();
                return Err(e);
            }
        };

        let state = next.state().as_str();
        observability.metrics.record_poll(state);
        observability.logger.info("Video operation polled", json!({
            "operation": next.id(),
            "state": state,
        }));

        span.set_attribute("state", state);
        span.set_status(SpanStatus::Ok);
        span.end();

        Ok(next)
    }

    /// Polls a video job every `interval` until it is terminal or `cancel` fires.
    pub async fn wait_for_video(
        &self,
        handle: OperationHandle,
        interval: Duration,
        cancel: &CancellationToken,
    ) -> HeroResult<OperationHandle> {
        operation::wait_for_completion(self, handle, interval, cancel).await
    }

    /// Answers a question about an image.
    pub async fn analyze_image(&self, prompt: &str, image_base64: &str, mime_type: &str) -> HeroResult<String> {
        let request = CapabilityRequest::ImageAnalyze {
            prompt: prompt.to_string(),
            image: InlineImage::new(image_base64, mime_type),
        };
        self.invoke(request, |r| extract::text(&r)).await
    }

    /// Guided meditation script.
    pub async fn generate_meditation_text(&self, theme: &str, duration_minutes: u32) -> HeroResult<String> {
        let request = CapabilityRequest::MeditationText { theme: theme.to_string(), duration_minutes };
        self.invoke(request, |r| extract::text(&r)).await
    }

    /// Speaks `text`. Fails with `AudioGenerationFailed` when no audio comes back.
    pub async fn generate_speech(&self, text: &str) -> HeroResult<AudioArtifact> {
        let request = CapabilityRequest::Speech { text: text.to_string() };
        self.invoke(request, |r| extract::audio(&r)).await
    }

    /// Help with a piece of personal writing.
    pub async fn get_writing_assistance(&self, text: &str, instruction: &str) -> HeroResult<String> {
        let request = CapabilityRequest::WritingAssist {
            text: text.to_string(),
            instruction: instruction.to_string(),
        };
        self.invoke(request, |r| extract::text(&r)).await
    }

    /// Communication advice for a family member.
    pub async fn get_communication_advice(&self, scenario: &str) -> HeroResult<String> {
        let request = CapabilityRequest::CommunicationAdvice { scenario: scenario.to_string() };
        self.invoke(request, |r| extract::text(&r)).await
    }

    async fn invoke<T, F>(&self, request: CapabilityRequest, extractor: F) -> HeroResult<T>
    where
        F: FnOnce(ProviderResponse) -> HeroResult<T> + Send,
    {
        let kind = request.kind();
        let client = self.factory.get_client()?;
        let observability = client.observability().clone();

        let mut span = observability.tracer.start_span(&format!("hero.{}", kind));
        span.set_attribute("capability", kind.as_str());
        span.set_attribute("model", kind.model());

        let start = Instant::now();
        let result = match dispatch(&client, build(&request)).await {
            Ok(response) => extractor(response),
            Err(e) => Err(e),
        };
        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(_) => {
                span.set_status(SpanStatus::Ok);
                observability.metrics.record_call(kind.as_str(), "ok", duration_ms);
                observability.logger.info("Capability call completed", json!({
                    "capability": kind.as_str(),
                    "model": kind.model(),
                    "duration_ms": duration_ms,
                }));
            }
            Err(e) => {
                span.set_status(SpanStatus::failed(e));
                observability.metrics.record_call(kind.as_str(), e.kind().as_str(), duration_ms);
                observability.logger.warn("Capability call failed", json!({
                    "capability": kind.as_str(),
                    "model": kind.model(),
                    "error_kind": e.kind().as_str(),
                    "error": e.to_string(),
                }));
            }
        }
        span.end();

        result
    }
}

#[async_trait]
impl OperationPoller for Orchestrator {
    async fn poll(&self, handle: &OperationHandle) -> HeroResult<OperationHandle> {
        self.poll_video_operation(handle).await
    }
}

async fn dispatch(client: &GenAiClient, request: ProviderRequest) -> HeroResult<ProviderResponse> {
    match request {
        ProviderRequest::StartChat(config) => Ok(ProviderResponse::ChatStarted(config)),
        ProviderRequest::GenerateContent { model, body } => {
            client.generate_content(&model, &body).await.map(ProviderResponse::Content)
        }
        ProviderRequest::GenerateImages { model, body } => {
            client.generate_images(&model, &body).await.map(ProviderResponse::Images)
        }
        ProviderRequest::GenerateVideos { model, body } => {
            client.generate_videos(&model, &body).await.map(ProviderResponse::Operation)
        }
    }
}
