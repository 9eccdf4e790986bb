//! The shared provider client.

use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

use crate::config::HeroConfig;
use crate::error::{HeroError, HeroResult};
use crate::observability::Observability;
use crate::transport::{endpoints, HttpRequest, HttpTransport, RequestBuilder, ResponseParser};
use crate::types::{
    GenerateContentRequest, GenerateContentResponse, GenerateImagesRequest, GenerateImagesResponse,
    GenerateVideosRequest, Operation,
};

use super::builder::GenAiClientBuilder;

/// Client for the provider's generation endpoints.
///
/// Holds no per-call mutable state, so one instance is shared by every
/// capability call and chat session.
///
/// # Example
///
/// ```no_run
/// use integrations_hero_genai::client::GenAiClient;
/// use integrations_hero_genai::config::HeroConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GenAiClient::builder(HeroConfig::from_env()?).build()?;
/// let operation = client.get_operation("models/veo-3.1-fast-generate-preview/operations/abc").await?;
/// println!("done: {}", operation.done);
/// # Ok(())
/// # }
/// ```
pub struct GenAiClient {
    config: HeroConfig,
    transport: Arc<dyn HttpTransport>,
    request_builder: RequestBuilder,
    observability: Observability,
}

impl GenAiClient {
    /// Creates a client builder.
    pub fn builder(config: HeroConfig) -> GenAiClientBuilder {
        GenAiClientBuilder::new(config)
    }

    pub(super) fn from_parts(
        config: HeroConfig,
        transport: Arc<dyn HttpTransport>,
        request_builder: RequestBuilder,
        observability: Observability,
    ) -> Self {
        Self { config, transport, request_builder, observability }
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    /// Returns the observability stack.
    pub fn observability(&self) -> &Observability {
        &self.observability
    }

    /// `POST models/{model}:generateContent`.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> HeroResult<GenerateContentResponse> {
        let http_request = self.request_builder.post(&endpoints::generate_content(model), request)?;
        let response: GenerateContentResponse = self.call("generate_content", model, http_request).await?;

        if let Some(usage) = &response.usage_metadata {
            self.observability.logger.debug("Token usage", json!({
                "model": model,
                "prompt_tokens": usage.prompt_token_count,
                "completion_tokens": usage.candidates_token_count.unwrap_or(0),
                "total_tokens": usage.total_token_count,
            }));
        }

        Ok(response)
    }

    /// `POST models/{model}:predict`.
    pub async fn generate_images(
        &self,
        model: &str,
        request: &GenerateImagesRequest,
    ) -> HeroResult<GenerateImagesResponse> {
        let http_request = self.request_builder.post(&endpoints::predict(model), request)?;
        self.call("generate_images", model, http_request).await
    }

    /// `POST models/{model}:predictLongRunning`. Returns the submitted operation.
    pub async fn generate_videos(
        &self,
        model: &str,
        request: &GenerateVideosRequest,
    ) -> HeroResult<Operation> {
        let http_request = self.request_builder.post(&endpoints::predict_long_running(model), request)?;
        self.call("generate_videos", model, http_request).await
    }

    /// `GET {name}`: current status of a long-running operation.
    pub async fn get_operation(&self, name: &str) -> HeroResult<Operation> {
        let http_request = self.request_builder.get(&endpoints::operation(name))?;
        self.call("get_operation", name, http_request).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        target: &str,
        request: HttpRequest,
    ) -> HeroResult<T> {
        let start = Instant::now();

        self.observability.logger.debug("Sending provider request", json!({
            "method": method,
            "target": target,
        }));

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                let error = HeroError::from(e);
                self.observability.logger.error("Provider request failed", json!({
                    "method": method,
                    "target": target,
                    "error": error.to_string(),
                }));
                return Err(error);
            }
        };

        let status = response.status;
        let parsed = ResponseParser::parse_response(response);

        self.observability.logger.debug("Provider response received", json!({
            "method": method,
            "target": target,
            "status": status,
            "duration_ms": start.elapsed().as_millis(),
        }));

        if let Err(error) = &parsed {
            self.observability.logger.warn("Provider returned an error", json!({
                "method": method,
                "target": target,
                "status": status,
                "error": error.to_string(),
            }));
        }

        parsed
    }
}

impl std::fmt::Debug for GenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
