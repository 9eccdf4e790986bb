//! Builder for the shared provider client.

use std::sync::Arc;

use crate::auth::{ApiKeyAuthManager, AuthManager};
use crate::config::HeroConfig;
use crate::error::HeroResult;
use crate::observability::{create_stack, Observability};
use crate::transport::{HttpTransport, ReqwestTransport, RequestBuilder};

use super::client::GenAiClient;

/// Service name used for logs, spans and metrics.
pub const SERVICE_NAME: &str = "hero";

/// Builder for [`GenAiClient`].
///
/// # Example
///
/// ```no_run
/// use integrations_hero_genai::client::GenAiClientBuilder;
/// use integrations_hero_genai::config::HeroConfig;
/// use secrecy::SecretString;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = HeroConfig::builder()
///     .api_key(SecretString::new("your-api-key".into()))
///     .build()?;
/// let client = GenAiClientBuilder::new(config).build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GenAiClientBuilder {
    config: HeroConfig,

    // Injectable dependencies for testing
    transport: Option<Arc<dyn HttpTransport>>,
    observability: Option<Observability>,
}

impl GenAiClientBuilder {
    /// Creates a builder for the given configuration.
    pub fn new(config: HeroConfig) -> Self {
        Self { config, transport: None, observability: None }
    }

    /// Sets a custom HTTP transport (for testing).
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets the observability stack.
    pub fn observability(mut self, observability: Observability) -> Self {
        self.observability = Some(observability);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails only when the default HTTP transport cannot be created. An empty
    /// API key is accepted.
    pub fn build(self) -> HeroResult<GenAiClient> {
        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::from_config(&self.config)?),
        };

        let auth_manager = ApiKeyAuthManager::from_config(&self.config);

        let observability = self
            .observability
            .unwrap_or_else(|| create_stack(SERVICE_NAME, self.config.log_level));

        if !auth_manager.has_credential() {
            observability.logger.warn(
                "No API key configured; provider calls will fail authentication",
                serde_json::json!({ "auth_method": format!("{:?}", auth_manager.auth_method()) }),
            );
        }

        let request_builder = RequestBuilder::new(
            self.config.base_url.clone(),
            self.config.api_version.clone(),
            Arc::new(auth_manager),
        );

        Ok(GenAiClient::from_parts(self.config, transport, request_builder, observability))
    }
}
