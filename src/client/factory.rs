//! Lazily constructed, process-shared client.

use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::config::HeroConfig;
use crate::error::HeroResult;

use super::builder::GenAiClientBuilder;
use super::client::GenAiClient;

/// Hands out one shared [`GenAiClient`].
///
/// The client is built on the first [`get_client`](Self::get_client) call;
/// concurrent first calls construct it exactly once. A missing credential
/// does not fail construction.
pub struct ClientFactory {
    builder: GenAiClientBuilder,
    client: OnceCell<Arc<GenAiClient>>,
}

impl ClientFactory {
    /// Factory building the client from `config`.
    pub fn new(config: HeroConfig) -> Self {
        Self::with_builder(GenAiClientBuilder::new(config))
    }

    /// Factory reading its configuration from the environment once.
    pub fn from_env() -> HeroResult<Self> {
        Ok(Self::new(HeroConfig::from_env()?))
    }

    /// Factory using a preconfigured builder, e.g. with an injected transport.
    pub fn with_builder(builder: GenAiClientBuilder) -> Self {
        Self { builder, client: OnceCell::new() }
    }

    /// Returns the shared client, building it on first use.
    pub fn get_client(&self) -> HeroResult<Arc<GenAiClient>> {
        self.client
            .get_or_try_init(|| {
                tracing::debug!("Constructing shared provider client");
                self.builder.clone().build().map(Arc::new)
            })
            .map(Arc::clone)
    }

    /// Whether the client has been built yet.
    pub fn is_initialized(&self) -> bool {
        self.client.get().is_some()
    }
}

impl std::fmt::Debug for ClientFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientFactory")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
