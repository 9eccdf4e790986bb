//! Provider-level requests produced by the builders.

use crate::types::{Content, GenerateContentRequest, GenerateImagesRequest, GenerateVideosRequest};

/// Settings of a chat session. Creating one performs no network call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatConfig {
    /// Model serving every turn.
    pub model: String,
    /// System instruction sent with every turn.
    pub system_instruction: Option<Content>,
}

/// A request ready to hand to the shared client.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderRequest {
    /// Start a chat session.
    StartChat(ChatConfig),
    /// `models/{model}:generateContent`.
    GenerateContent {
        /// Target model.
        model: String,
        /// Request body.
        body: GenerateContentRequest,
    },
    /// `models/{model}:predict`.
    GenerateImages {
        /// Target model.
        model: String,
        /// Request body.
        body: GenerateImagesRequest,
    },
    /// `models/{model}:predictLongRunning`.
    GenerateVideos {
        /// Target model.
        model: String,
        /// Request body.
        body: GenerateVideosRequest,
    },
}

impl ProviderRequest {
    /// The target model.
    pub fn model(&self) -> &str {
        match self {
            ProviderRequest::StartChat(config) => &config.model,
            ProviderRequest::GenerateContent { model, .. }
            | ProviderRequest::GenerateImages { model, .. }
            | ProviderRequest::GenerateVideos { model, .. } => model,
        }
    }

    /// The system instruction, when the request has one.
    pub fn system_instruction(&self) -> Option<&Content> {
        match self {
            ProviderRequest::StartChat(config) => config.system_instruction.as_ref(),
            ProviderRequest::GenerateContent { body, .. } => body.system_instruction.as_ref(),
            ProviderRequest::GenerateImages { .. } | ProviderRequest::GenerateVideos { .. } => None,
        }
    }

    /// Text of the system instruction, if any.
    pub fn system_instruction_text(&self) -> Option<String> {
        self.system_instruction().map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| match part {
                    crate::types::Part::Text { text } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        })
    }

    /// Sets the system instruction on variants that have a slot for one.
    /// Image and video requests are returned unchanged.
    pub fn with_system_instruction(mut self, instruction: Content) -> Self {
        match &mut self {
            ProviderRequest::StartChat(config) => config.system_instruction = Some(instruction),
            ProviderRequest::GenerateContent { body, .. } => body.system_instruction = Some(instruction),
            ProviderRequest::GenerateImages { .. } | ProviderRequest::GenerateVideos { .. } => {}
        }
        self
    }
}
