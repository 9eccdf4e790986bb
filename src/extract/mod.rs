//! Normalization of provider responses into typed artifacts.
//!
//! Extraction is synchronous and side-effect free. Every extractor is a total
//! match over [`ProviderResponse`]; a shape that cannot yield the expected
//! artifact maps to the matching [`ResponseError`].

mod artifacts;

pub use artifacts::{
    AudioArtifact, GeneratedArtifact, GroundedText, GroundingSource, ImageArtifact, SourceKind,
    VideoArtifact,
};

use crate::capability::{CapabilityKind, ChatConfig};
use crate::error::{HeroError, HeroResult, ResponseError};
use crate::operation::OperationHandle;
use crate::types::{Candidate, GenerateContentResponse, GenerateImagesResponse, Operation, Part};

/// Every response shape the shared client can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderResponse {
    /// A chat session was configured; no network call happened.
    ChatStarted(ChatConfig),
    /// `generateContent` answer.
    Content(GenerateContentResponse),
    /// `predict` answer.
    Images(GenerateImagesResponse),
    /// `predictLongRunning` answer.
    Operation(Operation),
}

/// What a capability yields once extracted.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    /// Settings for a new chat session.
    Chat(ChatConfig),
    /// A finished artifact.
    Artifact(GeneratedArtifact),
    /// A pending video job.
    Operation(OperationHandle),
}

/// Extracts the output promised by `kind` from `response`.
pub fn extract(kind: CapabilityKind, response: ProviderResponse) -> HeroResult<Extracted> {
    match kind {
        CapabilityKind::ChatCreate => chat_config(response).map(Extracted::Chat),
        CapabilityKind::GroundedText | CapabilityKind::LocationGroundedText => {
            grounded_text(&response).map(|t| Extracted::Artifact(GeneratedArtifact::GroundedText(t)))
        }
        CapabilityKind::GuideText
        | CapabilityKind::FitnessPlanText
        | CapabilityKind::MeditationText
        | CapabilityKind::WritingAssist
        | CapabilityKind::CommunicationAdvice
        | CapabilityKind::ImageAnalyze => {
            text(&response).map(|t| Extracted::Artifact(GeneratedArtifact::Text(t)))
        }
        CapabilityKind::ImageGenerate | CapabilityKind::ImageEdit => {
            image(&response).map(|i| Extracted::Artifact(GeneratedArtifact::Image(i)))
        }
        CapabilityKind::Speech => audio(&response).map(|a| Extracted::Artifact(GeneratedArtifact::Audio(a))),
        CapabilityKind::VideoFromText | CapabilityKind::VideoFromImage => {
            operation(response).map(Extracted::Operation)
        }
    }
}

/// Chat settings from a chat-start response.
pub fn chat_config(response: ProviderResponse) -> HeroResult<ChatConfig> {
    match response {
        ProviderResponse::ChatStarted(config) => Ok(config),
        ProviderResponse::Content(_) | ProviderResponse::Images(_) | ProviderResponse::Operation(_) => {
            Err(unexpected_shape("chat session"))
        }
    }
}

/// Concatenated text parts of the first candidate.
pub fn text(response: &ProviderResponse) -> HeroResult<String> {
    match response {
        ProviderResponse::Content(content) => content_text(content),
        ProviderResponse::ChatStarted(_) | ProviderResponse::Images(_) | ProviderResponse::Operation(_) => {
            Err(ResponseError::EmptyResponse.into())
        }
    }
}

/// Text of the first candidate plus its grounding sources.
pub fn grounded_text(response: &ProviderResponse) -> HeroResult<GroundedText> {
    let ProviderResponse::Content(content) = response else {
        return Err(ResponseError::EmptyResponse.into());
    };

    let text = content_text(content)?;
    let sources = first_candidate(content)
        .and_then(|c| c.grounding_metadata.as_ref())
        .and_then(|m| m.grounding_chunks.as_ref())
        .map(|chunks| {
            chunks
                .iter()
                .flat_map(|chunk| {
                    let web = chunk.web.as_ref().map(|web| GroundingSource {
                        kind: SourceKind::Web,
                        uri: web.uri.clone(),
                        title: web.title.clone(),
                        review_snippets: Vec::new(),
                    });
                    let maps = chunk.maps.as_ref().map(|maps| GroundingSource {
                        kind: SourceKind::Maps,
                        uri: maps.uri.clone(),
                        title: maps.title.clone(),
                        review_snippets: maps
                            .place_answer_sources
                            .as_ref()
                            .map(|sources| sources.review_snippets.clone())
                            .unwrap_or_default(),
                    });
                    web.into_iter().chain(maps)
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(GroundedText { text, sources })
}

/// First generated image.
///
/// Predict responses yield their first prediction carrying bytes;
/// content responses yield the first inline-data part of the first candidate.
pub fn image(response: &ProviderResponse) -> HeroResult<ImageArtifact> {
    let found = match response {
        ProviderResponse::Images(images) => first_prediction(images),
        ProviderResponse::Content(content) => first_candidate(content)
            .and_then(|c| c.content.as_ref())
            .and_then(|c| {
                c.parts.iter().find_map(|part| match part {
                    Part::InlineData { inline_data } if !inline_data.data.is_empty() => {
                        Some(ImageArtifact {
                            mime_type: inline_data.mime_type.clone(),
                            data: inline_data.data.clone(),
                        })
                    }
                    Part::InlineData { .. } | Part::Text { .. } | Part::Other(_) => None,
                })
            }),
        ProviderResponse::ChatStarted(_) | ProviderResponse::Operation(_) => None,
    };

    found.ok_or_else(|| ResponseError::NoImageGenerated.into())
}

/// First non-empty inline audio payload across all candidates and parts.
pub fn audio(response: &ProviderResponse) -> HeroResult<AudioArtifact> {
    let found = match response {
        ProviderResponse::Content(content) => content
            .candidates
            .iter()
            .flatten()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .find_map(|part| match part {
                Part::InlineData { inline_data } if !inline_data.data.is_empty() => Some(AudioArtifact {
                    data: inline_data.data.clone(),
                    mime_type: Some(inline_data.mime_type.clone()).filter(|m| !m.is_empty()),
                }),
                Part::InlineData { .. } | Part::Text { .. } | Part::Other(_) => None,
            }),
        ProviderResponse::ChatStarted(_) | ProviderResponse::Images(_) | ProviderResponse::Operation(_) => None,
    };

    found.ok_or_else(|| ResponseError::AudioGenerationFailed.into())
}

/// The operation handle of a video submission.
pub fn operation(response: ProviderResponse) -> HeroResult<OperationHandle> {
    match response {
        ProviderResponse::Operation(op) => Ok(OperationHandle::submitted(op)),
        ProviderResponse::ChatStarted(_) | ProviderResponse::Content(_) | ProviderResponse::Images(_) => {
            Err(unexpected_shape("operation"))
        }
    }
}

/// Concatenated text of the first candidate of a content response.
pub(crate) fn content_text(response: &GenerateContentResponse) -> HeroResult<String> {
    let text: String = first_candidate(response)
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| match part {
                    Part::Text { text } => Some(text.as_str()),
                    Part::InlineData { .. } | Part::Other(_) => None,
                })
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        if let Some(reason) = response.prompt_feedback.as_ref().and_then(|f| f.block_reason.as_ref()) {
            tracing::warn!(block_reason = %reason, "Prompt blocked by provider");
        }
        return Err(ResponseError::EmptyResponse.into());
    }

    Ok(text)
}

fn first_candidate(response: &GenerateContentResponse) -> Option<&Candidate> {
    response.candidates.as_ref()?.first()
}

fn first_prediction(response: &GenerateImagesResponse) -> Option<ImageArtifact> {
    response.predictions.iter().find_map(|prediction| {
        let data = prediction.bytes_base64_encoded.as_ref().filter(|d| !d.is_empty())?;
        Some(ImageArtifact {
            mime_type: prediction
                .mime_type
                .clone()
                .unwrap_or_else(|| mime::IMAGE_JPEG.essence_str().to_string()),
            data: data.clone(),
        })
    })
}

fn unexpected_shape(expected: &str) -> HeroError {
    ResponseError::DeserializationError {
        message: format!("expected {} response", expected),
    }
    .into()
}
