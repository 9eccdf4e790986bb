//! One mapping per capability from domain parameters to a provider request.

use super::models::{FITNESS_THINKING_BUDGET, SPEECH_VOICE, VIDEO_RESOLUTION};
use super::provider::{ChatConfig, ProviderRequest};
use super::{CapabilityRequest, InlineImage, VideoAspectRatio};
use crate::policy;
use crate::types::{
    Content, GenerateContentRequest, GenerateImagesRequest, GenerateVideosRequest,
    GenerationConfig, ImageOutputOptions, ImageParameters, ImagePromptInstance, LatLng, Modality,
    Part, RetrievalConfig, SpeechConfig, ThinkingConfig, Tool, ToolConfig, VideoImageInput,
    VideoParameters, VideoPromptInstance,
};

/// Prompt for a self-guided exercise walkthrough.
pub fn guide_prompt(tool_name: &str) -> String {
    format!(
        "Provide a simple, step-by-step guide for a veteran to perform a self-guided \"{tool_name}\" exercise. \
         The tone should be calm, supportive, and trauma-informed. Keep it concise and easy to follow in a moment of stress. \
         Format the response with markdown for readability."
    )
}

/// Prompt for a guided meditation script.
pub fn meditation_prompt(theme: &str, duration_minutes: u32) -> String {
    format!(
        "Generate a {duration_minutes}-minute guided meditation script about \"{theme}\". \
         The tone must be exceptionally calm, gentle, and trauma-informed. Use simple language. \
         Focus on grounding and safety. Structure it with a brief intro, the main body focusing on the theme, \
         and a gentle conclusion to bring the user back to the present."
    )
}

/// Prompt wrapping a piece of the user's writing and their instruction.
pub fn writing_prompt(text: &str, instruction: &str) -> String {
    format!(
        "The user is writing a personal story. Here is a piece of their writing:\n\n---\n{text}\n---\n\n\
         Their instruction is: \"{instruction}\".\n\
         Please fulfill this instruction while maintaining the user's authentic voice. Be supportive and constructive."
    )
}

/// Prompt asking for family communication advice.
pub fn communication_prompt(scenario: &str) -> String {
    format!(
        "A veteran's family member is asking for advice on the following scenario: \"{scenario}\". \
         Please provide supportive, practical communication advice. Offer a few example phrases or scripts they could use. \
         The advice should be based on non-violent communication principles and be trauma-informed."
    )
}

/// Maps a capability request onto the provider request that serves it.
///
/// The policy instruction is attached here, so every built request already
/// carries (or lacks) it according to its capability.
pub fn build(request: &CapabilityRequest) -> ProviderRequest {
    let kind = request.kind();
    let model = kind.model().to_string();

    let raw = match request {
        CapabilityRequest::ChatCreate => ProviderRequest::StartChat(ChatConfig {
            model,
            system_instruction: None,
        }),
        CapabilityRequest::GroundedText { prompt } => ProviderRequest::GenerateContent {
            model,
            body: GenerateContentRequest {
                contents: vec![user_text(prompt)],
                tools: Some(vec![Tool::google_search()]),
                ..GenerateContentRequest::default()
            },
        },
        CapabilityRequest::LocationGroundedText { prompt, latitude, longitude } => {
            ProviderRequest::GenerateContent {
                model,
                body: GenerateContentRequest {
                    contents: vec![user_text(prompt)],
                    tools: Some(vec![Tool::google_maps()]),
                    tool_config: Some(ToolConfig {
                        retrieval_config: Some(RetrievalConfig {
                            lat_lng: Some(LatLng { latitude: *latitude, longitude: *longitude }),
                        }),
                    }),
                    ..GenerateContentRequest::default()
                },
            }
        }
        CapabilityRequest::GuideText { tool_name } => text_request(model, guide_prompt(tool_name)),
        CapabilityRequest::FitnessPlanText { prompt } => ProviderRequest::GenerateContent {
            model,
            body: GenerateContentRequest {
                contents: vec![user_text(prompt)],
                generation_config: Some(GenerationConfig {
                    thinking_config: Some(ThinkingConfig { thinking_budget: FITNESS_THINKING_BUDGET }),
                    ..GenerationConfig::default()
                }),
                ..GenerateContentRequest::default()
            },
        },
        CapabilityRequest::ImageGenerate { prompt, aspect_ratio } => ProviderRequest::GenerateImages {
            model,
            body: GenerateImagesRequest {
                instances: vec![ImagePromptInstance { prompt: prompt.clone() }],
                parameters: ImageParameters {
                    sample_count: 1,
                    aspect_ratio: aspect_ratio.as_str().to_string(),
                    output_options: ImageOutputOptions {
                        mime_type: mime::IMAGE_JPEG.essence_str().to_string(),
                    },
                },
            },
        },
        CapabilityRequest::ImageEdit { prompt, image } => ProviderRequest::GenerateContent {
            model,
            body: GenerateContentRequest {
                contents: vec![image_and_text(image, prompt)],
                generation_config: Some(GenerationConfig {
                    response_modalities: Some(vec![Modality::Image]),
                    ..GenerationConfig::default()
                }),
                ..GenerateContentRequest::default()
            },
        },
        CapabilityRequest::VideoFromText { prompt, aspect_ratio } => {
            video_request(model, prompt, None, *aspect_ratio)
        }
        CapabilityRequest::VideoFromImage { prompt, image, aspect_ratio } => {
            video_request(model, prompt, Some(image), *aspect_ratio)
        }
        CapabilityRequest::MeditationText { theme, duration_minutes } => {
            text_request(model, meditation_prompt(theme, *duration_minutes))
        }
        CapabilityRequest::Speech { text } => ProviderRequest::GenerateContent {
            model,
            body: GenerateContentRequest {
                contents: vec![user_text(text)],
                generation_config: Some(GenerationConfig {
                    response_modalities: Some(vec![Modality::Audio]),
                    speech_config: Some(SpeechConfig::prebuilt(SPEECH_VOICE)),
                    ..GenerationConfig::default()
                }),
                ..GenerateContentRequest::default()
            },
        },
        CapabilityRequest::WritingAssist { text, instruction } => {
            text_request(model, writing_prompt(text, instruction))
        }
        CapabilityRequest::CommunicationAdvice { scenario } => {
            text_request(model, communication_prompt(scenario))
        }
        CapabilityRequest::ImageAnalyze { prompt, image } => ProviderRequest::GenerateContent {
            model,
            body: GenerateContentRequest {
                contents: vec![image_and_text(image, prompt)],
                ..GenerateContentRequest::default()
            },
        },
    };

    policy::inject(kind, raw)
}

fn user_text(text: &str) -> Content {
    Content::user(vec![Part::text(text)])
}

fn text_request(model: String, prompt: String) -> ProviderRequest {
    ProviderRequest::GenerateContent {
        model,
        body: GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text(prompt)])],
            ..GenerateContentRequest::default()
        },
    }
}

// Image part first, instruction second.
fn image_and_text(image: &InlineImage, prompt: &str) -> Content {
    Content::user(vec![
        Part::inline_data(image.data.clone(), image.mime_type.clone()),
        Part::text(prompt),
    ])
}

fn video_request(
    model: String,
    prompt: &str,
    image: Option<&InlineImage>,
    aspect_ratio: VideoAspectRatio,
) -> ProviderRequest {
    ProviderRequest::GenerateVideos {
        model,
        body: GenerateVideosRequest {
            instances: vec![VideoPromptInstance {
                prompt: prompt.to_string(),
                image: image.map(|image| VideoImageInput {
                    bytes_base64_encoded: image.data.clone(),
                    mime_type: image.mime_type.clone(),
                }),
            }],
            parameters: VideoParameters {
                sample_count: 1,
                aspect_ratio: aspect_ratio.as_str().to_string(),
                resolution: VIDEO_RESOLUTION.to_string(),
            },
        },
    }
}
