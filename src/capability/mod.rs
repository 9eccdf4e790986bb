//! Capability requests: one case per generation feature the app exposes.
//!
//! A [`CapabilityRequest`] carries only the domain parameters of its
//! capability. [`build`] maps it onto a [`ProviderRequest`] with the model,
//! prompt wording and policy instruction already decided.

mod builders;
mod models;
mod provider;

pub use builders::{build, communication_prompt, guide_prompt, meditation_prompt, writing_prompt};
pub use models::{
    ModelTier, ADVANCED_TEXT_MODEL, FITNESS_THINKING_BUDGET, GENERAL_TEXT_MODEL, IMAGE_EDIT_MODEL,
    IMAGE_MODEL, SPEECH_MODEL, SPEECH_VOICE, VIDEO_MODEL, VIDEO_RESOLUTION,
};
pub use provider::{ChatConfig, ProviderRequest};

use std::fmt;

/// Aspect ratios accepted for image generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AspectRatio {
    /// `1:1`
    #[default]
    Square,
    /// `16:9`
    Widescreen,
    /// `9:16`
    Vertical,
    /// `4:3`
    Landscape,
    /// `3:4`
    Portrait,
}

impl AspectRatio {
    /// All supported ratios, in display order.
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Widescreen,
        AspectRatio::Vertical,
        AspectRatio::Landscape,
        AspectRatio::Portrait,
    ];

    /// Wire representation, e.g. `"16:9"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Vertical => "9:16",
            AspectRatio::Landscape => "4:3",
            AspectRatio::Portrait => "3:4",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aspect ratios accepted for video generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VideoAspectRatio {
    /// `16:9`
    #[default]
    Landscape,
    /// `9:16`
    Portrait,
}

impl VideoAspectRatio {
    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            VideoAspectRatio::Landscape => "16:9",
            VideoAspectRatio::Portrait => "9:16",
        }
    }
}

impl fmt::Display for VideoAspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A base64 image payload with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    /// Base64-encoded bytes, without a `data:` prefix.
    pub data: String,
    /// MIME type, e.g. `image/png`.
    pub mime_type: String,
}

impl InlineImage {
    /// Creates an inline image.
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self { data: data.into(), mime_type: mime_type.into() }
    }
}

/// Tag of a [`CapabilityRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityKind {
    /// New multi-turn chat session.
    ChatCreate,
    /// Search-grounded answer with web sources.
    GroundedText,
    /// Maps-grounded answer around a coordinate.
    LocationGroundedText,
    /// Markdown guide for one wellness tool.
    GuideText,
    /// Fitness plan from the advanced model with extended thinking.
    FitnessPlanText,
    /// Text-to-image via Imagen.
    ImageGenerate,
    /// Image edit from a source image and prompt.
    ImageEdit,
    /// Veo job from a prompt.
    VideoFromText,
    /// Veo job from a prompt and a starting image.
    VideoFromImage,
    /// Guided meditation script.
    MeditationText,
    /// Text-to-speech.
    Speech,
    /// Help with personal writing.
    WritingAssist,
    /// Advice for talking with a family member.
    CommunicationAdvice,
    /// Question answered about an image.
    ImageAnalyze,
}

impl CapabilityKind {
    /// Every capability.
    pub const ALL: [CapabilityKind; 14] = [
        CapabilityKind::ChatCreate,
        CapabilityKind::GroundedText,
        CapabilityKind::LocationGroundedText,
        CapabilityKind::GuideText,
        CapabilityKind::FitnessPlanText,
        CapabilityKind::ImageGenerate,
        CapabilityKind::ImageEdit,
        CapabilityKind::VideoFromText,
        CapabilityKind::VideoFromImage,
        CapabilityKind::MeditationText,
        CapabilityKind::Speech,
        CapabilityKind::WritingAssist,
        CapabilityKind::CommunicationAdvice,
        CapabilityKind::ImageAnalyze,
    ];

    /// Snake-case name used in span names, logs and metric labels.
    pub const fn as_str(self) -> &'static str {
        match self {
            CapabilityKind::ChatCreate => "chat_create",
            CapabilityKind::GroundedText => "grounded_text",
            CapabilityKind::LocationGroundedText => "location_grounded_text",
            CapabilityKind::GuideText => "guide_text",
            CapabilityKind::FitnessPlanText => "fitness_plan_text",
            CapabilityKind::ImageGenerate => "image_generate",
            CapabilityKind::ImageEdit => "image_edit",
            CapabilityKind::VideoFromText => "video_from_text",
            CapabilityKind::VideoFromImage => "video_from_image",
            CapabilityKind::MeditationText => "meditation_text",
            CapabilityKind::Speech => "speech",
            CapabilityKind::WritingAssist => "writing_assist",
            CapabilityKind::CommunicationAdvice => "communication_advice",
            CapabilityKind::ImageAnalyze => "image_analyze",
        }
    }

    /// The model tier serving this capability.
    pub const fn tier(self) -> ModelTier {
        match self {
            CapabilityKind::ChatCreate
            | CapabilityKind::GroundedText
            | CapabilityKind::LocationGroundedText
            | CapabilityKind::GuideText
            | CapabilityKind::MeditationText
            | CapabilityKind::CommunicationAdvice
            | CapabilityKind::ImageAnalyze => ModelTier::GeneralText,
            CapabilityKind::FitnessPlanText | CapabilityKind::WritingAssist => ModelTier::AdvancedText,
            CapabilityKind::ImageGenerate => ModelTier::Image,
            CapabilityKind::ImageEdit => ModelTier::ImageEdit,
            CapabilityKind::VideoFromText | CapabilityKind::VideoFromImage => ModelTier::Video,
            CapabilityKind::Speech => ModelTier::Speech,
        }
    }

    /// The model identifier serving this capability.
    pub const fn model(self) -> &'static str {
        self.tier().model()
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single invocation of one capability.
///
/// Values pass through to the provider unvalidated.
#[derive(Debug, Clone, PartialEq)]
pub enum CapabilityRequest {
    /// Start a multi-turn chat session.
    ChatCreate,
    /// Text answer grounded in web search.
    GroundedText {
        /// User prompt.
        prompt: String,
    },
    /// Text answer grounded in map data near a location.
    LocationGroundedText {
        /// User prompt.
        prompt: String,
        /// Latitude in degrees.
        latitude: f64,
        /// Longitude in degrees.
        longitude: f64,
    },
    /// Step-by-step guide for a self-guided exercise.
    GuideText {
        /// Name of the exercise, e.g. "Box Breathing".
        tool_name: String,
    },
    /// Adaptive workout plan.
    FitnessPlanText {
        /// What the user asked for.
        prompt: String,
    },
    /// Image from a text prompt.
    ImageGenerate {
        /// Image description.
        prompt: String,
        /// Output aspect ratio.
        aspect_ratio: AspectRatio,
    },
    /// Edit of an existing image.
    ImageEdit {
        /// Edit instruction.
        prompt: String,
        /// Source image.
        image: InlineImage,
    },
    /// Video from a text prompt.
    VideoFromText {
        /// Video description.
        prompt: String,
        /// Output aspect ratio.
        aspect_ratio: VideoAspectRatio,
    },
    /// Video starting from an image.
    VideoFromImage {
        /// Video description.
        prompt: String,
        /// Starting frame.
        image: InlineImage,
        /// Output aspect ratio.
        aspect_ratio: VideoAspectRatio,
    },
    /// Guided meditation script.
    MeditationText {
        /// Meditation theme.
        theme: String,
        /// Length in minutes.
        duration_minutes: u32,
    },
    /// Spoken rendition of a text.
    Speech {
        /// Text to speak.
        text: String,
    },
    /// Help with a piece of personal writing.
    WritingAssist {
        /// The user's draft.
        text: String,
        /// What the user wants done with it.
        instruction: String,
    },
    /// Communication advice for a family member.
    CommunicationAdvice {
        /// The situation described by the user.
        scenario: String,
    },
    /// Question about an image.
    ImageAnalyze {
        /// The question.
        prompt: String,
        /// The image.
        image: InlineImage,
    },
}

impl CapabilityRequest {
    /// The tag of this request.
    pub const fn kind(&self) -> CapabilityKind {
        match self {
            CapabilityRequest::ChatCreate => CapabilityKind::ChatCreate,
            CapabilityRequest::GroundedText { .. } => CapabilityKind::GroundedText,
            CapabilityRequest::LocationGroundedText { .. } => CapabilityKind::LocationGroundedText,
            CapabilityRequest::GuideText { .. } => CapabilityKind::GuideText,
            CapabilityRequest::FitnessPlanText { .. } => CapabilityKind::FitnessPlanText,
            CapabilityRequest::ImageGenerate { .. } => CapabilityKind::ImageGenerate,
            CapabilityRequest::ImageEdit { .. } => CapabilityKind::ImageEdit,
            CapabilityRequest::VideoFromText { .. } => CapabilityKind::VideoFromText,
            CapabilityRequest::VideoFromImage { .. } => CapabilityKind::VideoFromImage,
            CapabilityRequest::MeditationText { .. } => CapabilityKind::MeditationText,
            CapabilityRequest::Speech { .. } => CapabilityKind::Speech,
            CapabilityRequest::WritingAssist { .. } => CapabilityKind::WritingAssist,
            CapabilityRequest::CommunicationAdvice { .. } => CapabilityKind::CommunicationAdvice,
            CapabilityRequest::ImageAnalyze { .. } => CapabilityKind::ImageAnalyze,
        }
    }
}
