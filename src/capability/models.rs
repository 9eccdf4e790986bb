//! Static capability-to-model table.

/// General-purpose text model.
pub const GENERAL_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Model for longer, reasoning-heavy text.
pub const ADVANCED_TEXT_MODEL: &str = "gemini-2.5-pro";

/// Text-to-image model.
pub const IMAGE_MODEL: &str = "imagen-4.0-generate-001";

/// Image editing model.
pub const IMAGE_EDIT_MODEL: &str = "gemini-2.5-flash-image";

/// Video generation model.
pub const VIDEO_MODEL: &str = "veo-3.1-fast-generate-preview";

/// Text-to-speech model.
pub const SPEECH_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Reasoning budget granted to fitness plans.
pub const FITNESS_THINKING_BUDGET: i32 = 32768;

/// Prebuilt voice used for speech.
pub const SPEECH_VOICE: &str = "Kore";

/// Resolution requested for generated videos.
pub const VIDEO_RESOLUTION: &str = "720p";

/// Group of capabilities sharing one model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelTier {
    /// Chat and short-form text.
    GeneralText,
    /// Fitness plans and writing help.
    AdvancedText,
    /// Image generation.
    Image,
    /// Image editing.
    ImageEdit,
    /// Video generation.
    Video,
    /// Speech synthesis.
    Speech,
}

impl ModelTier {
    /// The model identifier for this tier.
    pub const fn model(self) -> &'static str {
        match self {
            ModelTier::GeneralText => GENERAL_TEXT_MODEL,
            ModelTier::AdvancedText => ADVANCED_TEXT_MODEL,
            ModelTier::Image => IMAGE_MODEL,
            ModelTier::ImageEdit => IMAGE_EDIT_MODEL,
            ModelTier::Video => VIDEO_MODEL,
            ModelTier::Speech => SPEECH_MODEL,
        }
    }
}
