//! Tone and safety policy attached to eligible requests.
//!
//! Every text-producing capability runs under the same base system
//! instruction. Three capabilities extend it with a mode suffix. Media
//! capabilities (image generation and editing, video, speech) never carry
//! one.

use std::borrow::Cow;

use crate::capability::{CapabilityKind, ProviderRequest};
use crate::types::Content;

/// The base system instruction.
pub const HERO_SYSTEM_INSTRUCTION: &str = "You are the system brain for The HERO Project™, a national, trauma-informed, AI-powered ecosystem designed to prevent veteran suicide, support recovery, and activate lifelong leadership.
Your role is to be calm, steady, validating, trauma-informed, choice-based, non-judgmental, supportive, and safety-oriented.
You never use forceful, shaming, or high-pressure language. You always give options, never commands.";

const FITNESS_SUFFIX: &str = "You are in HERO CARE FIT™ mode. Generate an adaptive, trauma-informed workout plan based on the user's input. Structure it with a warm-up, main exercises (with modifications), and a cooldown. Emphasize breath-paced movement and self-compassion.";

const WRITING_SUFFIX: &str = "You are a supportive writing assistant for a veteran. Your goal is to help them tell their story in their own voice.";

const COMMUNICATION_SUFFIX: &str = "You are a family communication coach specializing in supporting veterans' families.";

/// Mode extending the base instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyMode {
    /// Base instruction only.
    Base,
    /// Workout planning.
    Fitness,
    /// Personal writing help.
    Writing,
    /// Family communication coaching.
    Communication,
}

impl PolicyMode {
    /// Suffix appended to the base instruction, if any.
    pub const fn suffix(self) -> Option<&'static str> {
        match self {
            PolicyMode::Base => None,
            PolicyMode::Fitness => Some(FITNESS_SUFFIX),
            PolicyMode::Writing => Some(WRITING_SUFFIX),
            PolicyMode::Communication => Some(COMMUNICATION_SUFFIX),
        }
    }
}

/// An immutable system instruction: the base policy plus an optional mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolicyInstruction {
    mode: PolicyMode,
}

impl PolicyInstruction {
    /// Instruction for the given mode.
    pub const fn new(mode: PolicyMode) -> Self {
        Self { mode }
    }

    /// The mode of this instruction.
    pub const fn mode(&self) -> PolicyMode {
        self.mode
    }

    /// Full instruction text. The suffix is joined with a single space.
    pub fn text(&self) -> Cow<'static, str> {
        match self.mode.suffix() {
            Some(suffix) => Cow::Owned(format!("{HERO_SYSTEM_INSTRUCTION} {suffix}")),
            None => Cow::Borrowed(HERO_SYSTEM_INSTRUCTION),
        }
    }

    /// The instruction as request content.
    pub fn to_content(&self) -> Content {
        Content::instruction(self.text())
    }
}

/// The instruction a capability carries, decided solely by its tag.
pub const fn policy_for(kind: CapabilityKind) -> Option<PolicyInstruction> {
    match kind {
        CapabilityKind::ChatCreate
        | CapabilityKind::GroundedText
        | CapabilityKind::LocationGroundedText
        | CapabilityKind::GuideText
        | CapabilityKind::MeditationText
        | CapabilityKind::ImageAnalyze => Some(PolicyInstruction::new(PolicyMode::Base)),
        CapabilityKind::FitnessPlanText => Some(PolicyInstruction::new(PolicyMode::Fitness)),
        CapabilityKind::WritingAssist => Some(PolicyInstruction::new(PolicyMode::Writing)),
        CapabilityKind::CommunicationAdvice => Some(PolicyInstruction::new(PolicyMode::Communication)),
        CapabilityKind::ImageGenerate
        | CapabilityKind::ImageEdit
        | CapabilityKind::VideoFromText
        | CapabilityKind::VideoFromImage
        | CapabilityKind::Speech => None,
    }
}

/// Attaches the capability's instruction to `request`.
///
/// Returns the request unchanged when the capability carries no instruction.
pub fn inject(kind: CapabilityKind, request: ProviderRequest) -> ProviderRequest {
    match policy_for(kind) {
        Some(policy) => request.with_system_instruction(policy.to_content()),
        None => request,
    }
}
