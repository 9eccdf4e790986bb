//! Wire types for the provider API.
//!
//! Request and response bodies for content generation, image generation
//! (`:predict`) and video generation (`:predictLongRunning` plus operation
//! polling).

pub mod content;
pub mod generation;
pub mod images;
pub mod tools;
pub mod videos;

pub use content::{Blob, Content, Part, Role};

pub use generation::{
    Candidate, FinishReason, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    GroundingChunk, GroundingMetadata, MapsChunk, Modality, PlaceAnswerSources, PrebuiltVoiceConfig,
    PromptFeedback, ReviewSnippet, SpeechConfig, ThinkingConfig, UsageMetadata, VoiceConfig,
    WebChunk,
};

pub use images::{
    GenerateImagesRequest, GenerateImagesResponse, ImageOutputOptions, ImageParameters,
    ImagePrediction, ImagePromptInstance,
};

pub use tools::{GoogleMaps, GoogleSearch, LatLng, RetrievalConfig, Tool, ToolConfig};

pub use videos::{
    GenerateVideoResponse, GenerateVideosRequest, GeneratedSample, Operation, OperationResult,
    OperationStatus, VideoFile, VideoImageInput, VideoParameters, VideoPromptInstance,
};
