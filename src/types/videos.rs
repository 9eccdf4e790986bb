//! Video generation (`:predictLongRunning`) and operation types.

use serde::{Deserialize, Serialize};

/// An image input encoded for the video endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoImageInput {
    /// Base64-encoded image bytes.
    pub bytes_base64_encoded: String,
    /// Image MIME type.
    pub mime_type: String,
}

/// A single video prompt instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoPromptInstance {
    /// Text prompt.
    pub prompt: String,
    /// Optional starting image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<VideoImageInput>,
}

/// Video generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoParameters {
    /// Number of videos to generate.
    pub sample_count: u32,
    /// Aspect ratio, `"16:9"` or `"9:16"`.
    pub aspect_ratio: String,
    /// Output resolution such as `"720p"`.
    pub resolution: String,
}

/// Request body for `models/{model}:predictLongRunning`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateVideosRequest {
    /// Prompt instances; exactly one is sent.
    pub instances: Vec<VideoPromptInstance>,
    /// Generation parameters.
    pub parameters: VideoParameters,
}

/// A generated video reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct VideoFile {
    /// Download URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// One generated sample.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneratedSample {
    /// The video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoFile>,
}

/// Payload of a finished video operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponse {
    /// Generated samples.
    #[serde(default)]
    pub generated_samples: Vec<GeneratedSample>,
    /// Number of samples removed by content filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rai_media_filtered_count: Option<u32>,
    /// Filter reasons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rai_media_filtered_reasons: Option<Vec<String>>,
}

/// Wrapper under `response` in a finished operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    /// The video generation payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_video_response: Option<GenerateVideoResponse>,
}

/// Error status of a failed operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OperationStatus {
    /// Status code.
    #[serde(default)]
    pub code: i32,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
}

/// A long-running operation as returned by submission and polling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Operation {
    /// Operation resource name, e.g. `models/veo/operations/abc`.
    pub name: String,
    /// Whether the operation finished. Absent means not yet.
    #[serde(default)]
    pub done: bool,
    /// Result payload once finished successfully.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<OperationResult>,
    /// Error once finished unsuccessfully.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<OperationStatus>,
}

impl Operation {
    /// URI of the first generated video, if any.
    pub fn video_uri(&self) -> Option<&str> {
        self.response
            .as_ref()?
            .generate_video_response
            .as_ref()?
            .generated_samples
            .iter()
            .find_map(|sample| sample.video.as_ref()?.uri.as_deref())
    }
}
