//! Image generation (`:predict`) request and response types.

use serde::{Deserialize, Serialize};

/// A single prompt instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImagePromptInstance {
    /// Text prompt.
    pub prompt: String,
}

/// Output encoding options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageOutputOptions {
    /// Output MIME type.
    pub mime_type: String,
}

/// Image generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageParameters {
    /// Number of images to generate.
    pub sample_count: u32,
    /// Aspect ratio such as `"16:9"`.
    pub aspect_ratio: String,
    /// Output encoding.
    pub output_options: ImageOutputOptions,
}

/// Request body for `models/{model}:predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateImagesRequest {
    /// Prompt instances; exactly one is sent.
    pub instances: Vec<ImagePromptInstance>,
    /// Generation parameters.
    pub parameters: ImageParameters,
}

/// One generated image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImagePrediction {
    /// Base64-encoded image bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_base64_encoded: Option<String>,
    /// MIME type of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Reason the image was filtered, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rai_filtered_reason: Option<String>,
}

/// Response body of `models/{model}:predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GenerateImagesResponse {
    /// Generated images. Absent when every sample was filtered.
    #[serde(default)]
    pub predictions: Vec<ImagePrediction>,
}
