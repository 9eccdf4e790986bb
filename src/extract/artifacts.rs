//! Typed artifacts handed back to the presentation layer.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{HeroError, HeroResult, ResponseError};
use crate::types::ReviewSnippet;

/// A generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageArtifact {
    /// MIME type, e.g. `image/jpeg`.
    pub mime_type: String,
    /// Base64-encoded bytes.
    pub data: String,
}

impl ImageArtifact {
    /// `data:` URL suitable for an `<img src>`.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decodes the image bytes.
    pub fn decode(&self) -> HeroResult<Vec<u8>> {
        decode_base64(&self.data)
    }
}

/// Generated speech.
///
/// The provider returns raw PCM; `mime_type` carries its encoding
/// parameters when reported, e.g. `audio/L16;codec=pcm;rate=24000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    /// Base64-encoded audio bytes. Never empty.
    pub data: String,
    /// MIME type as reported by the provider.
    pub mime_type: Option<String>,
}

impl AudioArtifact {
    /// Decodes the audio bytes.
    pub fn decode(&self) -> HeroResult<Vec<u8>> {
        decode_base64(&self.data)
    }

    /// Sample rate parsed from the MIME parameters, if present.
    pub fn sample_rate(&self) -> Option<u32> {
        let mime: mime::Mime = self.mime_type.as_deref()?.parse().ok()?;
        mime.get_param("rate")?.as_str().parse().ok()
    }
}

/// A finished video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoArtifact {
    /// Download URI. Fetching it requires the API key.
    pub uri: String,
}

/// Where a grounding source came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Web search result.
    Web,
    /// Map place.
    Maps,
}

/// One source backing grounded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundingSource {
    /// Origin of the source.
    pub kind: SourceKind,
    /// Source URI.
    pub uri: String,
    /// Source title.
    pub title: String,
    /// Review snippets, for map places.
    pub review_snippets: Vec<ReviewSnippet>,
}

/// Text plus the sources it was grounded on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundedText {
    /// Answer text.
    pub text: String,
    /// Sources, in provider order. May be empty.
    pub sources: Vec<GroundingSource>,
}

/// Any artifact a capability can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedArtifact {
    /// Plain or markdown text.
    Text(String),
    /// Text with grounding sources.
    GroundedText(GroundedText),
    /// An image.
    Image(ImageArtifact),
    /// Speech audio.
    Audio(AudioArtifact),
    /// A finished video.
    Video(VideoArtifact),
}

fn decode_base64(data: &str) -> HeroResult<Vec<u8>> {
    STANDARD.decode(data).map_err(|e| {
        HeroError::from(ResponseError::DeserializationError {
            message: format!("invalid base64 payload: {}", e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_data_url() {
        let image = ImageArtifact { mime_type: "image/jpeg".into(), data: "AAEC".into() };
        assert_eq!(image.data_url(), "data:image/jpeg;base64,AAEC");
        assert_eq!(image.decode().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_invalid_base64() {
        let image = ImageArtifact { mime_type: "image/png".into(), data: "not base64!".into() };
        assert_eq!(image.decode().unwrap_err().kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_audio_sample_rate() {
        let audio = AudioArtifact {
            data: "AAAA".into(),
            mime_type: Some("audio/L16;codec=pcm;rate=24000".into()),
        };
        assert_eq!(audio.sample_rate(), Some(24000));

        let bare = AudioArtifact { data: "AAAA".into(), mime_type: None };
        assert_eq!(bare.sample_rate(), None);
    }
}
