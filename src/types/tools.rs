//! Tool and grounding configuration types.

use serde::{Deserialize, Serialize};

/// A tool that the model can use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Web search grounding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<GoogleSearch>,
    /// Map data grounding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps: Option<GoogleMaps>,
}

impl Tool {
    /// A tool enabling web search grounding.
    pub fn google_search() -> Self {
        Self { google_search: Some(GoogleSearch {}), ..Self::default() }
    }

    /// A tool enabling map grounding.
    pub fn google_maps() -> Self {
        Self { google_maps: Some(GoogleMaps {}), ..Self::default() }
    }
}

/// Web search grounding tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GoogleSearch {}

/// Map grounding tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GoogleMaps {}

/// Configuration for tool usage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    /// Retrieval configuration used by grounding tools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieval_config: Option<RetrievalConfig>,
}

/// Retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalConfig {
    /// User location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat_lng: Option<LatLng>,
}

/// A latitude/longitude pair, passed through unvalidated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}
