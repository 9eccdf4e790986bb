//! Test fixtures: recorded provider responses stored as JSON next to this file.

use std::path::PathBuf;

/// Get the path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("fixtures")
        .join(relative_path)
}

/// Load a fixture file as a string.
///
/// # Panics
///
/// Panics when the file cannot be read.
pub fn load_fixture(relative_path: &str) -> String {
    std::fs::read_to_string(fixture_path(relative_path))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", relative_path, e))
}

/// Load a JSON fixture and parse it.
///
/// # Panics
///
/// Panics when the file cannot be read or parsed.
pub fn load_json_fixture<T: serde::de::DeserializeOwned>(relative_path: &str) -> T {
    let content = load_fixture(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse JSON fixture {}: {}", relative_path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GenerateContentResponse, GenerateImagesResponse, Operation};

    #[test]
    fn test_fixtures_parse_as_wire_types() {
        let _: GenerateContentResponse = load_json_fixture("content/guide_response.json");
        let _: GenerateContentResponse = load_json_fixture("content/grounded_response.json");
        let _: GenerateContentResponse = load_json_fixture("content/speech_response.json");
        let _: GenerateContentResponse = load_json_fixture("content/edit_response.json");
        let _: GenerateImagesResponse = load_json_fixture("images/predict_response.json");

        let done: Operation = load_json_fixture("videos/operation_done.json");
        assert!(done.video_uri().is_some());
    }
}
