//! Endpoint path builders for the provider API.

/// Base path for models endpoints.
pub const MODELS: &str = "/models";

/// Path for the generateContent endpoint.
///
/// ```
/// use integrations_hero_genai::transport::endpoints;
///
/// let path = endpoints::generate_content("gemini-2.5-flash");
/// assert_eq!(path, "/models/gemini-2.5-flash:generateContent");
/// ```
pub fn generate_content(model: &str) -> String {
    format!("{}/{}:generateContent", MODELS, model)
}

/// Path for the synchronous predict endpoint (image generation).
pub fn predict(model: &str) -> String {
    format!("{}/{}:predict", MODELS, model)
}

/// Path for the long-running predict endpoint (video generation).
pub fn predict_long_running(model: &str) -> String {
    format!("{}/{}:predictLongRunning", MODELS, model)
}

/// Path for an operation status check.
///
/// Operation names are returned fully qualified
/// (e.g. `models/veo-3.1-fast-generate-preview/operations/abc123`), so the
/// name is used as the path as-is.
pub fn operation(name: &str) -> String {
    format!("/{}", name.trim_start_matches('/'))
}
