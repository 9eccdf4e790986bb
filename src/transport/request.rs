//! HTTP request builder for the provider API.
//!
//! Handles URL construction with the API version prefix, authentication and
//! JSON body serialization.

use bytes::Bytes;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

use crate::auth::AuthManager;
use crate::error::HeroError;
use super::http::{HttpRequest, HttpMethod};

/// Builder for constructing HTTP requests to the provider API.
#[derive(Clone)]
pub struct RequestBuilder {
    /// Base URL for the API.
    base_url: Url,
    /// API version (e.g., "v1beta").
    api_version: String,
    /// Authentication manager.
    auth_manager: Arc<dyn AuthManager>,
}

impl RequestBuilder {
    /// Creates a new request builder.
    pub fn new(
        base_url: Url,
        api_version: String,
        auth_manager: Arc<dyn AuthManager>,
    ) -> Self {
        Self {
            base_url,
            api_version,
            auth_manager,
        }
    }

    /// Builds a complete URL for the given path.
    ///
    /// ```no_run
    /// # use integrations_hero_genai::transport::RequestBuilder;
    /// # use integrations_hero_genai::auth::ApiKeyAuthManager;
    /// # use integrations_hero_genai::config::HeroConfig;
    /// # use std::sync::Arc;
    /// # let config = HeroConfig::builder().build().unwrap();
    /// # let builder = RequestBuilder::new(
    /// #     config.base_url.clone(),
    /// #     config.api_version.clone(),
    /// #     Arc::new(ApiKeyAuthManager::from_config(&config)),
    /// # );
    /// let url = builder.build_url("/models/gemini-2.5-flash:generateContent").unwrap();
    /// // https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent
    /// ```
    pub fn build_url(&self, path: &str) -> Result<Url, HeroError> {
        let path = path.trim_start_matches('/');
        let full_path = format!("{}/{}", self.api_version, path);

        let mut url = self.base_url.join(&full_path)?;

        if let Some((key, value)) = self.auth_manager.get_auth_query_param() {
            url.query_pairs_mut().append_pair(&key, &value);
        }

        Ok(url)
    }

    /// Builds an HTTP request, serializing `body` as JSON when present.
    pub fn build_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&T>,
    ) -> Result<HttpRequest, HeroError> {
        let url = self.build_url(path)?;

        let mut headers = HashMap::new();

        if body.is_some() {
            headers.insert(
                "Content-Type".to_string(),
                mime::APPLICATION_JSON.essence_str().to_string(),
            );
        }

        if let Some((key, value)) = self.auth_manager.get_auth_header() {
            headers.insert(key, value);
        }

        let body_bytes = match body {
            Some(body) => Some(Bytes::from(serde_json::to_vec(body)?)),
            None => None,
        };

        Ok(HttpRequest {
            method,
            url: url.to_string(),
            headers,
            body: body_bytes,
        })
    }

    /// Builds a JSON POST request.
    pub fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<HttpRequest, HeroError> {
        self.build_request(HttpMethod::Post, path, Some(body))
    }

    /// Builds a body-less GET request.
    pub fn get(&self, path: &str) -> Result<HttpRequest, HeroError> {
        self.build_request::<()>(HttpMethod::Get, path, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ApiKeyAuthManager;
    use crate::config::{AuthMethod, HeroConfig};
    use secrecy::SecretString;
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestBody {
        message: String,
    }

    fn create_test_builder(auth_method: AuthMethod) -> RequestBuilder {
        let config = HeroConfig::builder()
            .api_key(SecretString::new("test-api-key".into()))
            .auth_method(auth_method)
            .build()
            .unwrap();

        let auth_manager = ApiKeyAuthManager::from_config(&config);

        RequestBuilder::new(
            config.base_url,
            config.api_version,
            Arc::new(auth_manager),
        )
    }

    #[test]
    fn test_build_url_with_version() {
        let builder = create_test_builder(AuthMethod::Header);
        let url = builder.build_url("/models/gemini-2.5-flash:generateContent").unwrap();

        assert!(url.as_str().contains("/v1beta/models/gemini-2.5-flash:generateContent"));
    }

    #[test]
    fn test_build_url_with_query_param_auth() {
        let builder = create_test_builder(AuthMethod::QueryParam);
        let url = builder.build_url("/models").unwrap();

        assert!(url.query().unwrap().contains("key=test-api-key"));
    }

    #[test]
    fn test_build_url_strips_leading_slash() {
        let builder = create_test_builder(AuthMethod::Header);
        let url1 = builder.build_url("/models").unwrap();
        let url2 = builder.build_url("models").unwrap();

        assert_eq!(url1, url2);
    }

    #[test]
    fn test_post_sets_json_and_auth_headers() {
        let builder = create_test_builder(AuthMethod::Header);
        let body = TestBody {
            message: "test".to_string(),
        };

        let request = builder.post("/models/gemini-2.5-flash:generateContent", &body).unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.headers.get("Content-Type").unwrap(), "application/json");
        assert_eq!(request.headers.get("x-goog-api-key").unwrap(), "test-api-key");
        assert_eq!(request.json_body().unwrap()["message"], "test");
    }

    #[test]
    fn test_get_has_no_body() {
        let builder = create_test_builder(AuthMethod::Header);
        let request = builder.get("/models/veo/operations/abc").unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert!(!request.headers.contains_key("Content-Type"));
        assert!(request.body.is_none());
        assert!(request.url.ends_with("/v1beta/models/veo/operations/abc"));
    }
}
