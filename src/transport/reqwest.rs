//! Production transport over `reqwest`.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

use super::error::TransportError;
use super::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::config::HeroConfig;

/// Pooled HTTPS transport. One instance backs the shared client.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with explicit timeouts.
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| TransportError::Connection(format!("could not build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Build a transport using the timeouts in `config`.
    pub fn from_config(config: &HeroConfig) -> Result<Self, TransportError> {
        Self::new(config.timeout, config.connect_timeout)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// Headers that are not valid HTTP are dropped.
fn to_header_map(headers: HashMap<String, String>) -> HeaderMap {
    headers
        .into_iter()
        .filter_map(|(key, value)| {
            let name = HeaderName::from_bytes(key.as_bytes()).ok()?;
            let value = HeaderValue::from_str(&value).ok()?;
            Some((name, value))
        })
        .collect()
}

fn from_header_map(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| value.to_str().ok().map(|v| (name.to_string(), v.to_string())))
        .collect()
}

fn classify(err: &reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection(err.to_string())
    } else {
        TransportError::Request(err.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.into(), &request.url)
            .headers(to_header_map(request.headers));

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| classify(&e))?;

        let status = response.status().as_u16();
        let headers = from_header_map(response.headers());
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Request(format!("could not read response body: {e}")))?;

        Ok(HttpResponse { status, headers, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_from_config() {
        let config = HeroConfig::builder().build().unwrap();
        assert!(ReqwestTransport::from_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_headers_are_dropped() {
        let mut headers = HashMap::new();
        headers.insert("x-goog-api-key".to_string(), "abc".to_string());
        headers.insert("bad header".to_string(), "value".to_string());

        let map = to_header_map(headers);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("x-goog-api-key").unwrap(), "abc");
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(HttpMethod::Get), reqwest::Method::GET);
        assert_eq!(reqwest::Method::from(HttpMethod::Post), reqwest::Method::POST);
    }
}
