//! Mock implementations for testing.
//!
//! [`MockHttpTransport`] replays canned responses in order and records every
//! request it receives, so tests can drive the orchestrator without a network.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::observability::MetricsRecorder;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Mock HTTP transport for testing.
///
/// # Example
///
/// ```
/// use integrations_hero_genai::mocks::MockHttpTransport;
/// use integrations_hero_genai::transport::{HttpMethod, HttpRequest, HttpTransport};
/// use std::collections::HashMap;
///
/// # #[tokio::main]
/// # async fn main() {
/// let transport = MockHttpTransport::new();
/// transport.enqueue_json_response(200, r#"{"name": "operations/1"}"#);
///
/// let request = HttpRequest {
///     method: HttpMethod::Get,
///     url: "https://example.com".to_string(),
///     headers: HashMap::new(),
///     body: None,
/// };
///
/// let response = transport.send(request).await.unwrap();
/// assert_eq!(response.status, 200);
/// transport.verify_request_count(1);
/// # }
/// ```
#[derive(Default)]
pub struct MockHttpTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    latency: Option<Duration>,
}

impl MockHttpTransport {
    /// Create a new mock HTTP transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every response by `latency`, yielding to other tasks meanwhile.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Enqueue a response to be returned by the next request.
    pub fn enqueue_response(&self, response: Result<HttpResponse, TransportError>) {
        lock(&self.responses).push_back(response);
    }

    /// Enqueue a JSON response with the given status code and body.
    pub fn enqueue_json_response(&self, status: u16, body: &str) {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        self.enqueue_response(Ok(HttpResponse {
            status,
            headers,
            body: Bytes::from(body.to_string()),
        }));
    }

    /// Enqueue a 200 response serialized from a JSON value.
    pub fn enqueue_json(&self, body: &serde_json::Value) {
        self.enqueue_json_response(200, &body.to_string());
    }

    /// Enqueue a transport error.
    pub fn enqueue_error(&self, error: TransportError) {
        self.enqueue_response(Err(error));
    }

    /// Get all requests that were made.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    /// Get the last request that was made.
    pub fn last_request(&self) -> Option<HttpRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Number of canned responses not yet consumed.
    pub fn pending_responses(&self) -> usize {
        lock(&self.responses).len()
    }

    /// Verify that exactly `expected` requests were made.
    ///
    /// # Panics
    ///
    /// Panics when the count differs.
    pub fn verify_request_count(&self, expected: usize) {
        let actual = self.request_count();
        assert_eq!(actual, expected, "Expected {} requests, got {}", expected, actual);
    }

    /// Verify that a request was made with the expected method and URL.
    ///
    /// # Panics
    ///
    /// Panics when there is no such request or it does not match.
    pub fn verify_request(&self, index: usize, method: HttpMethod, url_contains: &str) {
        let requests = lock(&self.requests);
        assert!(index < requests.len(), "No request at index {}", index);

        let request = &requests[index];
        assert_eq!(request.method, method, "Expected method {:?}, got {:?}", method, request.method);
        assert!(
            request.url.contains(url_contains),
            "Expected URL to contain '{}', got '{}'",
            url_contains,
            request.url
        );
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(request);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connection("No response configured in MockHttpTransport".into())))
    }
}

/// One counter increment seen by [`MockMetricsRecorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCounter {
    /// Metric name.
    pub name: String,
    /// Label pairs in call order.
    pub labels: Vec<(String, String)>,
}

/// Metrics recorder that keeps every counter increment for assertions.
///
/// Clones share the same record, so one clone can be boxed into
/// [`HeroMetrics`](crate::observability::HeroMetrics) while the test keeps another.
#[derive(Clone, Default)]
pub struct MockMetricsRecorder {
    counters: Arc<Mutex<Vec<RecordedCounter>>>,
}

impl MockMetricsRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every counter increment so far.
    pub fn counters(&self) -> Vec<RecordedCounter> {
        lock(&self.counters).clone()
    }

    /// Increments of the counter named `name`.
    pub fn counters_named(&self, name: &str) -> Vec<RecordedCounter> {
        lock(&self.counters)
            .iter()
            .filter(|counter| counter.name == name)
            .cloned()
            .collect()
    }
}

impl MetricsRecorder for MockMetricsRecorder {
    fn increment_counter(&self, name: &str, labels: &[(&str, &str)]) {
        lock(&self.counters).push(RecordedCounter {
            name: name.to_string(),
            labels: labels.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        });
    }

    fn record_histogram(&self, _name: &str, _value: f64, _labels: &[(&str, &str)]) {}
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
