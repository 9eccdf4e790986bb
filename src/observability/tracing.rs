//! Spans around capability calls, chat turns and video polls.
//!
//! Span names follow `hero.<capability>`; a span closes with either
//! `ok` or the [`ErrorKind`] of the failure.

use std::time::Instant;

use crate::error::{ErrorKind, HeroError};

/// Opens spans.
pub trait Tracer: Send + Sync {
    /// Start a span named e.g. `hero.image_generate`.
    fn start_span(&self, name: &str) -> Box<dyn Span>;
}

/// One traced unit of work.
pub trait Span: Send {
    /// Attach a key/value pair.
    fn set_attribute(&mut self, key: &'static str, value: &str);

    /// Record how the work ended.
    fn set_status(&mut self, status: SpanStatus);

    /// Close the span.
    fn end(self: Box<Self>);
}

/// How a span ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanStatus {
    /// The call produced its artifact.
    Ok,
    /// The call failed.
    Failed {
        /// Failure classification.
        kind: ErrorKind,
        /// Rendered error.
        message: String,
    },
}

impl SpanStatus {
    /// Status for a failed call.
    pub fn failed(error: &HeroError) -> Self {
        SpanStatus::Failed {
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    /// `ok` or the snake-case error kind.
    pub fn label(&self) -> &'static str {
        match self {
            SpanStatus::Ok => "ok",
            SpanStatus::Failed { kind, .. } => kind.as_str(),
        }
    }
}

/// Tracer emitting through the `tracing` crate.
pub struct TracingTracer {
    service_name: String,
}

impl TracingTracer {
    /// Create a tracer tagged with `service_name`.
    pub fn new(service_name: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
        }
    }
}

impl Tracer for TracingTracer {
    fn start_span(&self, name: &str) -> Box<dyn Span> {
        let inner = tracing::info_span!(
            "hero_call",
            service = %self.service_name,
            name = %name,
            status = tracing::field::Empty,
        );

        Box::new(TracingSpan {
            inner,
            name: name.to_string(),
            started: Instant::now(),
            attributes: Vec::new(),
            status: None,
        })
    }
}

/// Span that logs its attributes and duration when closed.
pub struct TracingSpan {
    inner: tracing::Span,
    name: String,
    started: Instant,
    attributes: Vec<(&'static str, String)>,
    status: Option<SpanStatus>,
}

impl Span for TracingSpan {
    fn set_attribute(&mut self, key: &'static str, value: &str) {
        self.attributes.push((key, value.to_string()));
    }

    fn set_status(&mut self, status: SpanStatus) {
        self.inner.record("status", status.label());
        self.status = Some(status);
    }

    fn end(self: Box<Self>) {
        let elapsed_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let status = self.status.as_ref().map_or("unset", SpanStatus::label);

        self.inner.in_scope(|| match &self.status {
            Some(SpanStatus::Failed { message, .. }) => tracing::warn!(
                span_name = %self.name,
                elapsed_ms,
                status,
                error = %message,
                attributes = ?self.attributes,
                "span closed"
            ),
            _ => tracing::debug!(
                span_name = %self.name,
                elapsed_ms,
                status,
                attributes = ?self.attributes,
                "span closed"
            ),
        });
    }
}

/// Tracer that drops everything.
#[derive(Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    fn start_span(&self, _name: &str) -> Box<dyn Span> {
        Box::new(NoopSpan)
    }
}

struct NoopSpan;

impl Span for NoopSpan {
    fn set_attribute(&mut self, _key: &'static str, _value: &str) {}
    fn set_status(&mut self, _status: SpanStatus) {}
    fn end(self: Box<Self>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResponseError;

    #[test]
    fn test_failed_status_carries_kind() {
        let status = SpanStatus::failed(&HeroError::Response(ResponseError::NoImageGenerated));
        assert_eq!(status.label(), "no_image_generated");
        assert_eq!(SpanStatus::Ok.label(), "ok");
    }

    #[test]
    fn test_span_lifecycle() {
        let tracer = TracingTracer::new("hero");
        let mut span = tracer.start_span("hero.guide_text");

        span.set_attribute("model", "gemini-2.5-flash");
        span.set_status(SpanStatus::failed(&HeroError::Response(ResponseError::EmptyResponse)));
        span.end();
    }

    #[test]
    fn test_noop_tracer() {
        let mut span = NoopTracer.start_span("hero.speech");
        span.set_attribute("key", "value");
        span.set_status(SpanStatus::Ok);
        span.end();
    }
}
