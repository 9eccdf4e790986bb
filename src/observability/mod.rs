//! Observability for the orchestration layer: structured logging, spans and
//! metrics, all emitted through the `tracing` crate.
//!
//! ```rust
//! use integrations_hero_genai::observability::{Logger, StructuredLogger};
//! use serde_json::json;
//!
//! let logger = StructuredLogger::new("hero.orchestrator");
//! logger.info("Capability call completed", json!({
//!     "capability": "guide_text",
//!     "model": "gemini-2.5-flash"
//! }));
//! ```

pub mod logging;
pub mod metrics;
pub mod tracing;

pub use logging::{scrub, Logger, NoopLogger, StructuredLogger};
pub use metrics::{HeroMetrics, MetricsRecorder, NoopMetricsRecorder, TracingMetricsRecorder};
pub use tracing::{NoopTracer, Span, SpanStatus, Tracer, TracingSpan, TracingTracer};

use std::sync::Arc;

use crate::config::LogLevel;

/// Logger, tracer and metrics bundle shared by the client.
#[derive(Clone)]
pub struct Observability {
    /// Structured logger.
    pub logger: Arc<dyn Logger>,
    /// Span tracer.
    pub tracer: Arc<dyn Tracer>,
    /// Metrics wrapper.
    pub metrics: Arc<HeroMetrics>,
}

/// `tracing`-backed stack whose logger passes `level` and above.
pub fn create_stack(service_name: &str, level: LogLevel) -> Observability {
    Observability {
        logger: Arc::new(StructuredLogger::new(service_name).with_level(level)),
        tracer: Arc::new(TracingTracer::new(service_name)),
        metrics: Arc::new(HeroMetrics::new(service_name, Box::new(TracingMetricsRecorder::new()))),
    }
}

/// `tracing`-backed stack at the default level.
pub fn create_default_stack(service_name: &str) -> Observability {
    create_stack(service_name, LogLevel::default())
}

/// Stack that records nothing. Used by tests.
pub fn create_noop_stack(service_name: &str) -> Observability {
    Observability {
        logger: Arc::new(NoopLogger),
        tracer: Arc::new(NoopTracer),
        metrics: Arc::new(HeroMetrics::new(service_name, Box::new(NoopMetricsRecorder))),
    }
}
