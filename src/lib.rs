//! # HERO generation orchestration layer
//!
//! Maps the HERO app's generative features (chat, grounded text, guides,
//! fitness plans, meditation scripts, writing and communication help, image
//! generation, editing and analysis, speech, and video) onto one shared
//! Gemini API client.
//!
//! ## Features
//!
//! - One capability request type with exhaustive request builders
//! - A uniform trauma-informed system instruction on every text capability
//! - Typed artifacts for text, grounded text, images, audio and video
//! - An explicit state machine for long-running video jobs
//! - A lazily built, process-shared client that tolerates a missing API key
//! - Structured logging, spans and metrics through `tracing`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_hero_genai::{Orchestrator, VideoAspectRatio, DEFAULT_POLL_INTERVAL};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let orchestrator = Orchestrator::from_env()?;
//!
//!     let guide = orchestrator.generate_guide_text("Box Breathing").await?;
//!     println!("{}", guide);
//!
//!     let handle = orchestrator
//!         .generate_video_from_text("Sunrise over a quiet lake", VideoAspectRatio::Landscape)
//!         .await?;
//!     let handle = orchestrator
//!         .wait_for_video(handle, DEFAULT_POLL_INTERVAL, &CancellationToken::new())
//!         .await?;
//!     println!("{:?}", handle.result());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `capability` - Capability requests, model table and request builders
//! - `policy` - System instruction attached to eligible requests
//! - `extract` - Response normalization into typed artifacts
//! - `operation` - Video job state machine and polling helpers
//! - `services` - `Orchestrator` and `ChatSession`
//! - `client` - Shared provider client and its factory
//! - `config` - Configuration types and builder
//! - `auth` - API key handling
//! - `transport` - HTTP transport layer
//! - `error` - Error types and taxonomy
//! - `types` - Provider wire types
//! - `observability` - Logging, tracing and metrics

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod capability;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod observability;
pub mod operation;
pub mod policy;
pub mod services;
pub mod transport;
pub mod types;

// Development/testing modules - always available for integration tests
pub mod fixtures;
pub mod mocks;

pub use auth::{ApiKeyAuthManager, AuthManager};
pub use capability::{
    build, AspectRatio, CapabilityKind, CapabilityRequest, ChatConfig, InlineImage, ModelTier,
    ProviderRequest, VideoAspectRatio,
};
pub use client::{ClientFactory, GenAiClient, GenAiClientBuilder};
pub use config::{
    AuthMethod, HeroConfig, HeroConfigBuilder, LogLevel, DEFAULT_API_VERSION, DEFAULT_BASE_URL,
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
pub use error::{
    AuthenticationError, ConfigurationError, ErrorKind, HeroError, HeroResult, NetworkError,
    OperationError, ProviderError, ResponseError,
};
pub use extract::{
    AudioArtifact, GeneratedArtifact, GroundedText, GroundingSource, ImageArtifact,
    ProviderResponse, SourceKind, VideoArtifact,
};
pub use observability::{
    create_default_stack, create_noop_stack, create_stack, NoopLogger, NoopMetricsRecorder, NoopTracer,
    HeroMetrics, Logger, MetricsRecorder, Observability, Span, SpanStatus, StructuredLogger,
    Tracer, TracingMetricsRecorder, TracingSpan, TracingTracer,
};
pub use operation::{
    advance, wait_for_completion, OperationFailure, OperationHandle, OperationPoller,
    OperationState, DEFAULT_POLL_INTERVAL,
};
pub use policy::{inject, policy_for, PolicyInstruction, PolicyMode, HERO_SYSTEM_INSTRUCTION};
pub use services::{CapabilityOutcome, ChatSession, Orchestrator};
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBuilder, ResponseParser,
    ReqwestTransport, TransportError,
};
