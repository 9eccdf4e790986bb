//! Structured logging for the orchestration layer.

use serde_json::{Map, Value};

use crate::config::LogLevel;

/// Sink for structured log lines.
///
/// Implementors provide [`Logger::log`]; the level helpers forward to it.
pub trait Logger: Send + Sync {
    /// Emit `message` at `level` with JSON context.
    fn log(&self, level: LogLevel, message: &str, fields: Value);

    /// Debug-level line.
    fn debug(&self, message: &str, fields: Value) {
        self.log(LogLevel::Debug, message, fields);
    }

    /// Info-level line.
    fn info(&self, message: &str, fields: Value) {
        self.log(LogLevel::Info, message, fields);
    }

    /// Warn-level line.
    fn warn(&self, message: &str, fields: Value) {
        self.log(LogLevel::Warn, message, fields);
    }

    /// Error-level line.
    fn error(&self, message: &str, fields: Value) {
        self.log(LogLevel::Error, message, fields);
    }
}

const CREDENTIAL_KEYS: [&str; 9] = [
    "api_key", "apiKey", "key",
    "token", "secret", "password", "credential",
    "authorization", "x-goog-api-key",
];

// Inline media is logged as its encoded length only.
const PAYLOAD_KEYS: [&str; 4] = ["data", "image_base64", "imageBase64", "bytesBase64Encoded"];

const REDACTED: &str = "***REDACTED***";

/// Logger emitting `tracing` events.
///
/// Credentials are redacted and inline media payloads are elided before the
/// fields reach the subscriber.
pub struct StructuredLogger {
    name: String,
    threshold: LogLevel,
}

impl StructuredLogger {
    /// Logger tagged with `name`, passing info and above.
    ///
    /// ```
    /// use integrations_hero_genai::observability::StructuredLogger;
    ///
    /// let logger = StructuredLogger::new("hero.orchestrator");
    /// ```
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            threshold: LogLevel::default(),
        }
    }

    /// Lines more verbose than `threshold` are dropped.
    pub fn with_level(mut self, threshold: LogLevel) -> Self {
        self.threshold = threshold;
        self
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level <= self.threshold
    }
}

impl Logger for StructuredLogger {
    fn log(&self, level: LogLevel, message: &str, fields: Value) {
        if !self.enabled(level) {
            return;
        }

        let fields = scrub(fields);
        match level {
            LogLevel::Error => tracing::error!(logger = %self.name, fields = %fields, "{}", message),
            LogLevel::Warn => tracing::warn!(logger = %self.name, fields = %fields, "{}", message),
            LogLevel::Info => tracing::info!(logger = %self.name, fields = %fields, "{}", message),
            LogLevel::Debug => tracing::debug!(logger = %self.name, fields = %fields, "{}", message),
            LogLevel::Trace => tracing::trace!(logger = %self.name, fields = %fields, "{}", message),
        }
    }
}

/// Returns `fields` with credentials masked and base64 payloads elided, at any depth.
pub fn scrub(fields: Value) -> Value {
    match fields {
        Value::Object(map) => Value::Object(scrub_object(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(scrub).collect()),
        other => other,
    }
}

fn scrub_object(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| {
            let value = if CREDENTIAL_KEYS.contains(&key.as_str()) {
                Value::String(REDACTED.to_string())
            } else if PAYLOAD_KEYS.contains(&key.as_str()) {
                match value {
                    Value::String(payload) => Value::String(format!("<{} bytes>", payload.len())),
                    other => scrub(other),
                }
            } else {
                scrub(value)
            };
            (key, value)
        })
        .collect()
}

/// Logger that discards every line.
#[derive(Debug, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: LogLevel, _message: &str, _fields: Value) {}
}
