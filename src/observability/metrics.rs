//! Metrics recording for capability calls and operation polling.

use std::collections::HashMap;

/// Metrics recorder trait.
pub trait MetricsRecorder: Send + Sync {
    /// Increment a counter metric.
    fn increment_counter(&self, name: &str, labels: &[(&str, &str)]);

    /// Record a histogram value.
    fn record_histogram(&self, name: &str, value: f64, labels: &[(&str, &str)]);
}

/// Convenience wrapper recording the orchestration metrics.
pub struct HeroMetrics {
    prefix: String,
    recorder: Box<dyn MetricsRecorder>,
}

impl HeroMetrics {
    /// Create a new metrics wrapper.
    pub fn new(prefix: &str, recorder: Box<dyn MetricsRecorder>) -> Self {
        Self {
            prefix: prefix.to_string(),
            recorder,
        }
    }

    /// Record one capability call with its outcome and duration.
    ///
    /// `outcome` is `"ok"` or the error kind label.
    pub fn record_call(&self, capability: &str, outcome: &str, duration_ms: u64) {
        self.recorder.increment_counter(
            &format!("{}_calls_total", self.prefix),
            &[("capability", capability), ("outcome", outcome)],
        );

        self.recorder.record_histogram(
            &format!("{}_call_duration_ms", self.prefix),
            duration_ms as f64,
            &[("capability", capability)],
        );
    }

    /// Record the state a video operation was observed in after a poll.
    pub fn record_poll(&self, state: &str) {
        self.recorder.increment_counter(
            &format!("{}_operation_polls_total", self.prefix),
            &[("state", state)],
        );
    }

    /// Record a poll whose status call failed before any state was observed.
    pub fn record_poll_failure(&self, error_kind: &str) {
        self.recorder.increment_counter(
            &format!("{}_operation_poll_failures_total", self.prefix),
            &[("error_kind", error_kind)],
        );
    }
}

/// Recorder emitting metrics as `tracing` events.
#[derive(Default)]
pub struct TracingMetricsRecorder;

impl TracingMetricsRecorder {
    /// Create a new tracing metrics recorder.
    pub fn new() -> Self {
        Self
    }
}

impl MetricsRecorder for TracingMetricsRecorder {
    fn increment_counter(&self, name: &str, labels: &[(&str, &str)]) {
        let labels_map: HashMap<&str, &str> = labels.iter().copied().collect();
        tracing::debug!(
            metric_type = "counter",
            metric_name = name,
            metric_value = 1,
            labels = ?labels_map,
            "Counter incremented"
        );
    }

    fn record_histogram(&self, name: &str, value: f64, labels: &[(&str, &str)]) {
        let labels_map: HashMap<&str, &str> = labels.iter().copied().collect();
        tracing::debug!(
            metric_type = "histogram",
            metric_name = name,
            metric_value = value,
            labels = ?labels_map,
            "Histogram recorded"
        );
    }
}

/// Recorder that drops every sample.
#[derive(Debug, Default)]
pub struct NoopMetricsRecorder;

impl MetricsRecorder for NoopMetricsRecorder {
    fn increment_counter(&self, _name: &str, _labels: &[(&str, &str)]) {}

    fn record_histogram(&self, _name: &str, _value: f64, _labels: &[(&str, &str)]) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    type Recorded = Arc<Mutex<Vec<(String, Vec<(String, String)>)>>>;

    struct TestMetricsRecorder {
        counters: Recorded,
        histograms: Recorded,
    }

    fn owned(labels: &[(&str, &str)]) -> Vec<(String, String)> {
        labels.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    impl MetricsRecorder for TestMetricsRecorder {
        fn increment_counter(&self, name: &str, labels: &[(&str, &str)]) {
            self.counters.lock().unwrap().push((name.to_string(), owned(labels)));
        }

        fn record_histogram(&self, name: &str, _value: f64, labels: &[(&str, &str)]) {
            self.histograms.lock().unwrap().push((name.to_string(), owned(labels)));
        }
    }

    #[test]
    fn test_record_call() {
        let counters: Recorded = Arc::default();
        let histograms: Recorded = Arc::default();
        let metrics = HeroMetrics::new("hero", Box::new(TestMetricsRecorder {
            counters: counters.clone(),
            histograms: histograms.clone(),
        }));

        metrics.record_call("image_generate", "ok", 1234);

        let counters = counters.lock().unwrap();
        assert_eq!(counters.len(), 1);
        assert_eq!(counters[0].0, "hero_calls_total");
        assert!(counters[0].1.contains(&("outcome".to_string(), "ok".to_string())));
        assert_eq!(histograms.lock().unwrap()[0].0, "hero_call_duration_ms");
    }

    #[test]
    fn test_record_poll() {
        let counters: Recorded = Arc::default();
        let metrics = HeroMetrics::new("hero", Box::new(TestMetricsRecorder {
            counters: counters.clone(),
            histograms: Arc::default(),
        }));

        metrics.record_poll("pending");

        assert_eq!(counters.lock().unwrap()[0].0, "hero_operation_polls_total");
    }

    #[test]
    fn test_record_poll_failure() {
        let counters: Recorded = Arc::default();
        let metrics = HeroMetrics::new("hero", Box::new(TestMetricsRecorder {
            counters: counters.clone(),
            histograms: Arc::default(),
        }));

        metrics.record_poll_failure("transport_failure");

        let counters = counters.lock().unwrap();
        assert_eq!(counters[0].0, "hero_operation_poll_failures_total");
        assert_eq!(counters[0].1, vec![("error_kind".to_string(), "transport_failure".to_string())]);
    }

    #[test]
    fn test_noop_and_tracing_recorders() {
        NoopMetricsRecorder.increment_counter("c", &[("l", "v")]);
        TracingMetricsRecorder::new().record_histogram("h", 1.0, &[]);
    }
}
