use prometheus::{
    Encoder, HistogramOpts, HistogramTimer, HistogramVec, IntCounterVec, IntGaugeVec, Opts,
    Registry, TextEncoder,
};

// ============================================================================
// Metrics Module - Prometheus metrics for event dispatch
// ============================================================================
//
// Provides metrics for:
// - Notifications per event type
// - Handler invocations and failures
// - Registered handlers per event type
// - Fan-out duration
//
// Each DispatcherMetrics owns its Registry so several dispatchers (and tests)
// never collide on metric names.
// ============================================================================

pub struct DispatcherMetrics {
    registry: Registry,

    pub events_notified: IntCounterVec,
    pub handler_invocations: IntCounterVec,
    pub handler_failures: IntCounterVec,
    pub registered_handlers: IntGaugeVec,
    pub notify_duration: HistogramVec,
}

impl DispatcherMetrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let events_notified = IntCounterVec::new(
            Opts::new("domain_events_notified_total", "Total events passed to notify"),
            &["event_type"],
        )?;
        registry.register(Box::new(events_notified.clone()))?;

        let handler_invocations = IntCounterVec::new(
            Opts::new(
                "domain_events_handler_invocations_total",
                "Total handler invocations during fan-out",
            ),
            &["event_type"],
        )?;
        registry.register(Box::new(handler_invocations.clone()))?;

        let handler_failures = IntCounterVec::new(
            Opts::new(
                "domain_events_handler_failures_total",
                "Total handler failures that aborted a fan-out",
            ),
            &["event_type", "handler"],
        )?;
        registry.register(Box::new(handler_failures.clone()))?;

        let registered_handlers = IntGaugeVec::new(
            Opts::new(
                "domain_events_registered_handlers",
                "Handlers currently registered per event type",
            ),
            &["event_type"],
        )?;
        registry.register(Box::new(registered_handlers.clone()))?;

        let notify_duration = HistogramVec::new(
            HistogramOpts::new("domain_events_notify_duration_seconds", "Fan-out duration")
                .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]),
            &["event_type"],
        )?;
        registry.register(Box::new(notify_duration.clone()))?;

        Ok(Self {
            registry,
            events_notified,
            handler_invocations,
            handler_failures,
            registered_handlers,
            notify_duration,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_notified(&self, event_type: &str) {
        self.events_notified.with_label_values(&[event_type]).inc();
    }

    pub fn record_invocation(&self, event_type: &str) {
        self.handler_invocations.with_label_values(&[event_type]).inc();
    }

    pub fn record_failure(&self, event_type: &str, handler: &str) {
        self.handler_failures.with_label_values(&[event_type, handler]).inc();
    }

    pub fn record_registered(&self, event_type: &str) {
        self.registered_handlers.with_label_values(&[event_type]).inc();
    }

    pub fn record_unregistered(&self, event_type: &str, count: usize) {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        self.registered_handlers.with_label_values(&[event_type]).sub(count);
    }

    /// Observes the elapsed time when dropped
    pub fn start_notify_timer(&self, event_type: &str) -> HistogramTimer {
        self.notify_duration.with_label_values(&[event_type]).start_timer()
    }

    /// Text exposition format, ready to be served or logged
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
