//! Prometheus counters for the submission workflow.
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

pub struct ApiMetrics {
    pub registry: Registry,
    pub submissions_total: IntCounter,
    pub submission_failures_total: IntCounter,
    pub archives_total: IntCounter,
}

impl ApiMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let submissions_total =
            IntCounter::new("uca_submissions_total", "Submissions that entered the gate")?;
        let submission_failures_total = IntCounter::new(
            "uca_submission_failures_total",
            "Submissions that terminated in the Error phase",
        )?;
        let archives_total =
            IntCounter::new("uca_archives_total", "Archive objects written")?;

        registry.register(Box::new(submissions_total.clone()))?;
        registry.register(Box::new(submission_failures_total.clone()))?;
        registry.register(Box::new(archives_total.clone()))?;

        Ok(Self {
            registry,
            submissions_total,
            submission_failures_total,
            archives_total,
        })
    }
}

pub fn encode(registry: &Registry) -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).to_string())
}
