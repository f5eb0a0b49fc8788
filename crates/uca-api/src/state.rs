//! Shared application state: one workflow, one gate, one metrics registry.
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::metrics::ApiMetrics;
use uca_archive::S3ArchiveStore;
use uca_client::HttpAnalysisClient;
use uca_core::{AnalyzerConfig, ArchiveStore, SubmissionGate, Workflow};
use uca_validate::SchemaValidator;

pub struct AppState {
    pub workflow: Mutex<Workflow>,
    /// Same handle the workflow holds; read-checked before locking so a
    /// second submission is rejected instead of queued
    pub gate: SubmissionGate,
    pub metrics: ApiMetrics,
}

impl AppState {
    /// Wire the real collaborators from the injected configuration.
    pub fn new(config: &AnalyzerConfig) -> Result<Self, prometheus::Error> {
        let backend = Arc::new(HttpAnalysisClient::new(config));
        let validator = Arc::new(SchemaValidator::new());
        let store = config
            .storage
            .clone()
            .map(|s| Arc::new(S3ArchiveStore::new(s)) as Arc<dyn ArchiveStore>);
        Self::with_workflow(Workflow::new(backend, validator, store))
    }

    /// Seam for tests and alternative backends.
    pub fn with_workflow(workflow: Workflow) -> Result<Self, prometheus::Error> {
        let gate = workflow.gate();
        Ok(Self {
            workflow: Mutex::new(workflow),
            gate,
            metrics: ApiMetrics::new()?,
        })
    }
}
