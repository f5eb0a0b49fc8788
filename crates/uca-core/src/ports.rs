//! Ports: contratos assíncronos para os colaboradores externos
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::error::UcaError;
use crate::report::{AnalysisReport, AnalysisRequest};

/// Failure modes of the single outbound analysis call.
///
/// Transport failures (connection refused, DNS, non-2xx status) are
/// undifferentiated; `Deserialize` means a body arrived but could not be
/// parsed as JSON at all. Schema judgment belongs to the validator.
#[derive(Debug, Error, Clone)]
pub enum AnalysisCallError {
    #[error("ANALYSIS/{0}")]
    Transport(String),
    #[error("DESERIALIZE/{0}")]
    Deserialize(String),
}

impl From<AnalysisCallError> for UcaError {
    fn from(e: AnalysisCallError) -> Self {
        match e {
            AnalysisCallError::Transport(msg) => UcaError::AnalysisFailure(msg),
            AnalysisCallError::Deserialize(msg) => UcaError::DeserializationFailure(msg),
        }
    }
}

/// The external classification service.
///
/// Exactly one outbound call per submission; no caching, no retry, no
/// deduplication of identical use-case text.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// POST the request and return the deserialized (but unvalidated) body
    async fn submit_analysis(&self, request: &AnalysisRequest)
        -> Result<Value, AnalysisCallError>;
}

/// Shape validation of the loosely-typed external response
pub trait ReportValidator: Send + Sync {
    fn validate(&self, raw: &Value) -> Result<AnalysisReport, UcaError>;
}

/// Write-only object storage used by the archival writer
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<(), UcaError>;
}
