//! UCA Core: Data Model, Submission Workflow e Ports
//!
//! Núcleo do analisador de casos de uso: máquina de estados de submissão,
//! gate de exclusão mútua e contratos assíncronos para os colaboradores
//! externos (serviço de análise e armazenamento de objetos).

pub mod config;
pub mod context;
pub mod error;
pub mod gate;
pub mod input;
pub mod ports;
pub mod report;
pub mod workflow;

pub use config::{AnalyzerConfig, StorageConfig};
pub use context::SubmissionContext;
pub use error::UcaError;
pub use gate::{GateGuard, SubmissionGate};
pub use input::{EmailAddress, UseCaseInput};
pub use ports::{AnalysisBackend, AnalysisCallError, ArchiveStore, ReportValidator};
pub use report::{
    AnalysisReport, AnalysisRequest, ArchiveRecord, Classification, EstimatedPerformance,
    ModelRecommendation, PricingEstimate, RiskItem,
};
pub use workflow::{ArchiveAck, SubmissionOutcome, SubmissionPhase, SubmissionState, Workflow};

/// Versão do motor UCA
pub const UCA_VERSION: &str = "1.0.0";
