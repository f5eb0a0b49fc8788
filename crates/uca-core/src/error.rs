//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum UcaError {
    #[error("INPUT/{0}")]
    InputIncomplete(String),

    #[error("GATE/{0}")]
    GateHeld(String),

    #[error("PHASE/{0}")]
    PhaseError(String),

    #[error("ANALYSIS/{0}")]
    AnalysisFailure(String),

    #[error("DESERIALIZE/{0}")]
    DeserializationFailure(String),

    #[error("VALIDATE/{0}")]
    ValidationError(String),

    #[error("ARCHIVE/{0}")]
    ArchivalFailure(String),

    #[error("CONFIG/{0}")]
    ConfigError(String),
}
