//! UCA-VALIDATE: shape validation and display normalization for the
//! loosely-typed analysis response.
//!
//! The external classification service returns JSON with no contract
//! enforcement of its own; everything rendered to the user passes through
//! `validate` first. Numeric display transforms (percentage rounding,
//! latency/throughput halving) live in [`normalize`] — they are
//! presentation coercions, not validation failure modes.
//!
//! # Example
//!
//! ```ignore
//! use uca_validate::SchemaValidator;
//! use uca_core::ReportValidator;
//!
//! let validator = SchemaValidator::new();
//! let report = validator.validate(&raw_json)?;
//! ```

pub mod normalize;
pub mod schema;

use serde_json::Value;
use uca_core::{AnalysisReport, ReportValidator, UcaError};

/// Validator over the §3 report schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl SchemaValidator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportValidator for SchemaValidator {
    fn validate(&self, raw: &Value) -> Result<AnalysisReport, UcaError> {
        schema::validate(raw)
    }
}
