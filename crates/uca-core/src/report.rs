//! Data Model: AnalysisRequest, AnalysisReport, ArchiveRecord
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request body sent to the analysis endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Free-text description of the AI use case
    pub use_case: String,
}

/// Structured analysis returned by the classification service.
///
/// Immutable once installed; a new submission fully replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub classification: Classification,
    /// Insertion order = display order, may be empty
    pub recommended_models: Vec<ModelRecommendation>,
    /// Requirement name → display value; rendered sorted by key
    pub infrastructure_requirements: BTreeMap<String, String>,
    pub pricing_estimates: PricingEstimate,
    /// Display order = given order
    pub risk_assessment: Vec<RiskItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub primary_category: String,
    pub task_type: String,
    pub complexity_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecommendation {
    pub model_name: String,
    /// In [0, 1]
    pub confidence_score: f64,
    pub reasons: Vec<String>,
    /// Absence suppresses the performance visualization, it is not an error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_performance: Option<EstimatedPerformance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedPerformance {
    /// In [0, 1]
    pub accuracy: f64,
    /// Internal unit is twice the display unit
    pub latency: f64,
    /// Internal unit is twice the display unit
    pub throughput: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingEstimate {
    pub hourly_cost: f64,
    pub monthly_estimated_cost: f64,
    pub aws_instance_type: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskItem {
    pub risk: String,
    pub impact: String,
    pub mitigation: String,
}

/// Body of the best-effort archival write
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveRecord {
    pub email: String,
    pub use_case: String,
}

impl ArchiveRecord {
    pub fn new(email: &str, use_case: &str) -> Self {
        Self {
            email: email.to_string(),
            use_case: use_case.to_string(),
        }
    }

    /// Object key for a submission archived at `ts`
    pub fn key_for(ts: DateTime<Utc>) -> String {
        format!("analysis-{}.json", ts.timestamp_millis())
    }
}
