//! UCA-RENDER: validated report → display sections.
//!
//! A pure mapping from an installed [`AnalysisReport`] onto the five
//! display sections: classification, model cards, infrastructure grid,
//! pricing and risks. Each section renders independently; a missing
//! optional sub-field degrades only its own sub-section. [`text`] renders
//! the same view to a terminal-friendly summary through handlebars.

pub mod text;

use serde::Serialize;
use uca_core::{AnalysisReport, ModelRecommendation};
use uca_validate::normalize;

#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub classification: ClassificationView,
    pub models: Vec<ModelCardView>,
    pub infrastructure: Vec<InfrastructureEntryView>,
    pub pricing: PricingView,
    pub risks: Vec<RiskView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassificationView {
    pub primary_category: String,
    pub task_type: String,
    pub complexity_level: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelCardView {
    pub model_name: String,
    /// Pre-formatted, e.g. "92.0%"
    pub confidence: String,
    pub reasons: Vec<String>,
    /// Absent when the report carried no performance estimate; the card
    /// then renders without its performance sub-section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceView>,
}

/// Performance metrics in display units
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceView {
    pub accuracy: f64,
    pub latency: f64,
    pub throughput: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InfrastructureEntryView {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingView {
    pub hourly_cost: f64,
    pub monthly_estimated_cost: f64,
    pub aws_instance_type: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskView {
    pub risk: String,
    pub impact: String,
    pub mitigation: String,
}

/// Map a validated report onto the five display sections.
///
/// Sequences keep the order received; the infrastructure grid follows the
/// report's sorted-key order.
pub fn render(report: &AnalysisReport) -> ReportView {
    ReportView {
        classification: ClassificationView {
            primary_category: report.classification.primary_category.clone(),
            task_type: report.classification.task_type.clone(),
            complexity_level: report.classification.complexity_level.clone(),
        },
        models: report.recommended_models.iter().map(model_card).collect(),
        infrastructure: report
            .infrastructure_requirements
            .iter()
            .map(|(key, value)| InfrastructureEntryView {
                label: infra_label(key),
                value: value.clone(),
            })
            .collect(),
        pricing: PricingView {
            hourly_cost: report.pricing_estimates.hourly_cost,
            monthly_estimated_cost: report.pricing_estimates.monthly_estimated_cost,
            aws_instance_type: report.pricing_estimates.aws_instance_type.clone(),
            notes: report.pricing_estimates.notes.clone(),
        },
        risks: report
            .risk_assessment
            .iter()
            .map(|item| RiskView {
                risk: item.risk.clone(),
                impact: item.impact.clone(),
                mitigation: item.mitigation.clone(),
            })
            .collect(),
    }
}

fn model_card(model: &ModelRecommendation) -> ModelCardView {
    ModelCardView {
        model_name: model.model_name.clone(),
        confidence: normalize::format_confidence(model.confidence_score),
        reasons: model.reasons.clone(),
        performance: model
            .estimated_performance
            .as_ref()
            .map(|perf| PerformanceView {
                accuracy: normalize::display_accuracy(perf.accuracy),
                latency: normalize::display_latency(perf.latency),
                throughput: normalize::display_throughput(perf.throughput),
            }),
    }
}

/// Requirement-name → grid label: delimiters become spaces, upper-cased.
/// A pure string transform with no semantic validation of the key.
pub fn infra_label(key: &str) -> String {
    key.replace(['_', '-'], " ").to_uppercase()
}
