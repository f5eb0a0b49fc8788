//! Structural checks over the raw analysis response.
//!
//! Every required field of the report schema is checked for presence and
//! type; errors carry the JSON path of the offending field. The optional
//! `estimated_performance` block is accepted as absent and surfaces as
//! "not available" downstream, never defaulted to zero.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use uca_core::{
    AnalysisReport, Classification, EstimatedPerformance, ModelRecommendation, PricingEstimate,
    RiskItem, UcaError,
};

pub fn validate(raw: &Value) -> Result<AnalysisReport, UcaError> {
    let root = as_object(raw, "$")?;

    let classification = validate_classification(field(root, "$", "classification")?)?;
    let recommended_models = validate_models(field(root, "$", "recommended_models")?)?;
    let infrastructure_requirements =
        validate_infrastructure(field(root, "$", "infrastructure_requirements")?)?;
    let pricing_estimates = validate_pricing(field(root, "$", "pricing_estimates")?)?;
    let risk_assessment = validate_risks(field(root, "$", "risk_assessment")?)?;

    Ok(AnalysisReport {
        classification,
        recommended_models,
        infrastructure_requirements,
        pricing_estimates,
        risk_assessment,
    })
}

fn validate_classification(value: &Value) -> Result<Classification, UcaError> {
    let obj = as_object(value, "$.classification")?;
    Ok(Classification {
        primary_category: string_field(obj, "$.classification", "primary_category")?,
        task_type: string_field(obj, "$.classification", "task_type")?,
        complexity_level: string_field(obj, "$.classification", "complexity_level")?,
    })
}

fn validate_models(value: &Value) -> Result<Vec<ModelRecommendation>, UcaError> {
    let items = as_array(value, "$.recommended_models")?;
    let mut models = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let path = format!("$.recommended_models[{}]", idx);
        let obj = as_object(item, &path)?;
        let confidence_score = number_field(obj, &path, "confidence_score")?;
        unit_interval(confidence_score, &path, "confidence_score")?;
        let estimated_performance = match obj.get("estimated_performance") {
            None | Some(Value::Null) => None,
            Some(perf) => Some(validate_performance(perf, &path)?),
        };
        models.push(ModelRecommendation {
            model_name: string_field(obj, &path, "model_name")?,
            confidence_score,
            reasons: string_array_field(obj, &path, "reasons")?,
            estimated_performance,
        });
    }
    Ok(models)
}

fn validate_performance(value: &Value, parent: &str) -> Result<EstimatedPerformance, UcaError> {
    let path = format!("{}.estimated_performance", parent);
    let obj = as_object(value, &path)?;
    let accuracy = number_field(obj, &path, "accuracy")?;
    unit_interval(accuracy, &path, "accuracy")?;
    let latency = number_field(obj, &path, "latency")?;
    non_negative(latency, &path, "latency")?;
    let throughput = number_field(obj, &path, "throughput")?;
    non_negative(throughput, &path, "throughput")?;
    Ok(EstimatedPerformance {
        accuracy,
        latency,
        throughput,
    })
}

fn validate_infrastructure(value: &Value) -> Result<BTreeMap<String, String>, UcaError> {
    let obj = as_object(value, "$.infrastructure_requirements")?;
    let mut map = BTreeMap::new();
    for (key, entry) in obj {
        let display = entry.as_str().ok_or_else(|| {
            type_error(
                &format!("$.infrastructure_requirements.{}", key),
                "string",
                entry,
            )
        })?;
        map.insert(key.clone(), display.to_string());
    }
    Ok(map)
}

fn validate_pricing(value: &Value) -> Result<PricingEstimate, UcaError> {
    let path = "$.pricing_estimates";
    let obj = as_object(value, path)?;
    let hourly_cost = number_field(obj, path, "hourly_cost")?;
    non_negative(hourly_cost, path, "hourly_cost")?;
    let monthly_estimated_cost = number_field(obj, path, "monthly_estimated_cost")?;
    non_negative(monthly_estimated_cost, path, "monthly_estimated_cost")?;
    Ok(PricingEstimate {
        hourly_cost,
        monthly_estimated_cost,
        aws_instance_type: string_field(obj, path, "aws_instance_type")?,
        notes: string_array_field(obj, path, "notes")?,
    })
}

fn validate_risks(value: &Value) -> Result<Vec<RiskItem>, UcaError> {
    let items = as_array(value, "$.risk_assessment")?;
    let mut risks = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let path = format!("$.risk_assessment[{}]", idx);
        let obj = as_object(item, &path)?;
        risks.push(RiskItem {
            risk: string_field(obj, &path, "risk")?,
            impact: string_field(obj, &path, "impact")?,
            mitigation: string_field(obj, &path, "mitigation")?,
        });
    }
    Ok(risks)
}

// ============================================================================
// Field helpers
// ============================================================================

fn field<'a>(
    obj: &'a Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<&'a Value, UcaError> {
    obj.get(key)
        .ok_or_else(|| UcaError::ValidationError(format!("{}.{}: missing field", parent, key)))
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, UcaError> {
    value
        .as_object()
        .ok_or_else(|| type_error(path, "object", value))
}

fn as_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, UcaError> {
    value
        .as_array()
        .ok_or_else(|| type_error(path, "array", value))
}

fn string_field(obj: &Map<String, Value>, parent: &str, key: &str) -> Result<String, UcaError> {
    let value = field(obj, parent, key)?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| type_error(&format!("{}.{}", parent, key), "string", value))
}

fn number_field(obj: &Map<String, Value>, parent: &str, key: &str) -> Result<f64, UcaError> {
    let value = field(obj, parent, key)?;
    value
        .as_f64()
        .ok_or_else(|| type_error(&format!("{}.{}", parent, key), "number", value))
}

fn string_array_field(
    obj: &Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<Vec<String>, UcaError> {
    let path = format!("{}.{}", parent, key);
    let items = as_array(field(obj, parent, key)?, &path)?;
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| type_error(&format!("{}[{}]", path, idx), "string", item))
        })
        .collect()
}

fn unit_interval(value: f64, parent: &str, key: &str) -> Result<(), UcaError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(UcaError::ValidationError(format!(
            "{}.{}: {} outside [0, 1]",
            parent, key, value
        )));
    }
    Ok(())
}

fn non_negative(value: f64, parent: &str, key: &str) -> Result<(), UcaError> {
    if value < 0.0 {
        return Err(UcaError::ValidationError(format!(
            "{}.{}: {} is negative",
            parent, key, value
        )));
    }
    Ok(())
}

fn type_error(path: &str, expected: &str, got: &Value) -> UcaError {
    let got = match got {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    UcaError::ValidationError(format!("{}: expected {}, got {}", path, expected, got))
}
