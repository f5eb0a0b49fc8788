//! Display normalization for validated numeric fields.
//!
//! These transforms are presentation coercions applied after validation:
//! confidence becomes a percentage with one decimal, and latency and
//! throughput are halved because their internal unit is twice the unit
//! shown to the user.

/// Confidence score as a percentage string with one decimal place
pub fn format_confidence(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Accuracy on the same percent scale used by the performance chart
pub fn display_accuracy(accuracy: f64) -> f64 {
    accuracy * 100.0
}

pub fn display_latency(latency: f64) -> f64 {
    latency / 2.0
}

pub fn display_throughput(throughput: f64) -> f64 {
    throughput / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_rounds_to_one_decimal() {
        assert_eq!(format_confidence(0.8675), "86.8%");
        assert_eq!(format_confidence(0.5), "50.0%");
        assert_eq!(format_confidence(0.92), "92.0%");
        assert_eq!(format_confidence(1.0), "100.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
    }

    #[test]
    fn test_latency_and_throughput_are_halved() {
        assert_eq!(display_latency(120.0), 60.0);
        assert_eq!(display_throughput(40.0), 20.0);
        assert_eq!(display_latency(0.0), 0.0);
    }

    #[test]
    fn test_accuracy_scales_to_percent() {
        assert_eq!(display_accuracy(0.9), 90.0);
    }
}
