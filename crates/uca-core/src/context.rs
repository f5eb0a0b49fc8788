//! Submission Context: per-cycle identity shared across log lines
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct SubmissionContext {
    pub trace_id: String,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionContext {
    pub fn new() -> Self {
        Self {
            trace_id: uuid::Uuid::new_v4().to_string(),
            submitted_at: Utc::now(),
        }
    }
}

impl Default for SubmissionContext {
    fn default() -> Self {
        Self::new()
    }
}
