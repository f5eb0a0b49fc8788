//! UCA-CLIENT: HTTP client for the external classification service.
//!
//! Issues the single outbound call per submission: a POST of
//! `{"use_case": ...}` to the configured `/analyze` endpoint. The body is
//! deserialized as JSON and handed back unvalidated; schema judgment is
//! the validator's job. Connection errors, DNS failures and non-2xx
//! statuses all collapse into one undifferentiated transport failure.

use async_trait::async_trait;
use serde_json::Value;
use uca_core::{AnalysisBackend, AnalysisCallError, AnalysisRequest, AnalyzerConfig};

pub struct HttpAnalysisClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpAnalysisClient {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: analyze_url(&config.analysis_endpoint),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn analyze_url(base: &str) -> String {
    format!("{}/analyze", base.trim_end_matches('/'))
}

#[async_trait]
impl AnalysisBackend for HttpAnalysisClient {
    async fn submit_analysis(
        &self,
        request: &AnalysisRequest,
    ) -> Result<Value, AnalysisCallError> {
        tracing::debug!(endpoint = %self.endpoint, "posting analysis request");
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| AnalysisCallError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisCallError::Transport(format!(
                "analysis endpoint returned {}",
                status
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AnalysisCallError::Transport(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| AnalysisCallError::Deserialize(e.to_string()))
    }
}
