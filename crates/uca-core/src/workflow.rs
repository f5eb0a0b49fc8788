//! Submission Workflow: máquina de estados do ciclo de análise
//!
//! Idle → InputReady → AwaitingEmail → Submitting → {Success, Error}.
//! Um único ciclo em voo por vez; o gate serializa as submissões.
use std::sync::Arc;

use crate::context::SubmissionContext;
use crate::error::UcaError;
use crate::gate::SubmissionGate;
use crate::input::{EmailAddress, UseCaseInput};
use crate::ports::{AnalysisBackend, AnalysisCallError, ArchiveStore, ReportValidator};
use crate::report::{AnalysisReport, AnalysisRequest, ArchiveRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum SubmissionPhase {
    Idle,
    InputReady,
    AwaitingEmail,
    Submitting,
    Success,
    Error,
}

/// One transient value per active workflow.
///
/// A validated report replaces the previous one atomically; a failed
/// submission never clears a previously installed report.
#[derive(Debug, Clone)]
pub struct SubmissionState {
    pub phase: SubmissionPhase,
    pub report: Option<AnalysisReport>,
}

impl SubmissionState {
    fn install(&mut self, report: AnalysisReport) {
        self.report = Some(report);
        self.phase = SubmissionPhase::Success;
    }
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            report: None,
        }
    }
}

/// User-visible acknowledgment of the archival side-effect, independent
/// of the report-rendering acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArchiveAck {
    /// Object written; key matches `analysis-<epoch_millis>.json`
    Stored { key: String },
    /// Write attempted and failed; logged, never escalated
    Failed,
    /// No storage configured, or no response body to archive after
    Skipped,
}

/// Terminal result of a successful submission cycle
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub report: AnalysisReport,
    pub archive: ArchiveAck,
}

pub struct Workflow {
    input: UseCaseInput,
    state: SubmissionState,
    gate: SubmissionGate,
    backend: Arc<dyn AnalysisBackend>,
    validator: Arc<dyn ReportValidator>,
    store: Option<Arc<dyn ArchiveStore>>,
}

impl Workflow {
    pub fn new(
        backend: Arc<dyn AnalysisBackend>,
        validator: Arc<dyn ReportValidator>,
        store: Option<Arc<dyn ArchiveStore>>,
    ) -> Self {
        Self {
            input: UseCaseInput::default(),
            state: SubmissionState::default(),
            gate: SubmissionGate::new(),
            backend,
            validator,
            store,
        }
    }

    /// Shared handle to the single-flight guard
    pub fn gate(&self) -> SubmissionGate {
        self.gate.clone()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.state.phase
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.state.report.as_ref()
    }

    pub fn use_case(&self) -> &str {
        self.input.as_str()
    }

    /// Edit event on the use-case text.
    ///
    /// Moves between Idle and InputReady on emptiness; an edit after a
    /// terminal phase re-arms the workflow while the previous report (if
    /// any) stays displayed.
    pub fn set_use_case(&mut self, text: impl Into<String>) {
        self.input.set(text);
        if self.state.phase != SubmissionPhase::Submitting {
            self.state.phase = if self.input.is_empty() {
                SubmissionPhase::Idle
            } else {
                SubmissionPhase::InputReady
            };
        }
    }

    /// The user requests submission, opening the email-collection step.
    pub fn request_submission(&mut self) -> Result<(), UcaError> {
        if self.gate.is_held() || self.state.phase == SubmissionPhase::Submitting {
            return Err(UcaError::GateHeld(
                "submission already in flight".to_string(),
            ));
        }
        if self.input.is_empty() {
            return Err(UcaError::InputIncomplete(
                "use case description is empty".to_string(),
            ));
        }
        self.state.phase = SubmissionPhase::AwaitingEmail;
        Ok(())
    }

    /// Email confirmed: run the full cycle.
    ///
    /// Exactly two suspension points, strictly sequential: the analysis
    /// call, then the archival write. The archival write is attempted iff
    /// a response body was received and deserialized, whether or not it
    /// passed validation; its failure never demotes a Success phase.
    pub async fn submit(&mut self, email: EmailAddress) -> Result<SubmissionOutcome, UcaError> {
        if self.state.phase != SubmissionPhase::AwaitingEmail {
            return Err(UcaError::PhaseError(format!(
                "submit from {:?}, expected AwaitingEmail",
                self.state.phase
            )));
        }
        let _guard = self.gate.try_acquire()?;
        self.state.phase = SubmissionPhase::Submitting;

        let ctx = SubmissionContext::new();
        let request = AnalysisRequest {
            use_case: self.input.as_str().to_string(),
        };
        tracing::info!(trace_id = %ctx.trace_id, "submitting use case for analysis");

        let raw = match self.backend.submit_analysis(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                // No response body ever existed; nothing to archive.
                self.state.phase = SubmissionPhase::Error;
                match &e {
                    AnalysisCallError::Transport(msg) => {
                        tracing::error!(trace_id = %ctx.trace_id, stage = "analysis", %msg, "analysis call failed")
                    }
                    AnalysisCallError::Deserialize(msg) => {
                        tracing::error!(trace_id = %ctx.trace_id, stage = "analysis", %msg, "analysis body unreadable")
                    }
                }
                return Err(e.into());
            }
        };

        // Report installation precedes the archival acknowledgment.
        let validated = self.validator.validate(&raw);
        let result = match validated {
            Ok(report) => {
                self.state.install(report.clone());
                tracing::info!(trace_id = %ctx.trace_id, "report installed");
                Ok(report)
            }
            Err(e) => {
                self.state.phase = SubmissionPhase::Error;
                tracing::error!(trace_id = %ctx.trace_id, stage = "validate", error = %e, "report rejected");
                Err(e)
            }
        };

        // Best-effort, after the analysis call settled with a body.
        let archive = self.archive(&email, &ctx).await;

        match result {
            Ok(report) => Ok(SubmissionOutcome { report, archive }),
            Err(e) => Err(e),
        }
    }

    async fn archive(&self, email: &EmailAddress, ctx: &SubmissionContext) -> ArchiveAck {
        let Some(store) = &self.store else {
            return ArchiveAck::Skipped;
        };
        let key = ArchiveRecord::key_for(ctx.submitted_at);
        let record = ArchiveRecord::new(email.as_str(), self.input.as_str());
        let body = match serde_json::to_vec(&record) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(trace_id = %ctx.trace_id, stage = "archive", error = %e, "archive record not serializable");
                return ArchiveAck::Failed;
            }
        };
        match store.put(&key, body, "application/json").await {
            Ok(()) => {
                tracing::info!(trace_id = %ctx.trace_id, %key, "submission archived");
                ArchiveAck::Stored { key }
            }
            Err(e) => {
                // Swallowed at this layer; never alters the analysis phase.
                tracing::warn!(trace_id = %ctx.trace_id, stage = "archive", error = %e, "archival write failed");
                ArchiveAck::Failed
            }
        }
    }
}
