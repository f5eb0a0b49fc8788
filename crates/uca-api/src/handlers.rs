//! API Handlers
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use uca_core::{ArchiveAck, EmailAddress, UcaError, UCA_VERSION};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub use_case: String,
    pub email: String,
}

/// Drive one full submission cycle: capture → gate → analyze → validate
/// → render, with the best-effort archival acknowledgment alongside.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AnalyzeRequest>,
) -> (StatusCode, Json<Value>) {
    // Read-check before locking; the gate, not the mutex, serializes
    // submissions.
    if state.gate.is_held() {
        return error_response(&UcaError::GateHeld(
            "submission already in flight".to_string(),
        ));
    }

    let email = match EmailAddress::new(payload.email) {
        Ok(email) => email,
        Err(e) => return error_response(&e),
    };

    let mut workflow = state.workflow.lock().await;
    workflow.set_use_case(payload.use_case.as_str());
    if let Err(e) = workflow.request_submission() {
        return error_response(&e);
    }

    state.metrics.submissions_total.inc();
    match workflow.submit(email).await {
        Ok(outcome) => {
            if matches!(outcome.archive, ArchiveAck::Stored { .. }) {
                state.metrics.archives_total.inc();
            }
            (
                StatusCode::OK,
                Json(json!({
                    "phase": workflow.phase(),
                    "report": uca_render::render(&outcome.report),
                    "archive": outcome.archive,
                })),
            )
        }
        Err(e) => {
            state.metrics.submission_failures_total.inc();
            error_response(&e)
        }
    }
}

/// The currently installed report, rendered.
pub async fn report(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    let workflow = state.workflow.lock().await;
    match workflow.report() {
        Some(report) => (
            StatusCode::OK,
            Json(json!({
                "phase": workflow.phase(),
                "report": uca_render::render(report),
            })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "no report installed" })),
        ),
    }
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": UCA_VERSION })),
    )
}

pub async fn metrics(State(state): State<Arc<AppState>>) -> (StatusCode, String) {
    match crate::metrics::encode(&state.metrics.registry) {
        Ok(body) => (StatusCode::OK, body),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

fn error_response(err: &UcaError) -> (StatusCode, Json<Value>) {
    let status = match err {
        UcaError::InputIncomplete(_) => StatusCode::UNPROCESSABLE_ENTITY,
        UcaError::GateHeld(_) | UcaError::PhaseError(_) => StatusCode::CONFLICT,
        UcaError::AnalysisFailure(_)
        | UcaError::DeserializationFailure(_)
        | UcaError::ValidationError(_) => StatusCode::BAD_GATEWAY,
        UcaError::ArchivalFailure(_) | UcaError::ConfigError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(json!({ "error": err.to_string() })))
}
