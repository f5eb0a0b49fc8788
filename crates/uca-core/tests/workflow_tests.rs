//! Integration tests for the submission workflow against mock ports.
//!
//! The external analyzer and the object store are replaced by scripted
//! doubles so the ordering and gating contracts can be observed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Notify;

use uca_core::{
    AnalysisBackend, AnalysisCallError, AnalysisReport, AnalysisRequest, ArchiveAck, ArchiveStore,
    EmailAddress, ReportValidator, SubmissionPhase, UcaError, Workflow,
};

/// Scripted analyzer double; optionally parks until released so a test
/// can observe the in-flight window.
struct MockBackend {
    response: Result<Value, AnalysisCallError>,
    calls: AtomicUsize,
    hold: Option<Arc<Notify>>,
}

impl MockBackend {
    fn returning(response: Result<Value, AnalysisCallError>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            hold: None,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisBackend for MockBackend {
    async fn submit_analysis(
        &self,
        _request: &AnalysisRequest,
    ) -> Result<Value, AnalysisCallError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(hold) = &self.hold {
            hold.notified().await;
        }
        self.response.clone()
    }
}

/// Structural validation via serde; range checks are covered by the real
/// validator's own tests.
struct SerdeValidator;

impl ReportValidator for SerdeValidator {
    fn validate(&self, raw: &Value) -> Result<AnalysisReport, UcaError> {
        serde_json::from_value(raw.clone()).map_err(|e| UcaError::ValidationError(e.to_string()))
    }
}

struct MockStore {
    fail: bool,
    keys: Mutex<Vec<String>>,
}

impl MockStore {
    fn new(fail: bool) -> Self {
        Self {
            fail,
            keys: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ArchiveStore for MockStore {
    async fn put(&self, key: &str, _body: Vec<u8>, content_type: &str) -> Result<(), UcaError> {
        assert_eq!(content_type, "application/json");
        if self.fail {
            return Err(UcaError::ArchivalFailure("bucket unavailable".to_string()));
        }
        self.keys.lock().unwrap().push(key.to_string());
        Ok(())
    }
}

fn valid_report_body() -> Value {
    json!({
        "classification": {
            "primary_category": "Conversational AI",
            "task_type": "text-generation",
            "complexity_level": "medium"
        },
        "recommended_models": [{
            "model_name": "gpt-4",
            "confidence_score": 0.92,
            "reasons": ["dialogue quality", "tool support"]
        }],
        "infrastructure_requirements": {},
        "pricing_estimates": {
            "hourly_cost": 1.2,
            "monthly_estimated_cost": 870.0,
            "aws_instance_type": "g5.xlarge",
            "notes": ["reserved pricing available"]
        },
        "risk_assessment": [{
            "risk": "hallucination",
            "impact": "medium",
            "mitigation": "retrieval grounding"
        }]
    })
}

fn workflow_with(
    backend: Arc<MockBackend>,
    store: Option<Arc<MockStore>>,
) -> Workflow {
    Workflow::new(
        backend,
        Arc::new(SerdeValidator),
        store.map(|s| s as Arc<dyn ArchiveStore>),
    )
}

#[tokio::test]
async fn successful_cycle_installs_report_and_archives() {
    let backend = Arc::new(MockBackend::returning(Ok(valid_report_body())));
    let store = Arc::new(MockStore::new(false));
    let mut wf = workflow_with(backend.clone(), Some(store.clone()));

    wf.set_use_case("AI-based customer support chatbot hosted in Cloud");
    assert_eq!(wf.phase(), SubmissionPhase::InputReady);
    wf.request_submission().unwrap();
    assert_eq!(wf.phase(), SubmissionPhase::AwaitingEmail);

    let outcome = wf
        .submit(EmailAddress::new("user@example.com").unwrap())
        .await
        .unwrap();

    assert_eq!(wf.phase(), SubmissionPhase::Success);
    assert_eq!(outcome.report.recommended_models.len(), 1);
    assert!(matches!(outcome.archive, ArchiveAck::Stored { .. }));
    assert_eq!(backend.calls(), 1);
    assert!(!wf.gate().is_held());

    let keys = store.keys.lock().unwrap();
    assert_eq!(keys.len(), 1);
    // Key shape: analysis-<epoch_millis>.json
    let stem = keys[0]
        .strip_prefix("analysis-")
        .and_then(|s| s.strip_suffix(".json"))
        .expect("key shape");
    assert!(stem.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn empty_input_cannot_begin_submission() {
    let backend = Arc::new(MockBackend::returning(Ok(valid_report_body())));
    let mut wf = workflow_with(backend.clone(), None);

    assert_eq!(wf.phase(), SubmissionPhase::Idle);
    assert!(matches!(
        wf.request_submission(),
        Err(UcaError::InputIncomplete(_))
    ));
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn gate_admits_exactly_one_submission_in_flight() {
    let hold = Arc::new(Notify::new());
    let backend = Arc::new(MockBackend {
        response: Ok(valid_report_body()),
        calls: AtomicUsize::new(0),
        hold: Some(hold.clone()),
    });
    let mut wf = workflow_with(backend.clone(), None);
    wf.set_use_case("fraud detection pipeline");
    wf.request_submission().unwrap();
    let gate = wf.gate();

    let task = tokio::spawn(async move {
        let _ = wf.submit(EmailAddress::new("user@example.com").unwrap()).await;
        wf
    });

    // Wait until the call is actually in flight
    while backend.calls() == 0 {
        tokio::task::yield_now().await;
    }
    assert!(gate.is_held());
    // Rapid re-triggers while Submitting never reach the backend
    for _ in 0..8 {
        assert!(gate.try_acquire().is_err());
    }
    hold.notify_one();
    let wf = task.await.unwrap();

    assert_eq!(backend.calls(), 1);
    assert_eq!(wf.phase(), SubmissionPhase::Success);
    assert!(!gate.is_held());
}

#[tokio::test]
async fn archival_failure_leaves_success_phase() {
    let backend = Arc::new(MockBackend::returning(Ok(valid_report_body())));
    let store = Arc::new(MockStore::new(true));
    let mut wf = workflow_with(backend, Some(store));
    wf.set_use_case("document summarizer");
    wf.request_submission().unwrap();

    let outcome = wf
        .submit(EmailAddress::new("user@example.com").unwrap())
        .await
        .unwrap();

    assert_eq!(wf.phase(), SubmissionPhase::Success);
    assert!(wf.report().is_some());
    assert_eq!(outcome.archive, ArchiveAck::Failed);
}

#[tokio::test]
async fn malformed_payload_errors_without_partial_report() {
    let mut body = valid_report_body();
    body["classification"]
        .as_object_mut()
        .unwrap()
        .remove("task_type");
    let backend = Arc::new(MockBackend::returning(Ok(body)));
    let store = Arc::new(MockStore::new(false));
    let mut wf = workflow_with(backend, Some(store.clone()));
    wf.set_use_case("recommendation engine");
    wf.request_submission().unwrap();

    let err = wf
        .submit(EmailAddress::new("user@example.com").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, UcaError::ValidationError(_)));
    assert_eq!(wf.phase(), SubmissionPhase::Error);
    assert!(wf.report().is_none());
    // A response body existed, so the archival write still fired
    assert_eq!(store.keys.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn transport_failure_skips_archival_and_keeps_prior_report() {
    // First cycle succeeds and installs a report
    let backend = Arc::new(MockBackend::returning(Ok(valid_report_body())));
    let store = Arc::new(MockStore::new(false));
    let mut wf = workflow_with(backend, Some(store.clone()));
    wf.set_use_case("support chatbot");
    wf.request_submission().unwrap();
    wf.submit(EmailAddress::new("user@example.com").unwrap())
        .await
        .unwrap();
    let installed = wf.report().cloned();
    assert!(installed.is_some());

    // Second cycle fails at the transport; the prior report stays
    let failing = Arc::new(MockBackend::returning(Err(AnalysisCallError::Transport(
        "connection refused".to_string(),
    ))));
    let mut wf2 = workflow_with(failing, Some(store.clone()));
    wf2.set_use_case("support chatbot v2");
    wf2.request_submission().unwrap();
    let err = wf2
        .submit(EmailAddress::new("user@example.com").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, UcaError::AnalysisFailure(_)));
    assert_eq!(wf2.phase(), SubmissionPhase::Error);
    assert_eq!(wf.report().cloned(), installed);
    // No response body was ever received, so nothing new was archived
    assert_eq!(store.keys.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn unreadable_body_is_a_deserialization_failure() {
    let backend = Arc::new(MockBackend::returning(Err(
        AnalysisCallError::Deserialize("expected value at line 1".to_string()),
    )));
    let mut wf = workflow_with(backend, None);
    wf.set_use_case("forecasting");
    wf.request_submission().unwrap();

    let err = wf
        .submit(EmailAddress::new("user@example.com").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, UcaError::DeserializationFailure(_)));
    assert_eq!(wf.phase(), SubmissionPhase::Error);
}

#[tokio::test]
async fn new_submission_replaces_the_old_report() {
    let backend = Arc::new(MockBackend::returning(Ok(valid_report_body())));
    let mut wf = workflow_with(backend, None);
    wf.set_use_case("first use case");
    wf.request_submission().unwrap();
    wf.submit(EmailAddress::new("a@example.com").unwrap())
        .await
        .unwrap();

    let mut second = valid_report_body();
    second["classification"]["primary_category"] = serde_json::json!("Vision");
    let backend2 = Arc::new(MockBackend::returning(Ok(second)));
    let mut wf = workflow_with(backend2, None);
    wf.set_use_case("second use case");
    wf.request_submission().unwrap();
    wf.submit(EmailAddress::new("b@example.com").unwrap())
        .await
        .unwrap();

    assert_eq!(
        wf.report().unwrap().classification.primary_category,
        "Vision"
    );
}

#[tokio::test]
async fn submit_requires_the_email_step() {
    let backend = Arc::new(MockBackend::returning(Ok(valid_report_body())));
    let mut wf = workflow_with(backend, None);
    wf.set_use_case("ocr pipeline");

    let err = wf
        .submit(EmailAddress::new("user@example.com").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, UcaError::PhaseError(_)));
}
