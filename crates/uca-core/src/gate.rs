//! Submission Gate: single-flight guard over submissions.
//!
//! The gate is the sole concurrency guard in the system; it has exactly
//! one writer at a time and must be read-checked before a new submission
//! may enter `Submitting`.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::UcaError;

/// Cloneable handle over the in-flight flag.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGate {
    in_flight: Arc<AtomicBool>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the gate, failing if a submission is already in flight.
    ///
    /// The returned guard clears the flag on drop, so the gate is released
    /// on every terminal transition (Success and Error alike).
    pub fn try_acquire(&self) -> Result<GateGuard, UcaError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| UcaError::GateHeld("submission already in flight".to_string()))?;
        Ok(GateGuard {
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    pub fn is_held(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// RAII guard; dropping it releases the gate.
#[derive(Debug)]
pub struct GateGuard {
    in_flight: Arc<AtomicBool>,
}

impl Drop for GateGuard {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}
