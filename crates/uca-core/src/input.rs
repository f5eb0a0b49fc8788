//! Input Capture: use-case text and the modal-collected email.
//!
//! Plain mutable cells with no side effects; the only check performed
//! here is non-emptiness, which gates whether submission can begin.
use crate::error::UcaError;

/// The raw use-case description typed by the user.
///
/// Empty is the initial, "no submission possible" state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UseCaseInput(String);

impl UseCaseInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Replace the text wholesale, as an edit event would
    pub fn set(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Email collected once per submission attempt.
///
/// Not validated for RFC-compliance here; format checking, if any,
/// belongs to the presentation layer. Discarded after the archival write.
#[derive(Debug, Clone)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(email: impl Into<String>) -> Result<Self, UcaError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UcaError::InputIncomplete("email is empty".to_string()));
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
