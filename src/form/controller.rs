//! Form controller — validation, single-flight submission, outcome state.
//!
//! DESIGN
//! ======
//! One controller per form instance. Status is an explicit state machine:
//!
//! ```text
//! Idle -> Submitting -> Succeeded(id) | Failed(msg) -> (reset/resubmit) -> ...
//! ```
//!
//! The status mutex is only held to check-and-set, never across the await on
//! the account service, so a second submit while one is pending sees
//! `Submitting` and is rejected instead of queued.
//!
//! `begin` hands out an `InFlightGuard`. If the submit future is dropped
//! before the service answers, the guard moves the form to `Failed` with the
//! generic message so it never stays stuck in `Submitting`.
//!
//! ERROR HANDLING
//! ==============
//! Backend errors are logged with full detail and replaced by
//! [`GENERIC_SUBMIT_ERROR`] before they reach the caller.

use std::sync::{Arc, Mutex, PoisonError};

use super::mode::FormMode;
use super::validate::{FormValues, ValidationError, validate};
use crate::services::account::{AccountId, AccountService};

pub const GENERIC_SUBMIT_ERROR: &str = "Failed to create account. Please try again.";

// =============================================================================
// STATE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Succeeded(AccountId),
    Failed(String),
}

/// Snapshot of the submission lifecycle for the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub account_id: Option<AccountId>,
}

impl From<&FormStatus> for SubmissionState {
    fn from(status: &FormStatus) -> Self {
        match status {
            FormStatus::Idle => Self::default(),
            FormStatus::Submitting => Self { is_loading: true, ..Self::default() },
            FormStatus::Succeeded(id) => Self { account_id: Some(id.clone()), ..Self::default() },
            FormStatus::Failed(msg) => Self { error_message: Some(msg.clone()), ..Self::default() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Local validation failed; the account service was not called.
    #[error("invalid form input: {0}")]
    Invalid(ValidationError),

    /// A submission is already in flight on this form.
    #[error("a submission is already in progress")]
    InFlight,

    /// The account service call failed. `message` is safe to show.
    #[error("{message}")]
    Failed { message: String },
}

// =============================================================================
// CONTROLLER
// =============================================================================

pub struct FormController {
    mode: FormMode,
    service: Arc<dyn AccountService>,
    status: Mutex<FormStatus>,
}

impl FormController {
    #[must_use]
    pub fn new(mode: FormMode, service: Arc<dyn AccountService>) -> Self {
        Self { mode, service, status: Mutex::new(FormStatus::Idle) }
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.lock_status().clone()
    }

    #[must_use]
    pub fn state(&self) -> SubmissionState {
        SubmissionState::from(&*self.lock_status())
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        *self.lock_status() == FormStatus::Submitting
    }

    /// Return to `Idle` after the user edits the form. No effect while submitting.
    pub fn reset(&self) {
        let mut status = self.lock_status();
        if *status != FormStatus::Submitting {
            *status = FormStatus::Idle;
        }
    }

    /// Validate and dispatch one submission.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Invalid`] if local validation fails (no state change)
    /// - [`SubmitError::InFlight`] if another submission is pending
    /// - [`SubmitError::Failed`] with the generic message if the account service fails
    pub async fn submit(&self, values: &FormValues) -> Result<AccountId, SubmitError> {
        let values = validate(values, self.mode).map_err(SubmitError::Invalid)?;
        let in_flight = self.begin()?;

        tracing::debug!(mode = %self.mode, email = %values.email, "submitting auth form");
        let result = match self.mode {
            FormMode::SignUp => {
                self.service
                    .create_account(values.full_name_or_empty(), &values.email)
                    .await
            }
            FormMode::SignIn => self.service.sign_in_user(&values.email).await,
        };

        match result {
            Ok(account_id) => {
                tracing::info!(mode = %self.mode, account_id = %account_id, "auth form submitted");
                in_flight.finish(FormStatus::Succeeded(account_id.clone()));
                Ok(account_id)
            }
            Err(e) => {
                tracing::warn!(mode = %self.mode, error = %e, "auth form submission failed");
                in_flight.finish(FormStatus::Failed(GENERIC_SUBMIT_ERROR.to_owned()));
                Err(SubmitError::Failed { message: GENERIC_SUBMIT_ERROR.to_owned() })
            }
        }
    }

    fn begin(&self) -> Result<InFlightGuard<'_>, SubmitError> {
        let mut status = self.lock_status();
        if *status == FormStatus::Submitting {
            tracing::debug!(mode = %self.mode, "submit ignored: already in flight");
            return Err(SubmitError::InFlight);
        }
        *status = FormStatus::Submitting;
        Ok(InFlightGuard { status: &self.status, armed: true })
    }

    fn lock_status(&self) -> std::sync::MutexGuard<'_, FormStatus> {
        self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// IN-FLIGHT GUARD
// =============================================================================

/// Owns the `Submitting` state of one submission.
struct InFlightGuard<'a> {
    status: &'a Mutex<FormStatus>,
    armed: bool,
}

impl InFlightGuard<'_> {
    fn finish(mut self, outcome: FormStatus) {
        self.armed = false;
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = outcome;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut status = self.status.lock().unwrap_or_else(PoisonError::into_inner);
        if *status == FormStatus::Submitting {
            tracing::warn!("auth form submission dropped before completion");
            *status = FormStatus::Failed(GENERIC_SUBMIT_ERROR.to_owned());
        }
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
