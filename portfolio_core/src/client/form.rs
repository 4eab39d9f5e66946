//! Contact form controller.
//!
//! Owns the three field values, a per-field error map, the in-progress flag
//! and the tri-state submit status. Validation messages and the submission
//! flow mirror the form on the site: errors clear eagerly on edit, a failed
//! validation never reaches the network, and a terminal status reverts to
//! idle after a delay. The revert timer is a resource owned by the
//! controller: superseded timers are aborted, and dropping the controller
//! cancels an outstanding one.

use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::contact::{
    validation::{is_valid_email, validate_required},
    ContactPayload,
};

pub const DEFAULT_STATUS_REVERT_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

#[derive(Debug, Default)]
struct FormState {
    name: String,
    email: String,
    message: String,
    errors: FieldErrors,
    submitting: bool,
    status: SubmitStatus,
}

pub struct ContactForm {
    state: Arc<Mutex<FormState>>,
    http: reqwest::Client,
    endpoint: String,
    revert_delay: Duration,
    revert_task: Mutex<Option<JoinHandle<()>>>,
}

impl ContactForm {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::default())),
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            revert_delay: DEFAULT_STATUS_REVERT_DELAY,
            revert_task: Mutex::new(None),
        }
    }

    pub fn with_revert_delay(mut self, delay: Duration) -> Self {
        self.revert_delay = delay;
        self
    }

    /// Stores the raw value for one field. Displayed values stay untrimmed;
    /// a previously recorded error for that field is cleared without
    /// re-validating.
    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let mut state = self.state.lock();
        let value = value.into();

        match field {
            Field::Name => {
                state.name = value;
                state.errors.name = None;
            }
            Field::Email => {
                state.email = value;
                state.errors.email = None;
            }
            Field::Message => {
                state.message = value;
                state.errors.message = None;
            }
        }
    }

    pub fn field(&self, field: Field) -> String {
        let state = self.state.lock();
        match field {
            Field::Name => state.name.clone(),
            Field::Email => state.email.clone(),
            Field::Message => state.message.clone(),
        }
    }

    pub fn errors(&self) -> FieldErrors {
        self.state.lock().errors.clone()
    }

    pub fn status(&self) -> SubmitStatus {
        self.state.lock().status
    }

    pub fn is_submitting(&self) -> bool {
        self.state.lock().submitting
    }

    /// Checks emptiness against trimmed copies of the fields, the email
    /// pattern against the raw value, and rewrites the whole error map.
    /// Returns overall pass/fail.
    pub fn validate(&self) -> bool {
        let mut state = self.state.lock();
        let mut errors = FieldErrors::default();

        if validate_required(&state.name).is_err() {
            errors.name = Some("Name is required".to_string());
        }

        if state.email.trim().is_empty() {
            errors.email = Some("Email is required".to_string());
        } else if !is_valid_email(&state.email) {
            errors.email = Some("Please enter a valid email".to_string());
        }

        if validate_required(&state.message).is_err() {
            errors.message = Some("Message is required".to_string());
        }

        let valid = errors.is_empty();
        state.errors = errors;
        valid
    }

    /// Submits the form. A failed validation aborts before any network I/O.
    /// On a 2xx response the fields and errors reset and the status becomes
    /// `Success`; on a non-2xx response or transport failure the fields are
    /// preserved and the status becomes `Error`. Either terminal status
    /// reverts to `Idle` after the configured delay.
    pub async fn submit(&self) -> SubmitStatus {
        if !self.validate() {
            return self.status();
        }

        // Raw values go over the wire; the server trims independently.
        let payload = {
            let mut state = self.state.lock();
            state.submitting = true;
            state.status = SubmitStatus::Idle;

            ContactPayload {
                name: Some(state.name.clone()),
                email: Some(state.email.clone()),
                message: Some(state.message.clone()),
            }
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await;

        let outcome = {
            let mut state = self.state.lock();

            match response {
                Ok(resp) if resp.status().is_success() => {
                    state.name.clear();
                    state.email.clear();
                    state.message.clear();
                    state.errors = FieldErrors::default();
                    state.status = SubmitStatus::Success;
                }
                Ok(resp) => {
                    tracing::warn!(status = resp.status().as_u16(), "Contact submission rejected");
                    state.status = SubmitStatus::Error;
                }
                Err(err) => {
                    tracing::warn!("Contact submission failed: {}", err);
                    state.status = SubmitStatus::Error;
                }
            }

            state.submitting = false;
            state.status
        };

        self.schedule_status_revert();
        outcome
    }

    fn schedule_status_revert(&self) {
        let state = Arc::clone(&self.state);
        let delay = self.revert_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.lock().status = SubmitStatus::Idle;
        });

        if let Some(previous) = self.revert_task.lock().replace(handle) {
            previous.abort();
        }
    }
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        if let Some(task) = self.revert_task.lock().take() {
            task.abort();
        }
    }
}
