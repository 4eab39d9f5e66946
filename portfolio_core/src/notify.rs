//! Notification capability behind the submission endpoint.
//!
//! The endpoint never talks to a delivery provider directly; it hands the
//! validated submission to a [`Notifier`]. The default implementation only
//! logs the rendered message, which is all this deployment does today. A real
//! email/queue integration implements the same trait and gets swapped in at
//! state construction without touching validation.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{config::ContactConfig, contact::ContactSubmission, error::Result};

#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<()>;
}

/// The message a delivery provider would send for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub reply_to: String,
}

impl OutboundMessage {
    pub fn render(submission: &ContactSubmission, config: &ContactConfig) -> Self {
        let subject = match &config.subject_prefix {
            Some(prefix) => format!(
                "{} New Contact Form Submission from {}",
                prefix, submission.name
            ),
            None => format!("New Contact Form Submission from {}", submission.name),
        };

        Self {
            recipient: config.recipient.clone(),
            subject,
            body: format!(
                "Name: {}\nEmail: {}\n\nMessage:\n{}",
                submission.name, submission.email, submission.message
            ),
            reply_to: submission.email.clone(),
        }
    }
}

/// Logs the rendered message and nothing else.
#[derive(Debug, Clone)]
pub struct LogNotifier {
    config: ContactConfig,
}

impl LogNotifier {
    pub fn new(config: ContactConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<()> {
        let message = OutboundMessage::render(submission, &self.config);

        tracing::info!(
            recipient = %message.recipient,
            reply_to = %message.reply_to,
            subject = %message.subject,
            "Contact form submission received:\n{}",
            message.body
        );

        Ok(())
    }
}

/// Keeps every delivered submission in memory. Used by tests and by the
/// health counter; nothing here survives a restart.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    recorded: Arc<Mutex<Vec<ContactSubmission>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<ContactSubmission> {
        self.recorded.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.recorded.lock().len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<()> {
        self.recorded.lock().push(submission.clone());
        Ok(())
    }
}

/// Always fails. Lets tests drive the endpoint's delivery-failure path.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct FailingNotifier;

#[cfg(test)]
#[async_trait]
impl Notifier for FailingNotifier {
    async fn deliver(&self, _submission: &ContactSubmission) -> Result<()> {
        Err(crate::error::AppError::Notify(
            "delivery channel unavailable".to_string(),
        ))
    }
}
