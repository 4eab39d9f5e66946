//! Wire payload and validated submission types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AppError;

use super::validation::is_valid_email;

/// Raw request body as it arrives on the wire. Fields are optional at parse
/// time; an absent field fails validation the same way an empty one does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// A validated, trimmed submission. Exists only for the duration of one
/// request; it is handed to the notifier and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid email address")]
    InvalidEmail,
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::MissingFields => AppError::missing_fields(),
            SubmissionError::InvalidEmail => AppError::invalid_email(),
        }
    }
}

impl TryFrom<ContactPayload> for ContactSubmission {
    type Error = SubmissionError;

    fn try_from(payload: ContactPayload) -> Result<Self, Self::Error> {
        let name = payload.name.as_deref().unwrap_or("").trim();
        let email = payload.email.as_deref().unwrap_or("").trim();
        let message = payload.message.as_deref().unwrap_or("").trim();

        // Presence of all three fields is checked before the email format,
        // so a request missing everything reports the missing fields first.
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(SubmissionError::MissingFields);
        }

        if !is_valid_email(email) {
            return Err(SubmissionError::InvalidEmail);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, email: &str, message: &str) -> ContactPayload {
        ContactPayload {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn valid_payload_is_trimmed() {
        let submission =
            ContactSubmission::try_from(payload("  Sam ", " sam@example.com ", " Hello "))
                .unwrap();

        assert_eq!(submission.name, "Sam");
        assert_eq!(submission.email, "sam@example.com");
        assert_eq!(submission.message, "Hello");
    }

    #[test]
    fn absent_field_is_missing() {
        let result = ContactSubmission::try_from(ContactPayload {
            name: Some("Sam".to_string()),
            email: Some("sam@example.com".to_string()),
            message: None,
        });

        assert_eq!(result.unwrap_err(), SubmissionError::MissingFields);
    }

    #[test]
    fn whitespace_only_field_is_missing() {
        let result = ContactSubmission::try_from(payload("Sam", "sam@example.com", "   "));
        assert_eq!(result.unwrap_err(), SubmissionError::MissingFields);
    }

    #[test]
    fn missing_fields_reported_before_email_format() {
        let result = ContactSubmission::try_from(payload("", "not-an-email", "hi"));
        assert_eq!(result.unwrap_err(), SubmissionError::MissingFields);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let result = ContactSubmission::try_from(payload("Sam", "not-an-email", "hi"));
        assert_eq!(result.unwrap_err(), SubmissionError::InvalidEmail);
    }
}
