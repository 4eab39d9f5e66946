//! Contact submission domain: wire payload, validated submission, field rules.

pub mod models;
pub mod validation;

pub use models::{ContactPayload, ContactSubmission, SubmissionError};
pub use validation::is_valid_email;
