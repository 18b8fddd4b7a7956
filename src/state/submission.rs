//! Submission lifecycle types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Where the form is in its submit flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    /// Waiting on the submission collaborator; the submit control stays disabled
    Submitting,
    /// Success panel shown until the form is reset
    Submitted,
}

/// Field values handed to the submission collaborator
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub country: String,
    pub experience_years: u32,
}

impl fmt::Debug for RegistrationPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationPayload")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .field("country", &self.country)
            .field("experience_years", &self.experience_years)
            .finish()
    }
}

/// Confirmation returned by a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub confirmation_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new() -> Self {
        Self {
            confirmation_id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}
