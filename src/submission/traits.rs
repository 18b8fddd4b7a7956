//! Trait abstraction for the submission endpoint to enable mocking in tests

use crate::state::{RegistrationPayload, SubmissionReceipt};
use anyhow::Result;
use async_trait::async_trait;

/// Receives validated registrations and answers with a receipt
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionClientTrait: Send + Sync {
    /// Submit the form's field values
    async fn submit(&self, payload: RegistrationPayload) -> Result<SubmissionReceipt>;
}
