//! Simulated submission endpoint
//!
//! Stands in for a real registration service: waits a fixed delay and
//! accepts every payload.

use super::traits::SubmissionClientTrait;
use crate::state::{RegistrationPayload, SubmissionReceipt};
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated latency
const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Submission client that accepts everything after `delay`
#[derive(Debug, Clone)]
pub struct SimulatedSubmission {
    delay: Duration,
}

impl SimulatedSubmission {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmission {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl SubmissionClientTrait for SimulatedSubmission {
    async fn submit(&self, payload: RegistrationPayload) -> Result<SubmissionReceipt> {
        let body = serde_json::to_vec(&payload)?;
        tracing::debug!(
            "Simulating submission of {} bytes for {}",
            body.len(),
            payload.email
        );
        tokio::time::sleep(self.delay).await;
        Ok(SubmissionReceipt::new())
    }
}
