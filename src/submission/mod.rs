//! Submission collaborator for the registration form

mod client;
mod traits;

pub use client::SimulatedSubmission;
pub use traits::SubmissionClientTrait;

#[cfg(test)]
pub use traits::MockSubmissionClientTrait;
