//! Trait abstraction for the RSVP endpoint to enable mocking in tests

use crate::error::TransportError;
use crate::state::{AttendanceStats, SubmitAck, Submission};
use async_trait::async_trait;

/// Remote RSVP endpoint operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RsvpEndpoint: Send + Sync {
    /// Send a validated submission; `Ok` means the endpoint answered, whatever it decided
    async fn submit(&self, submission: &Submission) -> Result<SubmitAck, TransportError>;

    /// Current attendance totals
    async fn fetch_stats(&self) -> Result<AttendanceStats, TransportError>;
}
