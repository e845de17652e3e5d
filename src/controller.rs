//! RSVP form controller
//!
//! Sits between the on-screen form and the remote endpoint. UI events and
//! async completions (network results, message expiry) are all delivered as
//! [`UiEvent`]s to [`RsvpController::dispatch`]; spawned tasks report back on
//! the controller's event channel, and the event loop feeds them in again.

use crate::endpoint::RsvpEndpoint;
use crate::error::{TransportError, CONNECTIVITY_MESSAGE};
use crate::state::{
    Attendance, FormState, MessageKind, MessagePanel, SubmitAck, Submission, SubmissionOutcome,
    SubmissionPhase,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

/// Events the controller reacts to
#[derive(Debug)]
pub enum UiEvent {
    /// A value was picked in the attendance radio group
    AttendanceChanged(Attendance),
    /// The submit control was activated
    Submit,
    /// The endpoint call for an attempt completed
    SubmissionFinished {
        attempt: Uuid,
        result: Result<SubmitAck, TransportError>,
    },
    /// A message's display time ran out
    MessageExpired { generation: u64 },
}

/// Show the companion section for attending guests, hide it otherwise
pub fn toggle_companion_section(mut form: FormState, attendance: Attendance) -> FormState {
    form.set_companion_section(attendance == Attendance::Yes);
    form
}

/// Classify an endpoint result
pub fn resolve_outcome(result: Result<SubmitAck, TransportError>) -> SubmissionOutcome {
    match result {
        Ok(ack) if ack.success => {
            tracing::info!(attending = ?ack.attending_count, "RSVP accepted");
            SubmissionOutcome::Accepted {
                message: ack.message,
                attending_count: ack.attending_count,
            }
        }
        Ok(ack) => {
            tracing::info!("RSVP declined by server: {}", ack.message);
            SubmissionOutcome::RemoteRejected(ack.message)
        }
        Err(err) => {
            tracing::warn!("RSVP request failed: {err}");
            SubmissionOutcome::Failed
        }
    }
}

/// Text and style shown for an outcome
pub fn outcome_message(outcome: &SubmissionOutcome) -> (MessageKind, String) {
    match outcome {
        SubmissionOutcome::Rejected(err) => (MessageKind::Error, err.to_string()),
        SubmissionOutcome::Accepted {
            message,
            attending_count: Some(count),
        } => (
            MessageKind::Success,
            format!("{message} Total confirmed: {count}")
                .trim_start()
                .to_string(),
        ),
        SubmissionOutcome::Accepted {
            message,
            attending_count: None,
        } => (MessageKind::Success, message.clone()),
        SubmissionOutcome::RemoteRejected(message) => (MessageKind::Error, message.clone()),
        SubmissionOutcome::Failed => (MessageKind::Error, CONNECTIVITY_MESSAGE.to_string()),
    }
}

/// Pending auto-clear of the message panel; scheduling again cancels the previous one
#[derive(Default)]
struct MessageTimer {
    pending: Option<JoinHandle<()>>,
}

impl MessageTimer {
    fn schedule(&mut self, generation: u64, delay: Duration, events: UnboundedSender<UiEvent>) {
        self.cancel();
        let deadline = Instant::now() + delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = events.send(UiEvent::MessageExpired { generation });
        }));
    }

    fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for MessageTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Owns the RSVP form, the message panel and the in-flight attempt
pub struct RsvpController {
    form: FormState,
    message: MessagePanel,
    phase: SubmissionPhase,
    last_outcome: Option<SubmissionOutcome>,
    endpoint: Arc<dyn RsvpEndpoint>,
    events: UnboundedSender<UiEvent>,
    timer: MessageTimer,
    message_timeout: Duration,
}

impl RsvpController {
    pub fn new(
        form: FormState,
        endpoint: Arc<dyn RsvpEndpoint>,
        events: UnboundedSender<UiEvent>,
        message_timeout: Duration,
    ) -> Self {
        Self {
            form,
            message: MessagePanel::default(),
            phase: SubmissionPhase::Idle,
            last_outcome: None,
            endpoint,
            events,
            timer: MessageTimer::default(),
            message_timeout,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Direct edits from the presenter (typing, checkbox toggles)
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn message(&self) -> &MessagePanel {
        &self.message
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn last_outcome(&self) -> Option<&SubmissionOutcome> {
        self.last_outcome.as_ref()
    }

    /// The submit control is disabled while an attempt is in flight
    pub fn is_submit_enabled(&self) -> bool {
        !self.phase.is_sending()
    }

    /// Apply an event. Returns the outcome when this event ended an attempt.
    pub fn dispatch(&mut self, event: UiEvent) -> Option<&SubmissionOutcome> {
        let finished = match event {
            UiEvent::AttendanceChanged(attendance) => {
                self.on_attendance_changed(attendance);
                false
            }
            UiEvent::Submit => self.on_submit(),
            UiEvent::SubmissionFinished { attempt, result } => {
                self.on_submission_finished(attempt, result)
            }
            UiEvent::MessageExpired { generation } => {
                self.on_message_expired(generation);
                false
            }
        };
        if finished {
            self.last_outcome.as_ref()
        } else {
            None
        }
    }

    fn on_attendance_changed(&mut self, attendance: Attendance) {
        let mut form = std::mem::take(&mut self.form);
        form.select_attendance(attendance);
        self.form = toggle_companion_section(form, attendance);
    }

    fn on_submit(&mut self) -> bool {
        if let SubmissionPhase::Sending { attempt } = self.phase {
            tracing::debug!(%attempt, "Submit ignored, previous attempt still in flight");
            return false;
        }

        let submission = match Submission::from_form(&self.form) {
            Ok(submission) => submission,
            Err(err) => {
                tracing::info!("RSVP rejected locally: {err}");
                self.finish(SubmissionOutcome::Rejected(err));
                return true;
            }
        };

        let attempt = Uuid::new_v4();
        tracing::info!(%attempt, attendance = submission.attendance.as_str(), "Sending RSVP");
        self.phase = SubmissionPhase::Sending { attempt };

        let endpoint = Arc::clone(&self.endpoint);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = endpoint.submit(&submission).await;
            let _ = events.send(UiEvent::SubmissionFinished { attempt, result });
        });
        false
    }

    fn on_submission_finished(
        &mut self,
        attempt: Uuid,
        result: Result<SubmitAck, TransportError>,
    ) -> bool {
        match self.phase {
            SubmissionPhase::Sending { attempt: current } if current == attempt => {}
            _ => {
                tracing::debug!(%attempt, "Dropping result of a stale attempt");
                return false;
            }
        }
        self.phase = SubmissionPhase::Idle;

        let outcome = resolve_outcome(result);
        if matches!(outcome, SubmissionOutcome::Accepted { .. }) {
            self.form.reset();
        }
        self.finish(outcome);
        true
    }

    fn on_message_expired(&mut self, generation: u64) {
        if self.message.expire(generation) {
            tracing::debug!(generation, "Message cleared");
        }
    }

    fn finish(&mut self, outcome: SubmissionOutcome) {
        let (kind, text) = outcome_message(&outcome);
        let generation = self.message.show(kind, text);
        self.timer
            .schedule(generation, self.message_timeout, self.events.clone());
        self.last_outcome = Some(outcome);
    }
}
