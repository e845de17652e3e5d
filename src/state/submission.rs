//! RSVP submission payload, local validation and attempt lifecycle

use crate::error::ValidationError;
use crate::state::FormState;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether the guest will attend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    Yes,
    No,
}

impl Attendance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Yes => "Yes, I'll be there",
            Self::No => "Sorry, I can't make it",
        }
    }
}

/// Body of the outbound RSVP request, built fresh for every attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub name: String,
    pub attendance: Attendance,
    pub companion: String,
    pub guest_food: Vec<String>,
    pub guest_drink: Vec<String>,
    pub companion_food: Vec<String>,
    pub companion_drink: Vec<String>,
    pub wishes: String,
}

impl Submission {
    /// Validate the form and build the payload.
    ///
    /// Rules run in order and stop at the first failure: name and attendance
    /// present; guest food and drink chosen when attending; companion food and
    /// drink chosen when attending with a named companion. Fields of the hidden
    /// companion section are left out of a declining guest's payload.
    pub fn from_form(form: &FormState) -> Result<Self, ValidationError> {
        let name = form.name.as_text().trim();
        let attendance = match form.attendance() {
            Some(attendance) if !name.is_empty() => attendance,
            _ => return Err(ValidationError::MissingRequiredFields),
        };
        let wishes = form.wishes.as_text().trim().to_string();

        if attendance == Attendance::No {
            return Ok(Self {
                name: name.to_string(),
                attendance,
                companion: String::new(),
                guest_food: Vec::new(),
                guest_drink: Vec::new(),
                companion_food: Vec::new(),
                companion_drink: Vec::new(),
                wishes,
            });
        }

        if !form.guest_food.has_selection() || !form.guest_drink.has_selection() {
            return Err(ValidationError::MissingGuestSelections);
        }

        let companion = form.companion_name().to_string();
        let (companion_food, companion_drink) = if companion.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            if !form.companion_food.has_selection() || !form.companion_drink.has_selection() {
                return Err(ValidationError::MissingCompanionSelections);
            }
            (form.companion_food.selected(), form.companion_drink.selected())
        };

        Ok(Self {
            name: name.to_string(),
            attendance,
            companion,
            guest_food: form.guest_food.selected(),
            guest_drink: form.guest_drink.selected(),
            companion_food,
            companion_drink,
            wishes,
        })
    }
}

/// Endpoint acknowledgment of a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAck {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub attending_count: Option<u32>,
}

/// Where the controller is within a submission attempt.
///
/// `Idle -> Validating -> Rejected | Sending -> Accepted | RemoteRejected | Failed -> Idle`.
/// Validation is synchronous, so only `Sending` is ever observed between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Sending { attempt: Uuid },
}

impl SubmissionPhase {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending { .. })
    }
}

/// Terminal state of the most recent attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Failed local validation; nothing was sent
    Rejected(ValidationError),
    /// Server acknowledged the RSVP
    Accepted {
        message: String,
        attending_count: Option<u32>,
    },
    /// Server declined; message is passed through verbatim
    RemoteRejected(String),
    /// Request did not complete
    Failed,
}
