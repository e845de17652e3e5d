//! Error types shared by the RSVP controller, endpoint client and venues

use thiserror::Error;

/// Fixed message shown when the endpoint could not be reached
pub const CONNECTIVITY_MESSAGE: &str = "Could not reach the server. Please try again later.";

/// Local validation failures; these never reach the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the required fields.")]
    MissingRequiredFields,
    #[error("Please choose food and drinks for yourself.")]
    MissingGuestSelections,
    #[error("Please choose food and drinks for your companion.")]
    MissingCompanionSelections,
}

/// The request to the endpoint did not complete with a usable response
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("undecodable response: {0}")]
    Decode(String),
}

/// The map provider cannot be used; venues fall back to static cards
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapUnavailable {
    #[error("map provider is not configured")]
    NotConfigured,
    #[error("map provider failed for {venue}: {reason}")]
    EmbedFailed { venue: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_distinct() {
        let messages = [
            ValidationError::MissingRequiredFields.to_string(),
            ValidationError::MissingGuestSelections.to_string(),
            ValidationError::MissingCompanionSelections.to_string(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert!(messages[1].contains("yourself"));
        assert!(messages[2].contains("companion"));
    }

    #[test]
    fn test_transport_status_display() {
        assert_eq!(
            TransportError::Status(503).to_string(),
            "unexpected HTTP status 503"
        );
    }

    #[test]
    fn test_map_unavailable_display() {
        let err = MapUnavailable::EmbedFailed {
            venue: "ceremony".to_string(),
            reason: "timeout".to_string(),
        };
        assert_eq!(err.to_string(), "map provider failed for ceremony: timeout");
    }
}
