//! Response message panel

/// How a message is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// A message currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedMessage {
    pub kind: MessageKind,
    pub text: String,
    /// Identifies this showing; expiry events for older showings are ignored
    pub generation: u64,
}

/// The single message slot under the RSVP form
#[derive(Debug, Clone, Default)]
pub struct MessagePanel {
    current: Option<DisplayedMessage>,
    generation: u64,
}

impl MessagePanel {
    /// Replace whatever is shown and return the new generation
    pub fn show(&mut self, kind: MessageKind, text: impl Into<String>) -> u64 {
        self.generation += 1;
        self.current = Some(DisplayedMessage {
            kind,
            text: text.into(),
            generation: self.generation,
        });
        self.generation
    }

    /// Hide the message if it is still the given showing; returns whether it was hidden
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(message) if message.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<&DisplayedMessage> {
        self.current.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|m| m.text.as_str())
    }

    pub fn kind(&self) -> Option<MessageKind> {
        self.current.as_ref().map(|m| m.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let panel = MessagePanel::default();
        assert!(panel.current().is_none());
        assert!(panel.text().is_none());
    }

    #[test]
    fn test_show_replaces_and_bumps_generation() {
        let mut panel = MessagePanel::default();
        let first = panel.show(MessageKind::Error, "first");
        let second = panel.show(MessageKind::Success, "second");
        assert!(second > first);
        assert_eq!(panel.text(), Some("second"));
        assert_eq!(panel.kind(), Some(MessageKind::Success));
    }

    #[test]
    fn test_expire_matching_generation() {
        let mut panel = MessagePanel::default();
        let generation = panel.show(MessageKind::Error, "oops");
        assert!(panel.expire(generation));
        assert!(panel.current().is_none());
    }

    #[test]
    fn test_stale_expiry_keeps_newer_message() {
        let mut panel = MessagePanel::default();
        let stale = panel.show(MessageKind::Error, "old");
        panel.show(MessageKind::Success, "new");
        assert!(!panel.expire(stale));
        assert_eq!(panel.text(), Some("new"));
    }

    #[test]
    fn test_expire_when_empty() {
        let mut panel = MessagePanel::default();
        assert!(!panel.expire(1));
    }
}
