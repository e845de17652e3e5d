//! Application state definitions

use crate::venues::VenueWidget;
use serde::{Deserialize, Serialize};

/// Page currently shown; exactly one is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Venues,
    Rsvp,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Venues, Page::Rsvp];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Venues => "Venues",
            Self::Rsvp => "RSVP",
        }
    }

    /// Page for a 1-based navigation key
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::Home),
            2 => Some(Self::Venues),
            3 => Some(Self::Rsvp),
            _ => None,
        }
    }

    pub fn number(&self) -> u32 {
        match self {
            Self::Home => 1,
            Self::Venues => 2,
            Self::Rsvp => 3,
        }
    }
}

/// Running totals reported by the endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceStats {
    pub total_guests: u32,
    pub attending_guests: u32,
    pub not_attending_guests: u32,
}

/// What the home page knows about attendance totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsStatus {
    #[default]
    Loading,
    Loaded(AttendanceStats),
    Unavailable,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_page: Page,
    pub stats: StatsStatus,
    pub venue_widgets: Vec<VenueWidget>,
}

impl AppState {
    /// Switch to a page; returns false if it was already active
    pub fn navigate(&mut self, page: Page) -> bool {
        if self.current_page == page {
            return false;
        }
        tracing::debug!("Navigating to {:?}", page);
        self.current_page = page;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_is_home() {
        let state = AppState::default();
        assert_eq!(state.current_page, Page::Home);
        assert_eq!(state.stats, StatsStatus::Loading);
    }

    #[test]
    fn test_navigate_switches_single_page() {
        let mut state = AppState::default();
        assert!(state.navigate(Page::Rsvp));
        assert_eq!(state.current_page, Page::Rsvp);
        assert!(!state.navigate(Page::Rsvp));
    }

    #[test]
    fn test_page_numbers_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_number(page.number()), Some(page));
        }
        assert_eq!(Page::from_number(0), None);
        assert_eq!(Page::from_number(4), None);
    }

    #[test]
    fn test_stats_deserialize() {
        let json = r#"{"total_guests": 10, "attending_guests": 7, "not_attending_guests": 3}"#;
        let stats: AttendanceStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.attending_guests, 7);
        assert_eq!(stats.total_guests, 10);
    }
}
