//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod venues;

use crate::app::App;
use crate::state::Page;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (nav_area, main_area) = layout::create_layout(area);

    layout::draw_nav_bar(frame, nav_area, app);

    match app.state.current_page {
        Page::Home => home::draw(frame, main_area, app),
        Page::Venues => venues::draw(frame, main_area, app),
        Page::Rsvp => forms::draw_rsvp_form(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RsvpConfig;
    use crate::endpoint::MockRsvpEndpoint;
    use crate::error::MapUnavailable;
    use crate::venues::MockMapProvider;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app() -> App {
        let mut maps = MockMapProvider::new();
        maps.expect_probe()
            .returning(|| Err(MapUnavailable::NotConfigured));
        App::with_endpoint(
            &RsvpConfig::default(),
            Arc::new(MockRsvpEndpoint::new()),
            &maps,
        )
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn test_every_page_renders() {
        let mut app = app();
        for page in Page::ALL {
            app.state.navigate(page);
            let screen = render(&app);
            assert!(screen.contains(page.label()));
        }
    }

    #[tokio::test]
    async fn test_venues_page_shows_fallback_text() {
        let mut app = app();
        app.state.navigate(Page::Venues);
        let screen = render(&app);
        assert!(screen.contains("Primorskoe shosse 452A"));
        assert!(screen.contains("Starts at 17:00"));
    }

    #[tokio::test]
    async fn test_form_shows_attendance_sentences_and_messages() {
        let mut app = app();
        app.state.navigate(Page::Rsvp);
        let screen = render(&app);
        assert!(screen.contains("Yes, I'll be there"));
        assert!(screen.contains("Sorry, I can't make it"));

        app.controller.dispatch(crate::controller::UiEvent::Submit);
        let expected = crate::error::ValidationError::MissingRequiredFields.to_string();
        assert!(render(&app).contains(&expected));
    }

    #[tokio::test]
    async fn test_companion_section_hidden_until_yes() {
        let mut app = app();
        app.state.navigate(Page::Rsvp);
        assert!(!render(&app).contains("Companion name"));

        app.controller
            .dispatch(crate::controller::UiEvent::AttendanceChanged(
                crate::state::Attendance::Yes,
            ));
        assert!(render(&app).contains("Companion name"));
    }
}
