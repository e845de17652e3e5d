//! Application state and core logic

use crate::config::RsvpConfig;
use crate::controller::{RsvpController, UiEvent};
use crate::endpoint::{HttpRsvpClient, RsvpEndpoint};
use crate::error::TransportError;
use crate::state::{
    AppState, AttendanceStats, Form, FormState, Page, StatsStatus, SubmissionOutcome,
};
use crate::venues::{default_venues, init_venue_widgets, MapProvider, StaticMapProvider};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

type StatsResult = Result<AttendanceStats, TransportError>;

/// Main application struct
pub struct App {
    /// Page navigation, stats and venue widgets
    pub state: AppState,
    /// RSVP form controller
    pub controller: RsvpController,
    endpoint: Arc<dyn RsvpEndpoint>,
    ui_events: UnboundedReceiver<UiEvent>,
    stats_tx: UnboundedSender<StatsResult>,
    stats_rx: UnboundedReceiver<StatsResult>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured endpoint
    pub fn new(config: &RsvpConfig) -> Result<Self> {
        let endpoint = HttpRsvpClient::new(config.endpoint_url(), config.request_timeout())?;
        tracing::info!("Using RSVP endpoint {}", endpoint.base_url());
        let maps = StaticMapProvider::new(config.map_api_key.clone());
        Ok(Self::with_endpoint(config, Arc::new(endpoint), &maps))
    }

    pub fn with_endpoint(
        config: &RsvpConfig,
        endpoint: Arc<dyn RsvpEndpoint>,
        maps: &dyn MapProvider,
    ) -> Self {
        let (events_tx, ui_events) = mpsc::unbounded_channel();
        let (stats_tx, stats_rx) = mpsc::unbounded_channel();

        let state = AppState {
            venue_widgets: init_venue_widgets(maps, &default_venues()),
            ..AppState::default()
        };

        let controller = RsvpController::new(
            FormState::new(&config.menu()),
            Arc::clone(&endpoint),
            events_tx,
            config.message_timeout(),
        );

        Self {
            state,
            controller,
            endpoint,
            ui_events,
            stats_tx,
            stats_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Fetch attendance totals in the background
    pub fn refresh_stats(&self) {
        let endpoint = Arc::clone(&self.endpoint);
        let tx = self.stats_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(endpoint.fetch_stats().await);
        });
    }

    /// Apply every completed background event. Returns true if anything changed.
    pub fn drain_events(&mut self) -> bool {
        let mut changed = false;

        while let Ok(event) = self.ui_events.try_recv() {
            let accepted = matches!(
                self.controller.dispatch(event),
                Some(SubmissionOutcome::Accepted { .. })
            );
            if accepted {
                self.refresh_stats();
            }
            changed = true;
        }

        while let Ok(result) = self.stats_rx.try_recv() {
            self.state.stats = match result {
                Ok(stats) => StatsStatus::Loaded(stats),
                Err(err) => {
                    tracing::warn!("Failed to load attendance stats: {err}");
                    StatsStatus::Unavailable
                }
            };
            changed = true;
        }

        changed
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        if let KeyCode::F(n) = key.code {
            if let Some(page) = Page::from_number(u32::from(n)) {
                self.state.navigate(page);
            }
            return;
        }

        match self.state.current_page {
            Page::Home | Page::Venues => self.handle_page_key(key),
            Page::Rsvp => self.handle_form_key(key),
        }
    }

    /// Bracketed paste appends to the focused text field of the RSVP form
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.current_page != Page::Rsvp {
            return;
        }
        let Some(field) = self.controller.form_mut().get_active_field_mut() else {
            return;
        };
        if !field.is_text() {
            return;
        }

        let pasted = if field.is_multiline {
            text.replace("\r\n", "\n")
        } else {
            text.lines().collect::<Vec<_>>().join(" ")
        };
        let mut value = field.as_text().to_string();
        value.push_str(&pasted);
        field.set_text(value);
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char(c) => {
                if let Some(page) = c.to_digit(10).and_then(Page::from_number) {
                    self.state.navigate(page);
                }
            }
            KeyCode::Tab => {
                let next = self.state.current_page.number() % Page::ALL.len() as u32 + 1;
                if let Some(page) = Page::from_number(next) {
                    self.state.navigate(page);
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('s') {
            self.controller.dispatch(UiEvent::Submit);
            return;
        }

        let form = self.controller.form_mut();
        match key.code {
            KeyCode::Esc => {
                self.state.navigate(Page::Home);
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter => {
                if form.is_submit_row_active() {
                    self.controller.dispatch(UiEvent::Submit);
                } else if let Some(field) = form.get_active_field_mut() {
                    if field.is_multiline {
                        field.push_char('\n');
                    } else {
                        form.next_field();
                    }
                }
            }
            KeyCode::Left | KeyCode::Right => {
                if let Some(group) = form.get_active_field_mut().and_then(|f| f.choices_mut()) {
                    if key.code == KeyCode::Left {
                        group.prev_option();
                    } else {
                        group.next_option();
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c) if !ctrl => self.form_input_char(c),
            _ => {}
        }
    }

    /// Typed character: text fields take it, choice fields toggle on space
    fn form_input_char(&mut self, c: char) {
        let form = self.controller.form_mut();
        let attendance_active = form.is_attendance_active();
        let Some(field) = form.get_active_field_mut() else {
            return;
        };

        if field.is_text() {
            field.push_char(c);
            return;
        }

        if c != ' ' {
            return;
        }
        if let Some(group) = field.choices_mut() {
            group.toggle_at_cursor();
        }
        if attendance_active {
            if let Some(attendance) = form.attendance() {
                self.controller
                    .dispatch(UiEvent::AttendanceChanged(attendance));
            }
        }
    }
}
