//! Main TUI application.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::client::{ApiError, CustomerSource};
use crate::util::parse_visit_date;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::{AppState, AreaFetch, PopupState};

/// Main TUI application.
pub struct App {
    source: Arc<dyn CustomerSource + Send + Sync>,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates the app, loading the initial roster from `source`.
    pub fn new(source: Arc<dyn CustomerSource + Send + Sync>) -> Result<Self, ApiError> {
        let records = source.fetch_customers()?;
        let today = Local::now().date_naive();
        let state = AppState::new(records, source.label(), today);
        Ok(Self {
            source,
            state,
            should_quit: false,
        })
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        // Main loop
        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                // Ticks just redraw with a fresh clock
                Ok(Event::Tick) => {}
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::RefreshRoster => self.spawn_roster_fetch(events.sender()),
                    KeyAction::FetchAreas => self.spawn_area_fetch(events.sender()),
                    KeyAction::SubmitQuickAdd => self.submit_quick_add(),
                    KeyAction::None => {}
                },
                Ok(Event::Resize(_)) => {}
                Ok(Event::AreasLoaded(result)) => self.state.apply_area_result(result),
                Ok(Event::RosterLoaded(result)) => self.state.apply_roster_result(result),
                Err(_) => self.should_quit = true,
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Starts a background area fetch. Requests are not de-duplicated; the
    /// latest completion wins.
    fn spawn_area_fetch(&mut self, tx: Sender<Event>) {
        self.state.areas.fetch = AreaFetch::Loading;
        let source = Arc::clone(&self.source);
        thread::spawn(move || {
            let result = source.fetch_customers_by_area();
            let _ = tx.send(Event::AreasLoaded(result));
        });
    }

    /// Starts a background roster refresh.
    fn spawn_roster_fetch(&mut self, tx: Sender<Event>) {
        self.state.refreshing = true;
        let source = Arc::clone(&self.source);
        thread::spawn(move || {
            let result = source.fetch_customers();
            let _ = tx.send(Event::RosterLoaded(result));
        });
    }

    /// Submits the open quick-add form. Parse and request errors land inside
    /// the popup; only success closes it.
    fn submit_quick_add(&mut self) {
        let (customer_id, name, date_input) = match &self.state.popup {
            PopupState::QuickAdd(form) => (
                form.customer_id,
                form.customer_name.clone(),
                form.date_input.clone(),
            ),
            _ => return,
        };

        let date = match parse_visit_date(&date_input, self.state.today) {
            Ok(date) => date,
            Err(e) => {
                self.set_quick_add_error(e.to_string());
                return;
            }
        };

        match self.source.quick_add(customer_id, date) {
            Ok(()) => {
                info!(customer_id, %date, "visit scheduled");
                self.state.status_message = Some(format!("{} added to route for {}", name, date));
                self.state.popup.dismiss();
            }
            Err(e) => self.set_quick_add_error(e.to_string()),
        }
    }

    fn set_quick_add_error(&mut self, message: String) {
        if let PopupState::QuickAdd(form) = &mut self.state.popup {
            form.error = Some(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::DemoSource;
    use crate::model::{AreaGroup, CustomerRecord};
    use crate::tui::state::QuickAddForm;
    use chrono::NaiveDate;

    /// Source whose quick-add always fails.
    struct RejectingSource;

    impl CustomerSource for RejectingSource {
        fn fetch_customers(&self) -> Result<Vec<CustomerRecord>, ApiError> {
            Ok(vec![])
        }

        fn fetch_customers_by_area(&self) -> Result<Vec<AreaGroup>, ApiError> {
            Ok(vec![])
        }

        fn quick_add(&self, _customer_id: i64, _date: NaiveDate) -> Result<(), ApiError> {
            Err(ApiError::Status(500))
        }

        fn label(&self) -> String {
            "rejecting".to_string()
        }
    }

    #[test]
    fn new_loads_the_initial_roster() {
        let app = App::new(Arc::new(DemoSource::new())).unwrap();
        assert!(!app.state.customers.records().is_empty());
        assert_eq!(app.state.source_label, "demo data");
    }

    #[test]
    fn successful_quick_add_closes_the_popup() {
        let mut app = App::new(Arc::new(DemoSource::new())).unwrap();
        app.state.popup = PopupState::QuickAdd(QuickAddForm::new(1, "Maple".to_string()));
        app.submit_quick_add();
        assert!(!app.state.popup.is_open());
        assert!(app.state.status_message.unwrap().contains("Maple"));
    }

    #[test]
    fn unparseable_date_keeps_the_popup_open_with_an_error() {
        let mut app = App::new(Arc::new(DemoSource::new())).unwrap();
        let mut form = QuickAddForm::new(1, "Maple".to_string());
        form.date_input = "whenever".to_string();
        app.state.popup = PopupState::QuickAdd(form);
        app.submit_quick_add();
        match &app.state.popup {
            PopupState::QuickAdd(form) => assert!(form.error.is_some()),
            other => panic!("expected quick-add to stay open, got {:?}", other),
        }
    }

    #[test]
    fn backend_rejection_keeps_the_popup_open_with_an_error() {
        let mut app = App::new(Arc::new(RejectingSource)).unwrap();
        app.state.popup = PopupState::QuickAdd(QuickAddForm::new(1, "Maple".to_string()));
        app.submit_quick_add();
        match &app.state.popup {
            PopupState::QuickAdd(form) => {
                assert!(form.error.as_deref().unwrap().contains("500"));
            }
            other => panic!("expected quick-add to stay open, got {:?}", other),
        }
    }
}
