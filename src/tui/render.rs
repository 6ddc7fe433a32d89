//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::state::{AppState, PopupState, Tab};
use super::widgets::{
    render_area_panel, render_customer_detail, render_customer_table, render_header,
    render_help, render_quick_add, render_quit_confirm, render_summary,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Main layout: header, summary, content
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Length(1), // Summary
        Constraint::Min(5),    // Content area
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_summary(frame, chunks[1], state);

    match state.current_tab {
        Tab::Customers | Tab::Balances => render_customer_table(frame, chunks[2], state),
        Tab::Areas => render_area_panel(frame, chunks[2], state),
    }

    // Popups are rendered last to overlay the content.
    if matches!(state.popup, PopupState::Help { .. }) {
        if let PopupState::Help { scroll } = &mut state.popup {
            render_help(frame, area, scroll);
        }
    } else if matches!(state.popup, PopupState::CustomerDetail { .. }) {
        render_customer_detail(frame, area, state);
    } else if let PopupState::QuickAdd(form) = &state.popup {
        render_quick_add(frame, area, form);
    } else if state.popup == PopupState::QuitConfirm {
        render_quit_confirm(frame, area);
    }
}
