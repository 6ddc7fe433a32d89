//! Header widget showing time, tabs, and search/status.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode, Tab};
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(22), // Time
        Constraint::Min(20),    // Tabs
        Constraint::Length(44), // Search input / status / source
    ])
    .split(area);

    // Time
    let time_str = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let time = Paragraph::new(time_str).style(Styles::header());
    frame.render_widget(time, chunks[0]);

    // Tabs
    let tabs: Vec<Span> = Tab::all()
        .iter()
        .enumerate()
        .flat_map(|(i, tab)| {
            let style = if *tab == state.current_tab {
                Styles::tab_active()
            } else {
                Styles::tab_inactive()
            };
            let num = format!(" {}:", i + 1);
            let name = format!("{} ", tab.name());
            vec![Span::styled(num, Styles::dim()), Span::styled(name, style)]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(tabs)).style(Styles::header()),
        chunks[1],
    );

    // Right side: live search input beats status beats source label
    let right = if state.input_mode == InputMode::Search {
        Paragraph::new(Line::from(vec![
            Span::styled("search: ", Styles::dim()),
            Span::styled(format!("{}_", state.search_input), Styles::search_input()),
        ]))
    } else if let Some(msg) = &state.status_message {
        Paragraph::new(Span::styled(msg.clone(), Styles::help_key()))
    } else {
        Paragraph::new(Span::styled(state.source_label.clone(), Styles::dim()))
    };
    frame.render_widget(right.style(Styles::header()), chunks[2]);
}
