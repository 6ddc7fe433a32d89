//! Summary bar with roster totals.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::util::money::format_cents;
use crate::view::stats::roster_stats;

/// Renders the one-line roster summary.
pub fn render_summary(frame: &mut Frame, area: Rect, state: &AppState) {
    let stats = roster_stats(state.customers.records());

    let mut spans = vec![
        Span::styled(" customers ", Styles::dim()),
        Span::raw(stats.total_customers.to_string()),
        Span::styled("  owing ", Styles::dim()),
        Span::raw(stats.customers_owing.to_string()),
        Span::styled("  total owed ", Styles::dim()),
        Span::raw(format_cents(stats.total_owed_cents)),
        Span::styled("  largest ", Styles::dim()),
        Span::raw(format_cents(stats.largest_balance_cents)),
    ];
    if state.refreshing {
        spans.push(Span::styled("  refreshing...", Styles::dim()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
