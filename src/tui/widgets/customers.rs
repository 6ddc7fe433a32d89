//! Customer table widget for the Customers and Balances tabs.
//! Thin TUI wrapper over [`crate::view::customers::build_customer_view`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Row, Table};

use crate::tui::state::{AppState, Tab};
use crate::tui::style::Styles;
use crate::view::customers::build_customer_view;

/// Renders the table behind the current tab.
pub fn render_customer_table(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let today = state.today;
    let (table, cursor) = match state.current_tab {
        Tab::Customers => (&state.customers, &mut state.customers_cursor),
        Tab::Balances => (&state.balances, &mut state.balances_cursor),
        Tab::Areas => return,
    };

    let vm = build_customer_view(table, today);
    cursor.resolve(vm.rows.len());

    let header = Row::new(
        vm.headers
            .iter()
            .map(|h| Span::styled(h.clone(), Styles::table_header())),
    )
    .style(Styles::table_header())
    .height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .enumerate()
        .map(|(idx, vr)| {
            let row_style = if idx == cursor.selected {
                Styles::selected()
            } else {
                Styles::from_class(vr.style)
            };
            let cells = vr.cells.iter().map(|c| match c.style {
                Some(s) => Span::styled(c.text.clone(), Styles::from_class(s)),
                None => Span::raw(c.text.clone()),
            });
            Row::new(cells).style(row_style).height(1)
        })
        .collect();

    // Width 0 marks the column that absorbs remaining space.
    let widths: Vec<Constraint> = vm
        .widths
        .iter()
        .map(|&w| {
            if w == 0 {
                Constraint::Fill(1)
            } else {
                Constraint::Length(w)
            }
        })
        .collect();

    let widget = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(vm.title)
                .borders(Borders::ALL)
                .style(Styles::default()),
        )
        .row_highlight_style(Styles::selected());

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(widget, area, &mut cursor.ratatui_state);
}
