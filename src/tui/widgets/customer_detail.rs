//! Customer detail popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::state::{AppState, PopupState};
use crate::tui::style::Styles;
use crate::util::money::format_cents;
use crate::view::customers::severity_class;
use crate::view::table::balance_severity;

use super::centered_rect;

/// Renders the customer detail popup, if open.
pub fn render_customer_detail(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let (customer_id, scroll) = match &state.popup {
        PopupState::CustomerDetail {
            customer_id,
            scroll,
        } => (*customer_id, *scroll),
        _ => return,
    };

    let popup_area = centered_rect(area, 60, 60);
    frame.render_widget(Clear, popup_area);

    let Some(record) = state.record_by_id(customer_id).cloned() else {
        let block = Block::default()
            .title(" Customer ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let paragraph = Paragraph::new("Customer is no longer in the roster").block(block);
        frame.render_widget(paragraph, popup_area);
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", record.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let field = |label: &str, value: Option<&str>| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), Styles::dim()),
            match value {
                Some(v) => Span::raw(v.to_string()),
                None => Span::styled("-", Styles::dim()),
            },
        ])
    };

    let balance_line = Line::from(vec![
        Span::styled(format!("{:<12}", "balance"), Styles::dim()),
        Span::styled(
            format_cents(record.balance_cents),
            Styles::from_class(severity_class(balance_severity(record.balance_cents))),
        ),
    ]);
    let visit_text = match (record.last_visit_at, record.days_since_visit(state.today)) {
        (_, Some(0)) => "today".to_string(),
        (Some(date), Some(d)) => format!("{} ({}d ago)", date, d),
        _ => "never".to_string(),
    };

    let mut lines = vec![
        field("phone", record.phone.as_deref()),
        field("email", record.email.as_deref()),
        field("address", record.address.as_deref()),
        balance_line,
        Line::from(vec![
            Span::styled(format!("{:<12}", "last visit"), Styles::dim()),
            Span::raw(visit_text),
        ]),
    ];
    if let Some(notes) = &record.notes {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("notes", Styles::dim())));
        lines.push(Line::from(notes.clone()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("a", Styles::help_key()),
        Span::styled(" add to route   ", Styles::dim()),
        Span::styled("Esc", Styles::help_key()),
        Span::styled(" close", Styles::dim()),
    ]));

    // Clamp scroll to content height
    let visible = inner.height as usize;
    let max_scroll = lines.len().saturating_sub(visible);
    let clamped = scroll.min(max_scroll);
    if clamped != scroll {
        if let PopupState::CustomerDetail { scroll: s, .. } = &mut state.popup {
            *s = clamped;
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((clamped as u16, 0));
    frame.render_widget(paragraph, inner);
}
