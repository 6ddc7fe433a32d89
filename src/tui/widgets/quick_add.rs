//! Quick-add popup: schedule a visit for a customer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::state::QuickAddForm;
use crate::tui::style::Styles;

/// Renders the quick-add popup.
pub fn render_quick_add(frame: &mut Frame, area: Rect, form: &QuickAddForm) {
    let popup_width = (area.width * 50 / 100).clamp(44, 64);
    let popup_height = 9u16.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Add to route ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let date_display = if form.date_input.is_empty() {
        Span::styled("today_", Styles::dim())
    } else {
        Span::styled(format!("{}_", form.date_input), Styles::search_input())
    };

    let mut content = vec![
        Line::from(vec![
            Span::styled("Schedule a visit for ", Styles::dim()),
            Span::styled(form.customer_name.clone(), Styles::help_key()),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("date: ", Styles::dim()), date_display]),
        Line::from(Span::styled(
            "YYYY-MM-DD, today, tomorrow, or +Nd",
            Styles::dim(),
        )),
        Line::from(""),
    ];
    if let Some(error) = &form.error {
        content.push(Line::from(Span::styled(error.clone(), Styles::error())));
    } else {
        content.push(Line::from(vec![
            Span::styled("Enter", Styles::help_key()),
            Span::styled(" add   ", Styles::dim()),
            Span::styled("Esc", Styles::help_key()),
            Span::styled(" cancel", Styles::dim()),
        ]));
    }

    let paragraph = Paragraph::new(content).alignment(Alignment::Left);
    frame.render_widget(paragraph, inner);
}
