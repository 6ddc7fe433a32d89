//! Help popup widget.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::style::Styles;

fn key_line(keys: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<16}", keys), Styles::help_key()),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::Yellow),
    ))
}

fn help_content() -> Vec<Line<'static>> {
    vec![
        section("Navigation"),
        key_line("Tab / Shift-Tab", "next / previous tab"),
        key_line("1 / 2 / 3", "customers / balances / areas"),
        key_line("Up Down j k", "move selection"),
        key_line("PgUp PgDn", "move selection by page"),
        key_line("Home / End", "first / last row"),
        Line::from(""),
        section("Tables"),
        key_line("/", "search (live; Esc cancels, Enter keeps)"),
        key_line("s", "sort by next column"),
        key_line("r", "reverse sort direction"),
        key_line("R", "refresh roster from the backend"),
        key_line("Enter", "customer detail"),
        key_line("a", "add selected customer to a route"),
        Line::from(""),
        section("Areas"),
        key_line("R", "reload area groups"),
        key_line("Enter / a", "add selected customer to a route"),
        Line::from(""),
        section("General"),
        key_line("?", "this help"),
        key_line("Esc", "close any popup"),
        key_line("q", "quit (with confirmation)"),
    ]
}

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let popup_width = (area.width * 60 / 100).clamp(40, 70);
    let popup_height = (area.height * 80 / 100).clamp(10, 30);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let content = help_content();
    let content_lines = content.len();

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let visible_height = chunks[0].height as usize;
    let max_scroll = content_lines.saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, chunks[0]);

    let footer = if max_scroll > 0 {
        format!("j/k scroll [{}/{}]  Esc close", *scroll + 1, max_scroll + 1)
    } else {
        "Esc close".to_string()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(footer, Styles::dim())),
        chunks[1],
    );
}
