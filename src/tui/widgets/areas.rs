//! Area panel widget: grouped customer cards with a selectable cursor.
//! Thin TUI wrapper over [`crate::view::areas::build_area_panel`].

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use crate::tui::state::{AppState, AreaFetch, AreaPanelState};
use crate::tui::style::Styles;
use crate::view::areas::{AreaLine, build_area_panel};

/// Renders the Areas tab content for the current fetch state.
pub fn render_area_panel(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let block = Block::default()
        .title(" Customer Areas ")
        .borders(Borders::ALL)
        .style(Styles::default());

    let AreaPanelState {
        fetch,
        selected,
        list_state,
    } = &mut state.areas;

    match fetch {
        AreaFetch::NotStarted | AreaFetch::Loading => {
            let paragraph = Paragraph::new("Loading customer areas...")
                .style(Styles::dim())
                .block(block);
            frame.render_widget(Clear, area);
            frame.render_widget(paragraph, area);
        }
        AreaFetch::Failed(message) => {
            let paragraph = Paragraph::new(Span::styled(
                format!("Failed to load areas: {}  (R to retry)", message),
                Styles::error(),
            ))
            .block(block);
            frame.render_widget(Clear, area);
            frame.render_widget(paragraph, area);
        }
        AreaFetch::Loaded(groups) => {
            let panel = build_area_panel(groups);
            if panel.selectable.is_empty() {
                let paragraph = Paragraph::new("No customers need a visit right now")
                    .style(Styles::dim())
                    .block(block);
                frame.render_widget(Clear, area);
                frame.render_widget(paragraph, area);
                return;
            }

            *selected = (*selected).min(panel.selectable.len() - 1);
            list_state.select(Some(panel.selectable[*selected]));

            let items: Vec<ListItem> = panel
                .lines
                .iter()
                .map(|line| match line {
                    AreaLine::Heading { text } => ListItem::new(Span::styled(
                        text.clone(),
                        Styles::from_class(crate::view::common::RowStyleClass::Accent)
                            .add_modifier(Modifier::BOLD),
                    )),
                    AreaLine::Customer { text, style, .. } => {
                        ListItem::new(Span::styled(text.clone(), Styles::from_class(*style)))
                    }
                    AreaLine::Blank => ListItem::new(""),
                })
                .collect();

            let title = format!(
                " Customer Areas [{} areas, {} customers] ",
                groups.len(),
                panel.selectable.len()
            );
            let list = List::new(items)
                .block(
                    Block::default()
                        .title(title)
                        .borders(Borders::ALL)
                        .style(Styles::default()),
                )
                .highlight_style(Styles::selected());

            frame.render_widget(Clear, area);
            frame.render_stateful_widget(list, area, list_state);
        }
    }
}
