//! TUI widgets. Thin wrappers that map view models onto ratatui.

mod areas;
mod customer_detail;
mod customers;
mod header;
mod help;
mod quick_add;
mod quit_confirm;
mod summary;

pub use areas::render_area_panel;
pub use customer_detail::render_customer_detail;
pub use customers::render_customer_table;
pub use header::render_header;
pub use help::render_help;
pub use quick_add::render_quick_add;
pub use quit_confirm::render_quit_confirm;
pub use summary::render_summary;

use ratatui::layout::Rect;

/// A centered rect of the given percentage size, clamped to sane bounds.
pub fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = (area.width * percent_x / 100).clamp(30, 80).min(area.width);
    let height = (area.height * percent_y / 100).clamp(7, 24).min(area.height);
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
