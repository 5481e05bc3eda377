//! Widget modules for the portal tabs.

pub mod dividend;
pub mod header;
pub mod margin;
pub mod news;
pub mod simulation;
pub mod verify;

use ratatui::layout::Rect;

/// Centers a `width` x `height` box inside `area`, clamped to it.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
