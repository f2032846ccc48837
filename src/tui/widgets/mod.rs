/// Widget-based rendering infrastructure for TUI
///
/// Widgets are small, focused components that render straight into a ratatui
/// Buffer and are composed by the screen views.

pub mod game_list;
pub mod input_line;
pub mod scroll_rendering;
pub mod section_header;
pub mod stat_table;
pub mod status_bar;
pub mod tab_bar;
pub mod text_line;

pub use game_list::GameList;
pub use input_line::InputLine;
pub use section_header::SectionHeader;
pub use stat_table::StatTable;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
pub use text_line::TextLine;

use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, avoiding string-based
/// intermediate representations.
///
/// # Object Safety
///
/// This trait is object-safe, so views can stack different widget types in
/// one `Vec<Box<dyn RenderableWidget>>`.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    /// Get the preferred width of this widget
    fn preferred_width(&self) -> Option<u16> {
        None
    }
}

/// Write `text` at (x, y), clipped to the right edge of `area`
///
/// Returns the x position after the written text.
pub(crate) fn put_str(
    buf: &mut Buffer,
    area: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: ratatui::style::Style,
) -> u16 {
    if y < area.top() || y >= area.bottom() || x >= area.right() {
        return x;
    }
    let room = (area.right() - x) as usize;
    let (end_x, _) = buf.set_stringn(x, y, text, room, style);
    end_x
}
