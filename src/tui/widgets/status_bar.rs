/// StatusBar widget - two lines at the bottom of the screen
///
/// Top line is a horizontal rule, bottom line the status message. Error
/// messages use the configured error color.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::DisplayConfig;

use super::{put_str, RenderableWidget};

#[derive(Debug)]
pub struct StatusBar<'a> {
    pub message: Option<&'a str>,
    pub is_error: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(message: Option<&'a str>, is_error: bool) -> Self {
        Self { message, is_error }
    }
}

impl RenderableWidget for StatusBar<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let rule = config.box_chars.horizontal.repeat(area.width as usize);
        put_str(buf, area, area.x, area.y, &rule, Style::default());

        if let Some(message) = self.message {
            let style = if self.is_error {
                Style::default().fg(config.error_fg)
            } else {
                Style::default()
            };
            put_str(buf, area, area.x + 1, area.y + 1, message, style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}
