/// SectionHeader widget - a table title, its underline and an optional control
///
/// The control label (e.g. "Show More") is rendered in brackets after the
/// title. A focused section gets the selector glyph and the selection color.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;

use super::{put_str, RenderableWidget};

#[derive(Debug)]
pub struct SectionHeader {
    pub title: String,
    pub control: Option<&'static str>,
    pub focused: bool,
}

impl SectionHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            control: None,
            focused: false,
        }
    }

    pub fn with_control(mut self, label: &'static str) -> Self {
        self.control = Some(label);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl RenderableWidget for SectionHeader {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let prefix = if self.focused {
            format!("{} ", config.box_chars.selector)
        } else {
            "  ".to_string()
        };
        let style = if self.focused {
            Style::default().fg(config.selection_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let x = put_str(buf, area, area.x, area.y, &prefix, style);
        let x = put_str(buf, area, x, area.y, &self.title, style);
        if let Some(control) = self.control {
            put_str(buf, area, x, area.y, &format!("  [{}]", control), style);
        }

        let underline = config.box_chars.horizontal.repeat(self.title.width());
        put_str(buf, area, area.x + 2, area.y + 1, &underline, Style::default());
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}
