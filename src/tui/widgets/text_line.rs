/// TextLine widget - one line of plain or emphasized text
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;

use super::{put_str, RenderableWidget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Plain,
    Bold,
    Dim,
}

#[derive(Debug, Default)]
pub struct TextLine {
    pub text: String,
    pub emphasis: Emphasis,
}

impl TextLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Plain,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Bold,
        }
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Dim,
        }
    }

    /// Empty line used as vertical spacing
    pub fn blank() -> Self {
        Self::default()
    }
}

impl RenderableWidget for TextLine {
    fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
        let style = match self.emphasis {
            Emphasis::Plain => Style::default(),
            Emphasis::Bold => Style::default().add_modifier(Modifier::BOLD),
            Emphasis::Dim => Style::default().add_modifier(Modifier::DIM),
        };
        put_str(buf, area, area.x, area.y, &self.text, style);
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
