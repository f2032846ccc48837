/// InputLine widget - labelled single-line text input
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;

use super::{put_str, RenderableWidget};

#[derive(Debug)]
pub struct InputLine<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
}

impl RenderableWidget for InputLine<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let label_style = if self.focused {
            Style::default().fg(config.selection_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let x = put_str(buf, area, area.x, area.y, &format!("{}: ", self.label), label_style);

        if self.value.is_empty() && !self.focused {
            let hint = Style::default().add_modifier(Modifier::DIM);
            put_str(buf, area, x, area.y, self.placeholder, hint);
            return;
        }

        let x = put_str(buf, area, x, area.y, self.value, Style::default());
        if self.focused {
            put_str(
                buf,
                area,
                x,
                area.y,
                "_",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            );
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
