/// TabBar widget - displays main navigation tabs
///
/// Renders the three screens separated by vertical bars, with a rule
/// underneath. The current tab is highlighted; the whole bar dims when
/// focus is in the content area.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

use crate::config::DisplayConfig;
use crate::tui::types::Tab;

use super::{put_str, RenderableWidget};

#[derive(Debug)]
pub struct TabBar {
    pub current_tab: Tab,
    /// Whether the tab bar is focused (affects styling)
    pub focused: bool,
}

impl TabBar {
    pub fn new(current_tab: Tab, focused: bool) -> Self {
        Self {
            current_tab,
            focused,
        }
    }

    fn base_style(&self) -> Style {
        if self.focused {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn tab_style(&self, tab: Tab, config: &DisplayConfig) -> Style {
        if tab == self.current_tab {
            Style::default().fg(config.selection_fg)
        } else {
            self.base_style()
        }
    }
}

impl RenderableWidget for TabBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let separator = format!(" {} ", config.box_chars.vertical);
        let mut x = area.x;
        for (i, tab) in Tab::all().into_iter().enumerate() {
            if i > 0 {
                x = put_str(buf, area, x, area.y, &separator, self.base_style());
            }
            let label = format!("{} {}", i + 1, tab.name());
            x = put_str(buf, area, x, area.y, &label, self.tab_style(tab, config));
        }

        let rule = config.box_chars.horizontal.repeat(area.width as usize);
        put_str(buf, area, area.x, area.y + 1, &rule, self.base_style());
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::*;

    #[test]
    fn test_tab_bar_layout() {
        let widget = TabBar::new(Tab::Team, true);
        let buf = render_widget_with_config(&widget, 52, 2, &test_config_ascii());

        let rule = "-".repeat(52);
        assert_buffer(
            &buf,
            &["1 Player Search | 2 Team Search | 3 Live Games", rule.as_str()],
        );
    }

    #[test]
    fn test_current_tab_highlighted() {
        let widget = TabBar::new(Tab::Player, false);
        let buf = render_widget(&widget, RENDER_WIDTH, 2);
        let config = test_config();

        assert_eq!(buf[(0, 0)].fg, config.selection_fg);
        // "1 Player Search │ " is 18 cells wide
        assert_eq!(buf[(18, 0)].fg, Color::DarkGray);
    }
}
