//! Screen composition: turns `AppState` into widgets for one frame.
//!
//! Projection and pagination run on every frame from the stored records, so
//! what is drawn always follows the current pager and fetch state.

pub mod live;
pub mod player;
pub mod team;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
};

use crate::config::DisplayConfig;

use super::state::AppState;
use super::types::Tab;
use super::widgets::scroll_rendering::render_scrollable_widgets;
use super::widgets::{RenderableWidget, StatusBar, TabBar};

/// Vertical stack of widgets with an optional range that must stay visible
#[derive(Default)]
pub struct Screen<'a> {
    widgets: Vec<Box<dyn RenderableWidget + 'a>>,
    anchor: Option<(usize, usize)>,
}

impl<'a> Screen<'a> {
    pub fn new() -> Self {
        Self {
            widgets: Vec::new(),
            anchor: None,
        }
    }

    /// Append a widget, returning its index
    pub fn push(&mut self, widget: impl RenderableWidget + 'a) -> usize {
        self.widgets.push(Box::new(widget));
        self.widgets.len() - 1
    }

    /// Keep widgets `first..=last` on screen
    pub fn anchor(&mut self, first: usize, last: usize) {
        self.anchor = Some((first, last));
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        render_scrollable_widgets(&self.widgets, self.anchor, area, buf, config);
    }
}

/// Draw the whole application: tab bar, current screen, status bar
pub fn render_app(state: &AppState, area: Rect, buf: &mut Buffer) {
    let config = &state.system.config.display;
    let [tabs, content, status] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(area);

    TabBar::new(state.navigation.current_tab, !state.navigation.content_focused)
        .render(tabs, buf, config);

    let content = content.inner(Margin::new(1, 0));
    let focused = state.navigation.content_focused;
    match state.navigation.current_tab {
        Tab::Player => player::screen(&state.player, focused).render(content, buf, config),
        Tab::Team => team::screen(&state.team, focused).render(content, buf, config),
        Tab::Live => live::render(&state.live, focused, content, buf, config),
    }

    StatusBar::new(state.system.status_message.as_deref(), state.system.status_is_error)
        .render(status, buf, config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::*;

    #[test]
    fn test_app_frame_has_tabs_content_and_status() {
        let state = AppState::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, RENDER_WIDTH, 12));
        render_app(&state, buf.area, &mut buf);

        let lines = buffer_lines(&buf);
        assert!(lines[0].starts_with("1 Player Search"));
        assert!(lines[2].contains("Player: _"));
        assert!(buffer_contains(&buf, "No player stats to display"));
        assert!(lines[11].contains("q: quit"));
    }
}
