/// GameList widget - the Live screen's list of games
///
/// One line per game: `<away> vs. <home>` followed by the local tip time.
/// The cursor row gets the selector glyph; the game whose details are shown
/// is bold.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::api::LiveGameSummary;
use crate::config::DisplayConfig;

use super::{put_str, RenderableWidget};

#[derive(Debug)]
pub struct GameList<'a> {
    pub games: &'a [LiveGameSummary],
    pub cursor: usize,
    pub selected_id: Option<&'a str>,
    pub focused: bool,
}

impl GameList<'_> {
    /// Text of one list row, without the selector column
    pub fn row_text(game: &LiveGameSummary) -> String {
        match game.local_tip_time() {
            Some(time) => format!("{}  {}", game.matchup(), time),
            None => game.matchup(),
        }
    }
}

impl RenderableWidget for GameList<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        // Keep the cursor on screen
        let height = area.height as usize;
        let first = (self.cursor + 1).saturating_sub(height);

        for (row, (i, game)) in self.games.iter().enumerate().skip(first).enumerate() {
            if row >= height {
                break;
            }
            let y = area.y + row as u16;
            let is_cursor = i == self.cursor;

            let mut style = Style::default();
            if is_cursor && self.focused {
                style = style.fg(config.selection_fg);
            }
            if self.selected_id == Some(game.game_id.as_str()) {
                style = style.add_modifier(Modifier::BOLD);
            }

            let selector = if is_cursor {
                format!("{} ", config.box_chars.selector)
            } else {
                "  ".to_string()
            };
            let x = put_str(buf, area, area.x, y, &selector, style);
            put_str(buf, area, x, y, &Self::row_text(game), style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.games.len() as u16)
    }
}
