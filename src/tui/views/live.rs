use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
};

use crate::api::TeamBoxScore;
use crate::config::DisplayConfig;
use crate::stats::{project, schema};
use crate::tui::state::LiveViewState;
use crate::tui::types::{LiveFocus, Side};
use crate::tui::widgets::{GameList, SectionHeader, StatTable, TextLine};

use super::Screen;

pub const NO_GAMES_MESSAGE: &str = "No live games available.";
pub const NO_SELECTION_MESSAGE: &str = "Select a game to view details";

const MIN_LIST_WIDTH: u16 = 24;
const MAX_LIST_WIDTH: u16 = 40;

fn list_width(total: u16) -> u16 {
    (total / 3).clamp(MIN_LIST_WIDTH, MAX_LIST_WIDTH).min(total)
}

/// Left column: header plus the game list
pub fn game_list_screen(state: &LiveViewState, content_focused: bool) -> Screen<'_> {
    let mut screen = Screen::new();
    let focused = content_focused && state.focus == LiveFocus::GameList;

    screen.push(SectionHeader::new("Games").focused(focused));
    let games = state.game_list();
    if games.is_empty() {
        screen.push(TextLine::new(NO_GAMES_MESSAGE));
    } else {
        screen.push(GameList {
            games,
            cursor: state.cursor,
            selected_id: state.shown_game_id(),
            focused,
        });
    }
    screen
}

/// Right column: score line and both box-score tables
pub fn details_screen(state: &LiveViewState, content_focused: bool) -> Screen<'_> {
    let mut screen = Screen::new();
    let Some(details) = state.details.displayed() else {
        screen.push(TextLine::dim(NO_SELECTION_MESSAGE));
        return screen;
    };

    if let Some(score) = details.score_line() {
        screen.push(TextLine::bold(score));
        screen.push(TextLine::blank());
    }

    let sides = [
        (Side::Home, "Home Team Player Stats", details.home_team.as_ref()),
        (Side::Away, "Away Team Player Stats", details.away_team.as_ref()),
    ];
    for (side, title, team) in sides {
        let Some(team) = team else {
            continue;
        };
        let is_focused = content_focused && state.focus == LiveFocus::Details(side);
        push_box_score(&mut screen, title, team, state.column_offset(side), is_focused);
    }
    screen
}

fn push_box_score(
    screen: &mut Screen<'_>,
    title: &str,
    team: &TeamBoxScore,
    column_offset: usize,
    focused: bool,
) {
    let header_index = screen.push(SectionHeader::new(title).focused(focused));
    let table_index = screen.push(
        StatTable::new(project(&team.players, &schema::BOX_SCORE))
            .with_column_offset(column_offset)
            .focused(focused),
    );
    screen.push(TextLine::blank());
    if focused {
        screen.anchor(header_index, table_index);
    }
}

pub fn render(
    state: &LiveViewState,
    content_focused: bool,
    area: Rect,
    buf: &mut Buffer,
    config: &DisplayConfig,
) {
    let [list, _, details] = Layout::horizontal([
        Constraint::Length(list_width(area.width)),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    game_list_screen(state, content_focused).render(list, buf, config);
    details_screen(state, content_focused).render(details, buf, config);
}
