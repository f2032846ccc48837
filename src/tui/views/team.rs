use crate::stats::{project, schema, Paginate};
use crate::tui::state::TeamViewState;
use crate::tui::types::TeamFocus;
use crate::tui::widgets::{InputLine, SectionHeader, StatTable, TextLine};

use super::Screen;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const NO_DATA_MESSAGE: &str = "No game logs to display";

pub fn screen(state: &TeamViewState, content_focused: bool) -> Screen<'_> {
    let mut screen = Screen::new();
    let focus = content_focused.then_some(state.focus);

    screen.push(InputLine {
        label: "Team",
        value: &state.input,
        placeholder: "name or abbreviation, e.g. Raptors or TOR",
        focused: focus == Some(TeamFocus::Input),
    });
    screen.push(TextLine::blank());

    if state.is_loading() {
        screen.push(TextLine::dim(LOADING_MESSAGE));
        return screen;
    }
    if !state.any_data() {
        screen.push(TextLine::new(NO_DATA_MESSAGE));
        return screen;
    }

    screen.push(TextLine::bold(state.query.clone()));
    screen.push(TextLine::blank());

    for season_type in state.visible_tables() {
        let Some(rows) = state.slot(season_type).displayed() else {
            continue;
        };
        let pager = state.pager(season_type);
        let is_focused = focus == Some(TeamFocus::Table(season_type));

        let header_index = screen.push(
            SectionHeader::new(season_type.as_str())
                .with_control(pager.control_label(rows.len()))
                .focused(is_focused),
        );
        let table_index = screen.push(
            StatTable::new(project(pager.visible_prefix(rows), &schema::TEAM_GAME))
                .with_column_offset(state.column_offset(season_type))
                .focused(is_focused),
        );
        screen.push(TextLine::blank());

        if is_focused {
            screen.anchor(header_index, table_index);
        }
    }

    screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SeasonType;
    use crate::fixtures;
    use crate::tui::testing::*;
    use ratatui::{buffer::Buffer, layout::Rect};

    const TEAM: &str = "Toronto Raptors";

    fn render(state: &TeamViewState, height: u16) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, 120, height));
        screen(state, true).render(buf.area, &mut buf, &test_config_ascii());
        buf
    }

    fn load_all(state: &mut TeamViewState) {
        state.query = TEAM.to_string();
        for season_type in SeasonType::ALL {
            let seq = state.slot_mut(season_type).issue();
            state
                .slot_mut(season_type)
                .resolve(seq, Ok(fixtures::team_games(TEAM, season_type)));
        }
    }

    fn game_rows(buf: &Buffer) -> usize {
        buffer_lines(buf)
            .iter()
            .filter(|l| l.contains("TOR vs. BOS"))
            .count()
    }

    #[test]
    fn test_no_data_message() {
        let buf = render(&TeamViewState::default(), 10);
        assert!(buffer_contains(&buf, NO_DATA_MESSAGE));
        assert!(buffer_contains(&buf, "Team: _"));
    }

    #[test]
    fn test_loading_while_any_fetch_pending() {
        let mut state = TeamViewState::default();
        load_all(&mut state);
        state.slot_mut(SeasonType::Playoffs).issue();

        let buf = render(&state, 10);
        assert!(buffer_contains(&buf, LOADING_MESSAGE));
        assert!(!buffer_contains(&buf, "Regular Season"));
    }

    #[test]
    fn test_empty_season_type_is_hidden() {
        let mut state = TeamViewState::default();
        load_all(&mut state);

        let buf = render(&state, 60);
        assert!(buffer_contains(&buf, TEAM));
        assert!(buffer_contains(&buf, "Regular Season  [Show More]"));
        assert!(buffer_contains(&buf, "Playoffs  [Show More]"));
        assert!(buffer_contains(&buf, "Pre Season  [All Shown]"));
        assert!(!buffer_contains(&buf, "PlayIn"));
        // 5 regular season + 5 playoffs + 4 pre season
        assert_eq!(game_rows(&buf), 14);
    }

    #[test]
    fn test_pagers_are_independent() {
        let mut state = TeamViewState::default();
        load_all(&mut state);
        state.pager_mut(SeasonType::RegularSeason).advance();
        state.pager_mut(SeasonType::RegularSeason).advance();

        let buf = render(&state, 60);
        assert!(buffer_contains(&buf, "Regular Season  [All Shown]"));
        assert!(buffer_contains(&buf, "Playoffs  [Show More]"));
        assert_eq!(game_rows(&buf), 12 + 5 + 4);
    }

    #[test]
    fn test_failed_slice_is_hidden_but_others_remain() {
        let mut state = TeamViewState::default();
        load_all(&mut state);
        let seq = state.slot_mut(SeasonType::Playoffs).issue();
        state
            .slot_mut(SeasonType::Playoffs)
            .resolve(seq, Err("HTTP 500".to_string()));

        let buf = render(&state, 60);
        assert!(!buffer_contains(&buf, "Playoffs"));
        assert!(buffer_contains(&buf, "Regular Season"));
    }
}
