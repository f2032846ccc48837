use crate::stats::{project, Paginate, StatRecord};
use crate::tui::state::PlayerViewState;
use crate::tui::types::{PlayerFocus, PlayerSlice};
use crate::tui::widgets::{InputLine, SectionHeader, StatTable, TextLine};

use super::Screen;

pub const NO_DATA_MESSAGE: &str = "No player stats to display";

/// Rows of a slice after pagination, plus the control label if it has one
///
/// The career table only ever shows the first row.
fn paged<'a>(
    state: &PlayerViewState,
    slice: PlayerSlice,
    rows: &'a [StatRecord],
) -> (&'a [StatRecord], Option<&'static str>) {
    let pager = match slice {
        PlayerSlice::Career => return (&rows[..rows.len().min(1)], None),
        PlayerSlice::Season => &state.season_pager,
        PlayerSlice::GameLogs => &state.game_log_pager,
    };
    (pager.visible_prefix(rows), Some(pager.control_label(rows.len())))
}

pub fn screen(state: &PlayerViewState, content_focused: bool) -> Screen<'_> {
    let mut screen = Screen::new();
    let focus = content_focused.then_some(state.focus);

    screen.push(InputLine {
        label: "Player",
        value: &state.input,
        placeholder: "full name, e.g. LeBron James",
        focused: focus == Some(PlayerFocus::Input),
    });
    screen.push(TextLine::blank());

    if !state.any_data() {
        screen.push(TextLine::new(NO_DATA_MESSAGE));
        return screen;
    }

    if !state.query.is_empty() {
        screen.push(TextLine::bold(state.query.clone()));
        screen.push(TextLine::blank());
    }

    for slice in state.visible_tables() {
        let Some(rows) = state.slot(slice).displayed() else {
            continue;
        };
        let is_focused = focus == Some(PlayerFocus::Table(slice));
        let (visible, control) = paged(state, slice, rows);

        let mut header = SectionHeader::new(slice.title()).focused(is_focused);
        if let Some(label) = control {
            header = header.with_control(label);
        }
        let header_index = screen.push(header);
        let table_index = screen.push(
            StatTable::new(project(visible, slice.schema()))
                .with_column_offset(state.column_offset(slice))
                .focused(is_focused),
        );
        screen.push(TextLine::blank());

        if is_focused {
            screen.anchor(header_index, table_index);
        }
    }

    screen
}
