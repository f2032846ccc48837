use tracing::{debug, error};

use crate::api::{GameDetails, LiveGameSummary};
use crate::stats::schema::BOX_SCORE;
use crate::tui::action::{Action, LiveAction};
use crate::tui::effects::Effect;
use crate::tui::state::{AppState, Resolution};
use crate::tui::types::{LiveFocus, Side};

use super::scroll_offset;

/// Handle Live screen actions
pub fn reduce_live(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    let Action::Live(action) = action else {
        return Err(state);
    };
    let mut new_state = state;

    let effect = match action {
        LiveAction::RefreshGames => {
            let seq = new_state.live.games.issue();
            debug!("LIVE: Refreshing game list (seq={})", seq);
            Effect::FetchLiveGames { seq }
        }
        LiveAction::CursorUp => {
            new_state.live.cursor = new_state.live.cursor.saturating_sub(1);
            Effect::None
        }
        LiveAction::CursorDown => {
            let last = new_state.live.game_list().len().saturating_sub(1);
            new_state.live.cursor = (new_state.live.cursor + 1).min(last);
            Effect::None
        }
        LiveAction::SelectHighlighted => select_highlighted(&mut new_state),
        LiveAction::FocusNext => {
            new_state.live.focus = next_focus(&new_state);
            Effect::None
        }
        LiveAction::ScrollColumns { side, delta } => {
            let offset = new_state.live.column_offset_mut(*side);
            *offset = scroll_offset(*offset, *delta, BOX_SCORE.len());
            Effect::None
        }
        LiveAction::GamesLoaded { seq, result } => {
            games_loaded(&mut new_state, *seq, result.clone());
            Effect::None
        }
        LiveAction::DetailsLoaded {
            game_id,
            seq,
            result,
        } => {
            details_loaded(&mut new_state, game_id, *seq, result.clone());
            Effect::None
        }
    };

    Ok((new_state, effect))
}

fn select_highlighted(state: &mut AppState) -> Effect {
    let Some(game_id) = state.live.highlighted_game().map(|g| g.game_id.clone()) else {
        return Effect::None;
    };

    debug!("LIVE: Loading details for game {}", game_id);
    state.live.selected_game_id = Some(game_id.clone());
    state.live.column_offsets = [0; 2];
    let seq = state.live.details.issue();
    Effect::FetchGameDetails { game_id, seq }
}

/// List -> home box score -> away box score -> list; detail tables only once loaded
fn next_focus(state: &AppState) -> LiveFocus {
    let has_details = state.live.details.displayed().is_some();
    match state.live.focus {
        LiveFocus::GameList if has_details => LiveFocus::Details(Side::Home),
        LiveFocus::Details(Side::Home) if has_details => LiveFocus::Details(Side::Away),
        _ => LiveFocus::GameList,
    }
}

fn games_loaded(state: &mut AppState, seq: u64, result: Result<Vec<LiveGameSummary>, String>) {
    match state.live.games.resolve(seq, result) {
        Resolution::Applied => {
            let count = state.live.game_list().len();
            debug!("LIVE: Loaded {} games (seq={})", count, seq);
            state.live.cursor = state.live.cursor.min(count.saturating_sub(1));
        }
        Resolution::Failed(e) => {
            error!("LIVE: Failed to load live games: {}", e);
            state
                .system
                .set_status_error_message(format!("Failed to load live games: {}", e));
        }
        Resolution::Stale => {
            debug!("LIVE: Dropping stale game list (seq={})", seq);
        }
    }
}

fn details_loaded(
    state: &mut AppState,
    game_id: &str,
    seq: u64,
    result: Result<GameDetails, String>,
) {
    match state.live.details.resolve(seq, result) {
        Resolution::Applied => {
            debug!("LIVE: Loaded details for game {} (seq={})", game_id, seq);
        }
        Resolution::Failed(e) => {
            error!("LIVE: Failed to load game {}: {}", game_id, e);
            state
                .system
                .set_status_error_message(format!("Failed to load game {}: {}", game_id, e));
            state.live.focus = LiveFocus::GameList;
        }
        Resolution::Stale => {
            debug!("LIVE: Dropping stale details for game {} (seq={})", game_id, seq);
        }
    }
}
