use tracing::{debug, error};

use crate::stats::{Paginate, StatRecord};
use crate::tui::action::{Action, PlayerAction};
use crate::tui::effects::Effect;
use crate::tui::state::{AppState, Resolution};
use crate::tui::types::{PlayerFocus, PlayerSlice};

use super::{cycle, scroll_offset};

/// Handle Player screen actions
pub fn reduce_player(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    let Action::Player(action) = action else {
        return Err(state);
    };
    let mut new_state = state;

    let effect = match action {
        PlayerAction::InputChar(c) => {
            new_state.player.input.push(*c);
            Effect::None
        }
        PlayerAction::InputBackspace => {
            new_state.player.input.pop();
            Effect::None
        }
        PlayerAction::Search => search(&mut new_state),
        PlayerAction::FocusNext => {
            move_focus(&mut new_state, true);
            Effect::None
        }
        PlayerAction::FocusPrevious => {
            move_focus(&mut new_state, false);
            Effect::None
        }
        PlayerAction::ShowMore(slice) => {
            if let Some(pager) = new_state.player.pager_mut(*slice) {
                pager.advance();
                debug!("PLAYER: {:?} table expanded={}", slice, pager.is_expanded());
            }
            Effect::None
        }
        PlayerAction::ScrollColumns { slice, delta } => {
            let columns = slice.schema().len();
            let offset = new_state.player.column_offset_mut(*slice);
            *offset = scroll_offset(*offset, *delta, columns);
            Effect::None
        }
        PlayerAction::StatsLoaded { slice, seq, result } => {
            stats_loaded(&mut new_state, *slice, *seq, result.clone());
            Effect::None
        }
    };

    Ok((new_state, effect))
}

/// Issue the three independent player fetches
fn search(state: &mut AppState) -> Effect {
    let name = state.player.input.trim().to_string();
    if name.is_empty() {
        state
            .system
            .set_status_error_message("Enter a player's full name to search".to_string());
        return Effect::None;
    }

    debug!("PLAYER: Searching for {}", name);
    state.player.query = name.clone();
    state.system.reset_status_message();

    let effects = PlayerSlice::ALL
        .into_iter()
        .map(|slice| {
            let seq = state.player.slot_mut(slice).issue();
            Effect::FetchPlayerSlice {
                slice,
                seq,
                player: name.clone(),
            }
        })
        .collect();
    Effect::Batch(effects)
}

fn move_focus(state: &mut AppState, forward: bool) {
    let ring: Vec<PlayerFocus> = std::iter::once(PlayerFocus::Input)
        .chain(state.player.visible_tables().into_iter().map(PlayerFocus::Table))
        .collect();
    if let Some(next) = cycle(&ring, state.player.focus, forward) {
        state.player.focus = next;
    }
}

fn stats_loaded(
    state: &mut AppState,
    slice: PlayerSlice,
    seq: u64,
    result: Result<Vec<StatRecord>, String>,
) {
    match state.player.slot_mut(slice).resolve(seq, result) {
        Resolution::Applied => {
            let rows = state.player.slot(slice).displayed().map_or(0, Vec::len);
            debug!("PLAYER: Loaded {} rows of {} (seq={})", rows, slice.label(), seq);
        }
        Resolution::Failed(e) => {
            error!("PLAYER: Failed to load {}: {}", slice.label(), e);
            state
                .system
                .set_status_error_message(format!("Failed to load {}: {}", slice.label(), e));
        }
        Resolution::Stale => {
            debug!("PLAYER: Dropping stale {} response (seq={})", slice.label(), seq);
        }
    }

    // A table that just disappeared cannot keep focus
    if let PlayerFocus::Table(focused) = state.player.focus {
        if !state.player.visible_tables().contains(&focused) {
            state.player.focus = PlayerFocus::Input;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn reduce(state: AppState, action: PlayerAction) -> (AppState, Effect) {
        match reduce_player(state, &Action::Player(action)) {
            Ok(result) => result,
            Err(_) => panic!("player action not handled"),
        }
    }

    fn typed(name: &str) -> AppState {
        let mut state = AppState::default();
        for c in name.chars() {
            state = reduce(state, PlayerAction::InputChar(c)).0;
        }
        state
    }

    fn loaded(
        state: AppState,
        slice: PlayerSlice,
        seq: u64,
        result: Result<Vec<StatRecord>, String>,
    ) -> AppState {
        reduce(state, PlayerAction::StatsLoaded { slice, seq, result }).0
    }

    #[test]
    fn test_typing_and_backspace() {
        let state = typed("LeBronx");
        let (state, _) = reduce(state, PlayerAction::InputBackspace);
        assert_eq!(state.player.input, "LeBron");
    }

    #[test]
    fn test_search_issues_three_fetches() {
        let (state, effect) = reduce(typed(" LeBron James "), PlayerAction::Search);

        assert_eq!(state.player.query, "LeBron James");
        match effect {
            Effect::Batch(effects) => {
                assert_eq!(effects.len(), 3);
                for (effect, expected) in effects.iter().zip(PlayerSlice::ALL) {
                    match effect {
                        Effect::FetchPlayerSlice { slice, seq, player } => {
                            assert_eq!(*slice, expected);
                            assert_eq!(*seq, 1);
                            assert_eq!(player, "LeBron James");
                        }
                        other => panic!("Unexpected effect {:?}", other),
                    }
                }
            }
            other => panic!("Expected Batch effect, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_search_is_rejected() {
        let (state, effect) = reduce(typed("   "), PlayerAction::Search);
        assert!(matches!(effect, Effect::None));
        assert!(state.system.status_is_error);
        assert_eq!(state.player.career.latest_seq(), 0);
    }

    #[test]
    fn test_career_failure_keeps_other_tables() {
        let (state, _) = reduce(typed("LeBron James"), PlayerAction::Search);
        let state = loaded(state, PlayerSlice::Season, 1, Ok(fixtures::season_stats(12)));
        let state = loaded(state, PlayerSlice::Career, 1, Err("HTTP 500".to_string()));
        let state = loaded(state, PlayerSlice::GameLogs, 1, Ok(fixtures::game_logs(12)));

        assert!(state.player.any_data());
        assert_eq!(
            state.player.visible_tables(),
            vec![PlayerSlice::Season, PlayerSlice::GameLogs]
        );
        assert!(state.system.status_is_error);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let (state, _) = reduce(typed("LeBron James"), PlayerAction::Search);
        let (state, _) = reduce(state, PlayerAction::Search);

        // The newer search answers first, then the older one arrives late
        let state = loaded(state, PlayerSlice::Season, 2, Ok(fixtures::season_stats(3)));
        let state = loaded(state, PlayerSlice::Season, 1, Ok(fixtures::season_stats(12)));

        assert_eq!(state.player.season.displayed().map(Vec::len), Some(3));
    }

    #[test]
    fn test_show_more_toggles_paginated_tables_only() {
        let (state, _) = reduce(AppState::default(), PlayerAction::ShowMore(PlayerSlice::Season));
        assert!(state.player.season_pager.is_expanded());
        assert!(!state.player.game_log_pager.is_expanded());

        let (state, _) = reduce(state, PlayerAction::ShowMore(PlayerSlice::Season));
        assert!(!state.player.season_pager.is_expanded());

        // Career has no control; nothing changes
        let (state, _) = reduce(state, PlayerAction::ShowMore(PlayerSlice::Career));
        assert!(!state.player.season_pager.is_expanded());
    }

    #[test]
    fn test_focus_cycles_through_visible_tables() {
        let (state, _) = reduce(typed("LeBron James"), PlayerAction::Search);
        let state = loaded(state, PlayerSlice::Career, 1, Ok(fixtures::career_stats()));
        let state = loaded(state, PlayerSlice::GameLogs, 1, Ok(fixtures::game_logs(4)));

        let (state, _) = reduce(state, PlayerAction::FocusNext);
        assert_eq!(state.player.focus, PlayerFocus::Table(PlayerSlice::Career));
        let (state, _) = reduce(state, PlayerAction::FocusNext);
        assert_eq!(state.player.focus, PlayerFocus::Table(PlayerSlice::GameLogs));
        let (state, _) = reduce(state, PlayerAction::FocusNext);
        assert_eq!(state.player.focus, PlayerFocus::Input);
        let (state, _) = reduce(state, PlayerAction::FocusPrevious);
        assert_eq!(state.player.focus, PlayerFocus::Table(PlayerSlice::GameLogs));
    }

    #[test]
    fn test_failed_slice_drops_its_focus() {
        let (state, _) = reduce(typed("LeBron James"), PlayerAction::Search);
        let state = loaded(state, PlayerSlice::Career, 1, Ok(fixtures::career_stats()));
        let (state, _) = reduce(state, PlayerAction::FocusNext);
        assert_eq!(state.player.focus, PlayerFocus::Table(PlayerSlice::Career));

        let (state, _) = reduce(state, PlayerAction::Search);
        let state = loaded(state, PlayerSlice::Career, 2, Err("boom".to_string()));
        assert_eq!(state.player.focus, PlayerFocus::Input);
    }

    #[test]
    fn test_scroll_columns_clamped_to_schema() {
        let scroll = |state, delta| {
            reduce(
                state,
                PlayerAction::ScrollColumns {
                    slice: PlayerSlice::Career,
                    delta,
                },
            )
            .0
        };
        let state = scroll(AppState::default(), -3);
        assert_eq!(state.player.column_offset(PlayerSlice::Career), 0);
        let state = scroll(state, 100);
        assert_eq!(
            state.player.column_offset(PlayerSlice::Career),
            PlayerSlice::Career.schema().len() - 1
        );
    }
}
