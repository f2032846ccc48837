use tracing::error;

use super::action::Action;
use super::effects::Effect;
use super::state::AppState;

use crate::tui::reducers::{reduce_live, reduce_navigation, reduce_player, reduce_team};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and an effect.
/// No I/O happens here; fetches are returned as effects for the runtime.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    let state = match reduce_navigation(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_player(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_team(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_live(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::SetStatusMessage { message, is_error } => {
            let mut new_state = state;
            if is_error {
                new_state.system.set_status_error_message(message);
            } else {
                new_state.system.set_status_message(message);
            }
            (new_state, Effect::None)
        }

        Action::Error(message) => {
            error!("ERROR: {}", message);
            let mut new_state = state;
            new_state.system.set_status_error_message(message);
            (new_state, Effect::None)
        }

        _ => (state, Effect::None),
    }
}
