use tracing::{debug, trace};

use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::state::AppState;
use crate::tui::types::Tab;

/// Handle all navigation-related actions
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_navigation(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::NavigateTab(tab) => Ok(navigate_to_tab(state, *tab)),
        Action::NavigateTabLeft => {
            let tab = state.navigation.current_tab.prev();
            Ok(navigate_to_tab(state, tab))
        }
        Action::NavigateTabRight => {
            let tab = state.navigation.current_tab.next();
            Ok(navigate_to_tab(state, tab))
        }
        Action::EnterContentFocus => Ok(enter_content_focus(state)),
        Action::ExitContentFocus => Ok(exit_content_focus(state)),
        _ => Err(state),
    }
}

fn navigate_to_tab(state: AppState, tab: Tab) -> (AppState, Effect) {
    trace!("Navigating to tab: {:?}", tab);
    let mut new_state = state;
    new_state.navigation.current_tab = tab;
    new_state.navigation.content_focused = false; // Return focus to tab bar
    new_state.system.reset_status_message();

    // The game list is refreshed every time the Live screen is opened
    let effect = if tab == Tab::Live {
        let seq = new_state.live.games.issue();
        debug!("NAV: Opening Live tab, fetching game list (seq={})", seq);
        Effect::FetchLiveGames { seq }
    } else {
        Effect::None
    };
    (new_state, effect)
}

fn enter_content_focus(state: AppState) -> (AppState, Effect) {
    debug!("FOCUS: Entering content focus (Down key from tab bar)");
    let mut new_state = state;
    new_state.navigation.content_focused = true;

    let hint = match new_state.navigation.current_tab {
        Tab::Player | Tab::Team => "Enter: search  Tab: next table  Space: show more  ←→: scroll  Esc: go back",
        Tab::Live => "↑↓: move  Enter: details  r: reload  Tab: next table  Esc: go back",
    };
    new_state.system.set_status_message(hint.to_string());

    (new_state, Effect::None)
}

fn exit_content_focus(state: AppState) -> (AppState, Effect) {
    debug!("FOCUS: Exiting content focus (Esc key to tab bar)");
    let mut new_state = state;
    new_state.navigation.content_focused = false;
    new_state.system.reset_status_message();
    (new_state, Effect::None)
}
