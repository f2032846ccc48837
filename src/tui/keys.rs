/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
/// It contains all the keyboard navigation logic for the TUI.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, trace};

use super::action::{Action, LiveAction, PlayerAction, TeamAction};
use super::state::AppState;
use super::types::{LiveFocus, PlayerFocus, Tab, TeamFocus};

/// Handle number keys for direct tab switching
fn handle_number_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('1') => Some(Action::NavigateTab(Tab::Player)),
        KeyCode::Char('2') => Some(Action::NavigateTab(Tab::Team)),
        KeyCode::Char('3') => Some(Action::NavigateTab(Tab::Live)),
        _ => None,
    }
}

/// Handle keys while the tab bar has focus
fn handle_tab_bar_navigation(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Left => Some(Action::NavigateTabLeft),
        KeyCode::Right => Some(Action::NavigateTabRight),
        KeyCode::Down | KeyCode::Enter => Some(Action::EnterContentFocus),
        _ => None,
    }
}

/// Whether keystrokes currently go into a text input
fn is_editing(state: &AppState) -> bool {
    state.navigation.content_focused
        && match state.navigation.current_tab {
            Tab::Player => state.player.focus == PlayerFocus::Input,
            Tab::Team => state.team.focus == TeamFocus::Input,
            Tab::Live => false,
        }
}

fn handle_player_keys(key_code: KeyCode, focus: PlayerFocus) -> Option<PlayerAction> {
    match (focus, key_code) {
        (_, KeyCode::Tab) | (_, KeyCode::Down) => Some(PlayerAction::FocusNext),
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => Some(PlayerAction::FocusPrevious),
        (PlayerFocus::Input, KeyCode::Enter) => Some(PlayerAction::Search),
        (PlayerFocus::Input, KeyCode::Backspace) => Some(PlayerAction::InputBackspace),
        (PlayerFocus::Input, KeyCode::Char(c)) => Some(PlayerAction::InputChar(c)),
        (PlayerFocus::Table(slice), KeyCode::Enter | KeyCode::Char(' ')) => {
            Some(PlayerAction::ShowMore(slice))
        }
        (PlayerFocus::Table(slice), KeyCode::Left) => {
            Some(PlayerAction::ScrollColumns { slice, delta: -1 })
        }
        (PlayerFocus::Table(slice), KeyCode::Right) => {
            Some(PlayerAction::ScrollColumns { slice, delta: 1 })
        }
        _ => None,
    }
}

fn handle_team_keys(key_code: KeyCode, focus: TeamFocus) -> Option<TeamAction> {
    match (focus, key_code) {
        (_, KeyCode::Tab) | (_, KeyCode::Down) => Some(TeamAction::FocusNext),
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => Some(TeamAction::FocusPrevious),
        (TeamFocus::Input, KeyCode::Enter) => Some(TeamAction::Search),
        (TeamFocus::Input, KeyCode::Backspace) => Some(TeamAction::InputBackspace),
        (TeamFocus::Input, KeyCode::Char(c)) => Some(TeamAction::InputChar(c)),
        (TeamFocus::Table(season_type), KeyCode::Enter | KeyCode::Char(' ')) => {
            Some(TeamAction::ShowMore(season_type))
        }
        (TeamFocus::Table(season_type), KeyCode::Left) => Some(TeamAction::ScrollColumns {
            season_type,
            delta: -1,
        }),
        (TeamFocus::Table(season_type), KeyCode::Right) => Some(TeamAction::ScrollColumns {
            season_type,
            delta: 1,
        }),
        _ => None,
    }
}

fn handle_live_keys(key_code: KeyCode, focus: LiveFocus) -> Option<LiveAction> {
    match (focus, key_code) {
        (_, KeyCode::Tab) => Some(LiveAction::FocusNext),
        (_, KeyCode::Char('r')) | (_, KeyCode::Char('R')) => Some(LiveAction::RefreshGames),
        (LiveFocus::GameList, KeyCode::Up) => Some(LiveAction::CursorUp),
        (LiveFocus::GameList, KeyCode::Down) => Some(LiveAction::CursorDown),
        (LiveFocus::GameList, KeyCode::Enter) => Some(LiveAction::SelectHighlighted),
        (LiveFocus::Details(side), KeyCode::Left) => {
            Some(LiveAction::ScrollColumns { side, delta: -1 })
        }
        (LiveFocus::Details(side), KeyCode::Right) => {
            Some(LiveAction::ScrollColumns { side, delta: 1 })
        }
        _ => None,
    }
}

/// Convert a key event into an action for the current state
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    let current_tab = state.navigation.current_tab;
    let content_focused = state.navigation.content_focused;

    trace!(
        "KEY: {:?} (tab={:?}, content_focused={})",
        key.code,
        current_tab,
        content_focused
    );

    // 1. Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // 2. ESC leaves the content area
    if key.code == KeyCode::Esc {
        return content_focused.then_some(Action::ExitContentFocus);
    }

    // 3. Number keys switch tabs unless they are being typed into an input
    if !is_editing(state) {
        if let Some(action) = handle_number_keys(key.code) {
            return Some(action);
        }
    }

    // 4. Tab bar focused
    if !content_focused {
        let action = handle_tab_bar_navigation(key.code);
        if action.is_some() {
            debug!("KEY: Tab bar navigation: {:?}", action);
        }
        return action;
    }

    // 5. Content focused: route to the current screen
    match current_tab {
        Tab::Player => handle_player_keys(key.code, state.player.focus).map(Action::Player),
        Tab::Team => handle_team_keys(key.code, state.team.focus).map(Action::Team),
        Tab::Live => handle_live_keys(key.code, state.live.focus).map(Action::Live),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SeasonType;
    use crate::tui::types::{PlayerSlice, Side};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn tab_bar_state(tab: Tab) -> AppState {
        let mut state = AppState::default();
        state.navigation.current_tab = tab;
        state.navigation.content_focused = false;
        state
    }

    #[test]
    fn test_q_quits_from_tab_bar_only() {
        let state = tab_bar_state(Tab::Player);
        assert!(matches!(key_to_action(key(KeyCode::Char('q')), &state), Some(Action::Quit)));

        let typing = AppState::default();
        assert!(matches!(
            key_to_action(key(KeyCode::Char('q')), &typing),
            Some(Action::Player(PlayerAction::InputChar('q')))
        ));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(key_to_action(event, &AppState::default()), Some(Action::Quit)));
    }

    #[test]
    fn test_number_keys_switch_tabs_outside_inputs() {
        let state = tab_bar_state(Tab::Player);
        assert!(matches!(
            key_to_action(key(KeyCode::Char('3')), &state),
            Some(Action::NavigateTab(Tab::Live))
        ));

        // "76ers" must be typeable
        let mut typing = AppState::default();
        typing.navigation.current_tab = Tab::Team;
        assert!(matches!(
            key_to_action(key(KeyCode::Char('7')), &typing),
            Some(Action::Team(TeamAction::InputChar('7')))
        ));
    }

    #[test]
    fn test_tab_bar_arrows_and_down() {
        let state = tab_bar_state(Tab::Team);
        assert!(matches!(key_to_action(key(KeyCode::Left), &state), Some(Action::NavigateTabLeft)));
        assert!(matches!(key_to_action(key(KeyCode::Down), &state), Some(Action::EnterContentFocus)));
    }

    #[test]
    fn test_esc_exits_content_then_does_nothing() {
        assert!(matches!(
            key_to_action(key(KeyCode::Esc), &AppState::default()),
            Some(Action::ExitContentFocus)
        ));
        assert!(key_to_action(key(KeyCode::Esc), &tab_bar_state(Tab::Player)).is_none());
    }

    #[test]
    fn test_player_input_and_table_keys() {
        let mut state = AppState::default();
        assert!(matches!(
            key_to_action(key(KeyCode::Enter), &state),
            Some(Action::Player(PlayerAction::Search))
        ));

        state.player.focus = PlayerFocus::Table(PlayerSlice::GameLogs);
        assert!(matches!(
            key_to_action(key(KeyCode::Char(' ')), &state),
            Some(Action::Player(PlayerAction::ShowMore(PlayerSlice::GameLogs)))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Right), &state),
            Some(Action::Player(PlayerAction::ScrollColumns { delta: 1, .. }))
        ));
    }

    #[test]
    fn test_team_table_show_more() {
        let mut state = AppState::default();
        state.navigation.current_tab = Tab::Team;
        state.team.focus = TeamFocus::Table(SeasonType::Playoffs);
        assert!(matches!(
            key_to_action(key(KeyCode::Enter), &state),
            Some(Action::Team(TeamAction::ShowMore(SeasonType::Playoffs)))
        ));
    }

    #[test]
    fn test_live_keys() {
        let mut state = AppState::default();
        state.navigation.current_tab = Tab::Live;
        assert!(matches!(
            key_to_action(key(KeyCode::Down), &state),
            Some(Action::Live(LiveAction::CursorDown))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Char('r')), &state),
            Some(Action::Live(LiveAction::RefreshGames))
        ));

        state.live.focus = LiveFocus::Details(Side::Away);
        assert!(matches!(
            key_to_action(key(KeyCode::Left), &state),
            Some(Action::Live(LiveAction::ScrollColumns { side: Side::Away, delta: -1 }))
        ));
        assert!(key_to_action(key(KeyCode::Down), &state).is_none());
    }
}
