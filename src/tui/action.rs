use crate::api::{GameDetails, LiveGameSummary, SeasonType};
use crate::stats::StatRecord;

use super::types::{PlayerSlice, Side, Tab};

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - Effects (async data loading)
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation actions
    NavigateTab(Tab),
    NavigateTabLeft,
    NavigateTabRight,
    EnterContentFocus, // Down key: move focus from tab bar to content
    ExitContentFocus,  // Esc key: move focus from content back to tab bar

    // Screen-specific actions
    Player(PlayerAction),
    Team(TeamAction),
    Live(LiveAction),

    // System actions
    Quit,
    Error(String),
    SetStatusMessage { message: String, is_error: bool },
}

/// Actions for the Player screen
#[derive(Debug, Clone)]
pub enum PlayerAction {
    InputChar(char),
    InputBackspace,
    Search,
    FocusNext,
    FocusPrevious,
    ShowMore(PlayerSlice),
    ScrollColumns { slice: PlayerSlice, delta: isize },
    StatsLoaded {
        slice: PlayerSlice,
        seq: u64,
        result: Result<Vec<StatRecord>, String>,
    },
}

/// Actions for the Team screen
#[derive(Debug, Clone)]
pub enum TeamAction {
    InputChar(char),
    InputBackspace,
    Search,
    FocusNext,
    FocusPrevious,
    ShowMore(SeasonType),
    ScrollColumns { season_type: SeasonType, delta: isize },
    GamesLoaded {
        season_type: SeasonType,
        seq: u64,
        result: Result<Vec<StatRecord>, String>,
    },
}

/// Actions for the Live screen
#[derive(Debug, Clone)]
pub enum LiveAction {
    RefreshGames,
    CursorUp,
    CursorDown,
    /// Load details for the highlighted game
    SelectHighlighted,
    FocusNext,
    ScrollColumns { side: Side, delta: isize },
    GamesLoaded {
        seq: u64,
        result: Result<Vec<LiveGameSummary>, String>,
    },
    DetailsLoaded {
        game_id: String,
        seq: u64,
        result: Result<GameDetails, String>,
    },
}

impl Action {
    /// Returns true if this action should trigger a re-render
    pub fn should_render(&self) -> bool {
        !matches!(self, Self::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_render_returns_true_for_most_actions() {
        assert!(Action::NavigateTabLeft.should_render());
        assert!(Action::EnterContentFocus.should_render());
        assert!(Action::Player(PlayerAction::Search).should_render());
        assert!(Action::Live(LiveAction::RefreshGames).should_render());
        assert!(Action::Quit.should_render());
    }

    #[test]
    fn test_should_render_returns_false_for_error_actions() {
        assert!(!Action::Error("test error".to_string()).should_render());
        assert!(!Action::Error(String::new()).should_render());
    }
}
