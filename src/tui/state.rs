use std::sync::Arc;

use crate::api::{GameDetails, LiveGameSummary, SeasonType};
use crate::config::Config;
use crate::stats::{ExpandToggle, StatRecord, StepPager};

use super::types::{LiveFocus, PlayerFocus, PlayerSlice, Side, Tab, TeamFocus};

pub const DEFAULT_STATUS_MESSAGE: &str = "1-3: switch tab  ↓: enter content  Esc: go back  q: quit";

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub navigation: NavigationState,
    pub player: PlayerViewState,
    pub team: TeamViewState,
    pub live: LiveViewState,
    pub system: SystemState,
}

#[derive(Debug, Clone)]
pub struct NavigationState {
    pub current_tab: Tab,
    /// Whether focus is on content (true) or tab bar (false)
    pub content_focused: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_tab: Tab::Player,
            // The player name input is ready for typing on startup
            content_focused: true,
        }
    }
}

/// Outcome of applying a completed fetch to its slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Failed(String),
    Stale,
}

/// One independently fetched slice of a screen
///
/// Each issued request gets a new sequence number. Only the completion
/// carrying the latest number is applied; older ones are dropped. On failure
/// the previous payload is kept but hidden until a later success.
#[derive(Debug, Clone)]
pub struct FetchSlot<T> {
    data: Option<Arc<T>>,
    available: bool,
    pending: bool,
    latest_seq: u64,
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self {
            data: None,
            available: false,
            pending: false,
            latest_seq: 0,
        }
    }
}

impl<T> FetchSlot<T> {
    /// Start a new request, returning its sequence number
    pub fn issue(&mut self) -> u64 {
        self.latest_seq += 1;
        self.pending = true;
        self.latest_seq
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    pub fn resolve(&mut self, seq: u64, result: Result<T, String>) -> Resolution {
        if !self.is_current(seq) {
            return Resolution::Stale;
        }
        self.pending = false;
        match result {
            Ok(data) => {
                self.data = Some(Arc::new(data));
                self.available = true;
                Resolution::Applied
            }
            Err(e) => {
                self.available = false;
                Resolution::Failed(e)
            }
        }
    }

    /// Payload to render, if the last completed request succeeded
    pub fn displayed(&self) -> Option<&T> {
        if self.available {
            self.data.as_deref()
        } else {
            None
        }
    }

    pub fn has_data(&self) -> bool {
        self.available
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayerViewState {
    pub input: String,
    /// Name used by the most recent search
    pub query: String,
    pub focus: PlayerFocus,
    pub career: FetchSlot<Vec<StatRecord>>,
    pub season: FetchSlot<Vec<StatRecord>>,
    pub game_logs: FetchSlot<Vec<StatRecord>>,
    pub season_pager: ExpandToggle,
    pub game_log_pager: ExpandToggle,
    pub column_offsets: [usize; 3],
}

impl PlayerViewState {
    pub fn slot(&self, slice: PlayerSlice) -> &FetchSlot<Vec<StatRecord>> {
        match slice {
            PlayerSlice::Career => &self.career,
            PlayerSlice::Season => &self.season,
            PlayerSlice::GameLogs => &self.game_logs,
        }
    }

    pub fn slot_mut(&mut self, slice: PlayerSlice) -> &mut FetchSlot<Vec<StatRecord>> {
        match slice {
            PlayerSlice::Career => &mut self.career,
            PlayerSlice::Season => &mut self.season,
            PlayerSlice::GameLogs => &mut self.game_logs,
        }
    }

    /// Pager for a paginated slice; the career table is never paginated
    pub fn pager_mut(&mut self, slice: PlayerSlice) -> Option<&mut ExpandToggle> {
        match slice {
            PlayerSlice::Career => None,
            PlayerSlice::Season => Some(&mut self.season_pager),
            PlayerSlice::GameLogs => Some(&mut self.game_log_pager),
        }
    }

    pub fn column_offset(&self, slice: PlayerSlice) -> usize {
        self.column_offsets[slice_index(slice)]
    }

    pub fn column_offset_mut(&mut self, slice: PlayerSlice) -> &mut usize {
        &mut self.column_offsets[slice_index(slice)]
    }

    pub fn any_data(&self) -> bool {
        PlayerSlice::ALL.iter().any(|s| self.slot(*s).has_data())
    }

    /// Slices whose table is currently on screen, in render order
    pub fn visible_tables(&self) -> Vec<PlayerSlice> {
        PlayerSlice::ALL
            .into_iter()
            .filter(|s| self.slot(*s).displayed().is_some_and(|rows| !rows.is_empty()))
            .collect()
    }
}

fn slice_index(slice: PlayerSlice) -> usize {
    match slice {
        PlayerSlice::Career => 0,
        PlayerSlice::Season => 1,
        PlayerSlice::GameLogs => 2,
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeamViewState {
    pub input: String,
    /// Team name used by the most recent search, after abbreviation expansion
    pub query: String,
    pub focus: TeamFocus,
    pub games: [FetchSlot<Vec<StatRecord>>; 4],
    pub pagers: [StepPager; 4],
    pub column_offsets: [usize; 4],
}

impl TeamViewState {
    pub fn slot(&self, season_type: SeasonType) -> &FetchSlot<Vec<StatRecord>> {
        &self.games[season_type.index()]
    }

    pub fn slot_mut(&mut self, season_type: SeasonType) -> &mut FetchSlot<Vec<StatRecord>> {
        &mut self.games[season_type.index()]
    }

    pub fn pager(&self, season_type: SeasonType) -> &StepPager {
        &self.pagers[season_type.index()]
    }

    pub fn pager_mut(&mut self, season_type: SeasonType) -> &mut StepPager {
        &mut self.pagers[season_type.index()]
    }

    pub fn column_offset(&self, season_type: SeasonType) -> usize {
        self.column_offsets[season_type.index()]
    }

    pub fn column_offset_mut(&mut self, season_type: SeasonType) -> &mut usize {
        &mut self.column_offsets[season_type.index()]
    }

    pub fn is_loading(&self) -> bool {
        self.games.iter().any(FetchSlot::is_pending)
    }

    pub fn any_data(&self) -> bool {
        self.games.iter().any(FetchSlot::has_data)
    }

    /// Season types whose table is currently on screen, in render order
    pub fn visible_tables(&self) -> Vec<SeasonType> {
        SeasonType::ALL
            .into_iter()
            .filter(|t| self.slot(*t).displayed().is_some_and(|rows| !rows.is_empty()))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LiveViewState {
    pub games: FetchSlot<Vec<LiveGameSummary>>,
    /// Highlighted row in the game list
    pub cursor: usize,
    /// Game whose details were last requested
    pub selected_game_id: Option<String>,
    pub details: FetchSlot<GameDetails>,
    pub focus: LiveFocus,
    pub column_offsets: [usize; 2],
}

impl LiveViewState {
    pub fn game_list(&self) -> &[LiveGameSummary] {
        self.games.displayed().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn highlighted_game(&self) -> Option<&LiveGameSummary> {
        self.game_list().get(self.cursor)
    }

    /// Id of the game whose details are on screen
    pub fn shown_game_id(&self) -> Option<&str> {
        self.details.displayed()?.game_id.as_deref()
    }

    pub fn column_offset(&self, side: Side) -> usize {
        self.column_offsets[side.index()]
    }

    pub fn column_offset_mut(&mut self, side: Side) -> &mut usize {
        &mut self.column_offsets[side.index()]
    }
}

#[derive(Debug, Clone)]
pub struct SystemState {
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            config: Config::default(),
            status_message: Some(DEFAULT_STATUS_MESSAGE.to_string()),
            status_is_error: false,
        }
    }
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_slot_applies_latest() {
        let mut slot: FetchSlot<u32> = FetchSlot::default();
        let seq = slot.issue();
        assert!(slot.is_pending());
        assert_eq!(slot.resolve(seq, Ok(7)), Resolution::Applied);
        assert_eq!(slot.displayed(), Some(&7));
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_fetch_slot_drops_stale_completion() {
        let mut slot: FetchSlot<u32> = FetchSlot::default();
        let first = slot.issue();
        let second = slot.issue();

        assert_eq!(slot.resolve(second, Ok(2)), Resolution::Applied);
        assert_eq!(slot.resolve(first, Ok(1)), Resolution::Stale);
        assert_eq!(slot.displayed(), Some(&2));
    }

    #[test]
    fn test_fetch_slot_failure_hides_previous_data() {
        let mut slot: FetchSlot<u32> = FetchSlot::default();
        let seq = slot.issue();
        slot.resolve(seq, Ok(1));

        let seq = slot.issue();
        assert_eq!(
            slot.resolve(seq, Err("boom".to_string())),
            Resolution::Failed("boom".to_string())
        );
        assert!(!slot.has_data());
        assert_eq!(slot.displayed(), None);

        let seq = slot.issue();
        slot.resolve(seq, Ok(3));
        assert_eq!(slot.displayed(), Some(&3));
    }

    #[test]
    fn test_team_loading_tracks_any_pending_slice() {
        let mut team = TeamViewState::default();
        assert!(!team.is_loading());

        let seq = team.slot_mut(SeasonType::Playoffs).issue();
        assert!(team.is_loading());
        team.slot_mut(SeasonType::Playoffs).resolve(seq, Ok(Vec::new()));
        assert!(!team.is_loading());
        assert!(team.any_data());
        assert!(team.visible_tables().is_empty());
    }

    #[test]
    fn test_status_message_helpers() {
        let mut system = SystemState::default();
        system.set_status_error_message("Failed".to_string());
        assert!(system.status_is_error);
        system.reset_status_message();
        assert_eq!(system.status_message.as_deref(), Some(DEFAULT_STATUS_MESSAGE));
        assert!(!system.status_is_error);
    }
}
