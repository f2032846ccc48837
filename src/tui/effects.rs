use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::api::{SeasonType, StatType, StatsProvider};

use super::action::{Action, LiveAction, PlayerAction, TeamAction};
use super::types::PlayerSlice;

/// Side effect returned by the reducer
///
/// Fetch variants are plain data so reducers stay pure and testable; the
/// runtime turns them into `Async` futures through `DataEffects`.
pub enum Effect {
    None,
    Action(Action),
    Batch(Vec<Effect>),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    FetchPlayerSlice {
        slice: PlayerSlice,
        seq: u64,
        player: String,
    },
    FetchTeamGames {
        season_type: SeasonType,
        seq: u64,
        team: String,
    },
    FetchLiveGames {
        seq: u64,
    },
    FetchGameDetails {
        game_id: String,
        seq: u64,
    },
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => write!(f, "None"),
            Effect::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Effect::Batch(effects) => f.debug_tuple("Batch").field(effects).finish(),
            Effect::Async(_) => write!(f, "Async(..)"),
            Effect::FetchPlayerSlice { slice, seq, player } => f
                .debug_struct("FetchPlayerSlice")
                .field("slice", slice)
                .field("seq", seq)
                .field("player", player)
                .finish(),
            Effect::FetchTeamGames {
                season_type,
                seq,
                team,
            } => f
                .debug_struct("FetchTeamGames")
                .field("season_type", season_type)
                .field("seq", seq)
                .field("team", team)
                .finish(),
            Effect::FetchLiveGames { seq } => {
                f.debug_struct("FetchLiveGames").field("seq", seq).finish()
            }
            Effect::FetchGameDetails { game_id, seq } => f
                .debug_struct("FetchGameDetails")
                .field("game_id", game_id)
                .field("seq", seq)
                .finish(),
        }
    }
}

/// Effect handler for data fetching operations
///
/// Each method returns an Effect that will dispatch the matching
/// *Loaded action when complete. Errors are stringified here; the reducer
/// decides what the screen shows.
pub struct DataEffects {
    client: Arc<dyn StatsProvider>,
    game_log_season: String,
}

impl DataEffects {
    pub fn new(client: Arc<dyn StatsProvider>, game_log_season: impl Into<String>) -> Self {
        Self {
            client,
            game_log_season: game_log_season.into(),
        }
    }

    /// Fetch one slice of the Player screen
    pub fn fetch_player_slice(&self, slice: PlayerSlice, seq: u64, player: String) -> Effect {
        let client = self.client.clone();
        let season = self.game_log_season.clone();
        Effect::Async(Box::pin(async move {
            let result = match slice {
                PlayerSlice::Career => client.player_stats(&player, StatType::Career).await,
                PlayerSlice::Season => client.player_stats(&player, StatType::Season).await,
                PlayerSlice::GameLogs => client.player_game_logs(&player, &season).await,
            };
            Action::Player(PlayerAction::StatsLoaded {
                slice,
                seq,
                result: result.map_err(|e| e.to_string()),
            })
        }))
    }

    /// Fetch a team's games for one season type
    pub fn fetch_team_games(&self, season_type: SeasonType, seq: u64, team: String) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            let result = client.team_games(&team, season_type).await;
            Action::Team(TeamAction::GamesLoaded {
                season_type,
                seq,
                result: result.map_err(|e| e.to_string()),
            })
        }))
    }

    pub fn fetch_live_games(&self, seq: u64) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            let result = client.live_games().await;
            Action::Live(LiveAction::GamesLoaded {
                seq,
                result: result.map_err(|e| e.to_string()),
            })
        }))
    }

    pub fn fetch_game_details(&self, game_id: String, seq: u64) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            let result = client.game_details(&game_id).await;
            Action::Live(LiveAction::DetailsLoaded {
                game_id,
                seq,
                result: result.map_err(|e| e.to_string()),
            })
        }))
    }
}
