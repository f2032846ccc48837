//! Access to the stats backend
//!
//! `StatsProvider` abstracts over the real HTTP `Client` and the fixture-backed
//! `MockClient`, so the TUI and commands never touch reqwest directly.

pub mod client;
pub mod error;
pub mod types;

pub use client::Client;
pub use error::ApiError;
pub use types::{GameDetails, LiveGameSummary, SeasonType, StatType, TeamBoxScore};

use async_trait::async_trait;

use crate::stats::StatRecord;

/// Source of player, team and live game data
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// `POST /get_stats` - career (single row) or season-by-season stats
    async fn player_stats(
        &self,
        player_full_name: &str,
        stat_type: StatType,
    ) -> Result<Vec<StatRecord>, ApiError>;

    /// `POST /get_game_logs` - per-game lines for one season (e.g. `2022-23`)
    async fn player_game_logs(
        &self,
        player_full_name: &str,
        season: &str,
    ) -> Result<Vec<StatRecord>, ApiError>;

    /// `POST /get_team_games` - a team's games for one season type
    async fn team_games(
        &self,
        team: &str,
        season_type: SeasonType,
    ) -> Result<Vec<StatRecord>, ApiError>;

    /// `GET /get_live_games`
    async fn live_games(&self) -> Result<Vec<LiveGameSummary>, ApiError>;

    /// `GET /get_game_details/{gameId}`
    async fn game_details(&self, game_id: &str) -> Result<GameDetails, ApiError>;
}
