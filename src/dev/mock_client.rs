/// Mock stats client for development and testing
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::info;

use crate::api::{ApiError, GameDetails, LiveGameSummary, SeasonType, StatType, StatsProvider};
use crate::fixtures;
use crate::stats::StatRecord;

/// Endpoint selector for injected failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockEndpoint {
    CareerStats,
    SeasonStats,
    GameLogs,
    TeamGames,
    LiveGames,
    GameDetails,
}

/// Client that returns fixture data instead of making real API calls
#[derive(Debug, Default)]
pub struct MockClient {
    failing: HashSet<MockEndpoint>,
}

impl MockClient {
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self::default()
    }

    /// Make an endpoint answer with HTTP 500
    pub fn with_failure(mut self, endpoint: MockEndpoint) -> Self {
        self.failing.insert(endpoint);
        self
    }

    fn check(&self, endpoint: MockEndpoint, path: &str) -> Result<(), ApiError> {
        if self.failing.contains(&endpoint) {
            return Err(ApiError::Status {
                url: format!("mock://{}", path),
                status: 500,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl StatsProvider for MockClient {
    async fn player_stats(
        &self,
        player_full_name: &str,
        stat_type: StatType,
    ) -> Result<Vec<StatRecord>, ApiError> {
        info!("MockClient: Returning {:?} stats for {}", stat_type, player_full_name);
        match stat_type {
            StatType::Career => {
                self.check(MockEndpoint::CareerStats, "/get_stats")?;
                Ok(fixtures::career_stats())
            }
            StatType::Season => {
                self.check(MockEndpoint::SeasonStats, "/get_stats")?;
                Ok(fixtures::season_stats(12))
            }
        }
    }

    async fn player_game_logs(
        &self,
        player_full_name: &str,
        season: &str,
    ) -> Result<Vec<StatRecord>, ApiError> {
        info!("MockClient: Returning {} game logs for {}", season, player_full_name);
        self.check(MockEndpoint::GameLogs, "/get_game_logs")?;
        Ok(fixtures::game_logs(12))
    }

    async fn team_games(
        &self,
        team: &str,
        season_type: SeasonType,
    ) -> Result<Vec<StatRecord>, ApiError> {
        info!("MockClient: Returning {} games for {}", season_type, team);
        self.check(MockEndpoint::TeamGames, "/get_team_games")?;
        Ok(fixtures::team_games(team, season_type))
    }

    async fn live_games(&self) -> Result<Vec<LiveGameSummary>, ApiError> {
        info!("MockClient: Returning live games");
        self.check(MockEndpoint::LiveGames, "/get_live_games")?;
        Ok(fixtures::live_games())
    }

    async fn game_details(&self, game_id: &str) -> Result<GameDetails, ApiError> {
        info!("MockClient: Returning details for game {}", game_id);
        self.check(MockEndpoint::GameDetails, "/get_game_details")?;
        Ok(fixtures::game_details(game_id))
    }
}
