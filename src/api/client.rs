use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::error::ApiError;
use super::types::{
    GameDetails, GameLogRequest, LiveGameSummary, SeasonType, StatType, StatsRequest,
    TeamGamesRequest,
};
use super::StatsProvider;
use crate::stats::record::{backend_error, records_from_payload};
use crate::stats::StatRecord;

/// HTTP client for the stats backend
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ApiError::Transport {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!("API: GET {}", url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;
        read_json(url, response).await
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!("API: POST {}", url);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;
        read_json(url, response).await
    }
}

async fn read_json(url: String, response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    check_status(&url, status)?;
    let body = response.text().await.map_err(|source| ApiError::Transport {
        url: url.clone(),
        source,
    })?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode {
        url,
        message: e.to_string(),
    })
}

fn check_status(url: &str, status: StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

/// Turn a rows payload into records, surfacing `{"error": ...}` bodies
pub(crate) fn decode_rows(payload: &Value) -> Result<Vec<StatRecord>, ApiError> {
    if let Some(message) = backend_error(payload) {
        return Err(ApiError::Backend(message.to_string()));
    }
    Ok(records_from_payload(payload))
}

fn decode<T: serde::de::DeserializeOwned>(url: String, payload: Value) -> Result<T, ApiError> {
    serde_json::from_value(payload).map_err(|e| ApiError::Decode {
        url,
        message: e.to_string(),
    })
}

#[async_trait]
impl StatsProvider for Client {
    async fn player_stats(
        &self,
        player_full_name: &str,
        stat_type: StatType,
    ) -> Result<Vec<StatRecord>, ApiError> {
        let body = StatsRequest {
            player_full_name,
            stat_type: stat_type.code(),
        };
        let payload = self.post_json("/get_stats", &body).await?;
        decode_rows(&payload)
    }

    async fn player_game_logs(
        &self,
        player_full_name: &str,
        season: &str,
    ) -> Result<Vec<StatRecord>, ApiError> {
        let body = GameLogRequest {
            player_full_name,
            season,
        };
        let payload = self.post_json("/get_game_logs", &body).await?;
        decode_rows(&payload)
    }

    async fn team_games(
        &self,
        team: &str,
        season_type: SeasonType,
    ) -> Result<Vec<StatRecord>, ApiError> {
        let body = TeamGamesRequest {
            team,
            season_type: season_type.as_str(),
        };
        let payload = self.post_json("/get_team_games", &body).await?;
        decode_rows(&payload)
    }

    async fn live_games(&self) -> Result<Vec<LiveGameSummary>, ApiError> {
        let payload = self.get_json("/get_live_games").await?;
        decode(self.url("/get_live_games"), payload)
    }

    async fn game_details(&self, game_id: &str) -> Result<GameDetails, ApiError> {
        let path = format!("/get_game_details/{}", game_id);
        let payload = self.get_json(&path).await?;
        decode(self.url(&path), payload)
    }
}
