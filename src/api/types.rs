use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::stats::format::display_raw;
use crate::stats::StatRecord;

/// Which table `/get_stats` should return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatType {
    Season,
    Career,
}

impl StatType {
    /// Wire code expected by the backend
    pub fn code(self) -> u8 {
        match self {
            StatType::Season => 0,
            StatType::Career => 1,
        }
    }
}

/// Partition of a team's games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonType {
    RegularSeason,
    Playoffs,
    PreSeason,
    PlayIn,
}

impl SeasonType {
    /// Render order on the Team screen
    pub const ALL: [SeasonType; 4] = [
        SeasonType::RegularSeason,
        SeasonType::Playoffs,
        SeasonType::PreSeason,
        SeasonType::PlayIn,
    ];

    /// Literal sent as `season_type`
    pub fn as_str(self) -> &'static str {
        match self {
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::Playoffs => "Playoffs",
            SeasonType::PreSeason => "Pre Season",
            SeasonType::PlayIn => "PlayIn",
        }
    }

    pub fn index(self) -> usize {
        match self {
            SeasonType::RegularSeason => 0,
            SeasonType::Playoffs => 1,
            SeasonType::PreSeason => 2,
            SeasonType::PlayIn => 3,
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatsRequest<'a> {
    pub player_full_name: &'a str,
    pub stat_type: u8,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GameLogRequest<'a> {
    pub player_full_name: &'a str,
    pub season: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct TeamGamesRequest<'a> {
    pub team: &'a str,
    pub season_type: &'a str,
}

/// Entry of `/get_live_games`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveGameSummary {
    #[serde(deserialize_with = "string_or_number")]
    pub game_id: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(rename = "gameTimeUTC", default)]
    pub game_time_utc: Option<String>,
    #[serde(rename = "gameTimeLTZ", default)]
    pub game_time_ltz: Option<String>,
}

impl LiveGameSummary {
    /// `<away> vs. <home>`
    pub fn matchup(&self) -> String {
        format!("{} vs. {}", self.away_team, self.home_team)
    }

    /// Tip-off in the local timezone, falling back to the backend's local string
    pub fn local_tip_time(&self) -> Option<String> {
        self.game_time_utc
            .as_deref()
            .and_then(|utc| DateTime::parse_from_rfc3339(utc).ok())
            .map(|t| t.with_timezone(&Local).format("%-I:%M %p").to_string())
            .or_else(|| self.game_time_ltz.clone())
    }
}

/// Body of `/get_game_details/{gameId}`
///
/// Both teams are optional so a partial payload still renders what it has.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetails {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub game_id: Option<String>,
    #[serde(default)]
    pub home_team: Option<TeamBoxScore>,
    #[serde(default)]
    pub away_team: Option<TeamBoxScore>,
}

impl GameDetails {
    /// `Score: <away> - <awayScore> @ <home> - <homeScore>`, when both teams are present
    pub fn score_line(&self) -> Option<String> {
        let home = self.home_team.as_ref()?;
        let away = self.away_team.as_ref()?;
        Some(format!(
            "Score: {} - {} @ {} - {}",
            away.team_name,
            display_raw(&away.score),
            home.team_name,
            display_raw(&home.score)
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamBoxScore {
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub score: Value,
    #[serde(default)]
    pub players: Vec<StatRecord>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}
