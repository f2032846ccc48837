use anyhow::{Context, Result};

use crate::api::{StatType, StatsProvider};
use crate::config::{Config, DisplayConfig};
use crate::formatting::format_header;
use crate::stats::{project, schema, StatRecord};

use super::push_section;

/// Career, season and game-log rows for one player
#[derive(Debug, Default)]
pub struct PlayerReport {
    pub name: String,
    pub season: String,
    pub career: Vec<StatRecord>,
    pub seasons: Vec<StatRecord>,
    pub game_logs: Vec<StatRecord>,
}

pub fn format_player(report: &PlayerReport, display: &DisplayConfig) -> String {
    let mut output = format_header(&report.name, true, display);

    if report.career.is_empty() && report.seasons.is_empty() && report.game_logs.is_empty() {
        output.push_str("\nNo player stats to display\n");
        return output;
    }

    let career = &report.career[..report.career.len().min(1)];
    push_section(
        &mut output,
        "Career Stats",
        &project(career, &schema::CAREER),
        display,
    );
    push_section(
        &mut output,
        "Season Stats",
        &project(&report.seasons, &schema::SEASON),
        display,
    );
    push_section(
        &mut output,
        &format!("Game Logs ({})", report.season),
        &project(&report.game_logs, &schema::GAME_LOG),
        display,
    );
    output
}

pub async fn run(
    client: &dyn StatsProvider,
    name: &str,
    season: Option<String>,
    config: &Config,
) -> Result<()> {
    let season = season.unwrap_or_else(|| config.game_log_season.clone());

    let (career, seasons, game_logs) = tokio::join!(
        client.player_stats(name, StatType::Career),
        client.player_stats(name, StatType::Season),
        client.player_game_logs(name, &season),
    );

    let report = PlayerReport {
        name: name.to_string(),
        career: career.with_context(|| format!("Failed to fetch career stats for {}", name))?,
        seasons: seasons.with_context(|| format!("Failed to fetch season stats for {}", name))?,
        game_logs: game_logs
            .with_context(|| format!("Failed to fetch {} game logs for {}", season, name))?,
        season,
    };
    print!("{}", format_player(&report, &config.display));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_client::{MockClient, MockEndpoint};
    use crate::fixtures;

    fn ascii() -> DisplayConfig {
        DisplayConfig {
            use_unicode: false,
            box_chars: crate::formatting::BoxChars::ascii(),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_player_prints_all_rows() {
        let report = PlayerReport {
            name: "LeBron James".to_string(),
            season: "2022-23".to_string(),
            career: fixtures::career_stats(),
            seasons: fixtures::season_stats(12),
            game_logs: fixtures::game_logs(12),
        };
        let output = format_player(&report, &ascii());

        assert!(output.starts_with("LeBron James\n============\n"));
        assert!(output.contains("Career Stats"));
        assert!(output.contains("Game Logs (2022-23)"));
        assert!(output.contains("50.6%"));
        // No pagination on the command line: 12 seasons plus 12 games
        assert_eq!(output.lines().filter(|l| l.contains("LAL")).count(), 24);
    }

    #[test]
    fn test_format_player_without_rows() {
        let report = PlayerReport {
            name: "Nobody".to_string(),
            ..Default::default()
        };
        let output = format_player(&report, &ascii());
        assert!(output.contains("No player stats to display"));
        assert!(!output.contains("Career Stats"));
    }

    #[test]
    fn test_format_player_prints_first_career_row() {
        let payload = serde_json::json!({
            "PLAYER_ID": {"0": 1, "1": 1},
            "GP": {"0": 1111, "1": 2222}
        });
        let report = PlayerReport {
            name: "LeBron James".to_string(),
            career: crate::stats::records_from_payload(&payload),
            ..Default::default()
        };
        let output = format_player(&report, &ascii());
        assert!(output.contains("1111"));
        assert!(!output.contains("2222"));
    }

    #[tokio::test]
    async fn test_run_reports_failed_slice() {
        let client = MockClient::new().with_failure(MockEndpoint::GameLogs);
        let err = run(&client, "LeBron James", None, &Config::default())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to fetch 2022-23 game logs for LeBron James"
        );
    }
}
