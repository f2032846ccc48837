use anyhow::{Context, Result};

use crate::api::{SeasonType, StatsProvider};
use crate::config::{Config, DisplayConfig};
use crate::formatting::format_header;
use crate::stats::{project, schema, StatRecord};
use crate::team_abbrev::resolve_team_query;

use super::push_section;

/// Format the season-type tables that have games
pub fn format_team_games(
    team: &str,
    games: &[(SeasonType, Vec<StatRecord>)],
    display: &DisplayConfig,
) -> String {
    let mut output = format_header(team, true, display);

    if games.iter().all(|(_, rows)| rows.is_empty()) {
        output.push_str("\nNo game logs to display\n");
        return output;
    }

    for (season_type, rows) in games {
        push_section(
            &mut output,
            season_type.as_str(),
            &project(rows, &schema::TEAM_GAME),
            display,
        );
    }
    output
}

pub async fn run(
    client: &dyn StatsProvider,
    query: &str,
    season_type: Option<SeasonType>,
    config: &Config,
) -> Result<()> {
    let team = resolve_team_query(query);
    let season_types = match season_type {
        Some(season_type) => vec![season_type],
        None => SeasonType::ALL.to_vec(),
    };

    let mut games = Vec::with_capacity(season_types.len());
    for season_type in season_types {
        let rows = client
            .team_games(&team, season_type)
            .await
            .with_context(|| format!("Failed to fetch {} games for {}", season_type, team))?;
        games.push((season_type, rows));
    }

    print!("{}", format_team_games(&team, &games, &config.display));
    Ok(())
}
