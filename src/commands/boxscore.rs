use anyhow::{Context, Result};

use crate::api::{GameDetails, StatsProvider};
use crate::config::{Config, DisplayConfig};
use crate::formatting::format_header;
use crate::stats::{project, schema};

use super::push_section;

pub fn format_boxscore(details: &GameDetails, display: &DisplayConfig) -> String {
    let title = details
        .score_line()
        .unwrap_or_else(|| format!("Game {}", details.game_id.as_deref().unwrap_or("?")));
    let mut output = format_header(&title, true, display);

    let sides = [
        ("Home Team Player Stats", &details.home_team),
        ("Away Team Player Stats", &details.away_team),
    ];
    for (label, team) in sides {
        if let Some(team) = team {
            let heading = format!("{} ({})", label, team.team_name);
            push_section(
                &mut output,
                &heading,
                &project(&team.players, &schema::BOX_SCORE),
                display,
            );
        }
    }
    output
}

pub async fn run(client: &dyn StatsProvider, game_id: &str, config: &Config) -> Result<()> {
    let details = client
        .game_details(game_id)
        .await
        .with_context(|| format!("Failed to fetch details for game {}", game_id))?;
    print!("{}", format_boxscore(&details, &config.display));
    Ok(())
}
