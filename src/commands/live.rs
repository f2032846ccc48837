use anyhow::{Context, Result};

use crate::api::{LiveGameSummary, StatsProvider};
use crate::config::{Config, DisplayConfig};
use crate::formatting::{format_header, pad_right};

pub fn format_live_games(games: &[LiveGameSummary], display: &DisplayConfig) -> String {
    let mut output = format_header("Live Games", true, display);
    if games.is_empty() {
        output.push_str("No live games available.\n");
        return output;
    }

    let id_width = games.iter().map(|g| g.game_id.len()).max().unwrap_or(0);
    for game in games {
        let mut line = format!("{}  {}", pad_right(&game.game_id, id_width), game.matchup());
        if let Some(time) = game.local_tip_time() {
            line.push_str(&format!("  {}", time));
        }
        output.push_str(&line);
        output.push('\n');
    }
    output
}

pub async fn run(client: &dyn StatsProvider, config: &Config) -> Result<()> {
    let games = client
        .live_games()
        .await
        .context("Failed to fetch live games")?;
    print!("{}", format_live_games(&games, &config.display));
    Ok(())
}
