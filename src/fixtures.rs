/// Sample backend payloads for the mock client and tests
///
/// Payloads are built in the same encodings the backend uses, then run through
/// the boundary adapter, so fixtures exercise the real decoding path.
use serde_json::{json, Map, Value};

use crate::api::{GameDetails, LiveGameSummary, SeasonType};
use crate::stats::{records_from_payload, StatRecord};

const OFFENSIVE_FIELDS: [&str; 19] = [
    "MIN", "PTS", "AST", "REB", "BLK", "STL", "OREB", "DREB", "FGA", "FGM", "FG_PCT", "FTA",
    "FTM", "FT_PCT", "FG3A", "FG3M", "FG3_PCT", "PF", "TOV",
];

/// Deterministic stat value for a field in a given row
fn sample_value(field: &str, row: usize) -> Value {
    if field.ends_with("_PCT") {
        json!(0.4 + (row % 5) as f64 * 0.025)
    } else {
        json!(10 + row * 3 + field.len())
    }
}

/// Column-oriented `/get_stats` body with `rows` seasons
pub fn season_stats_payload(rows: usize) -> Value {
    let mut columns = Map::new();
    let index_map = |f: &dyn Fn(usize) -> Value| -> Value {
        Value::Object((0..rows).map(|i| (i.to_string(), f(i))).collect())
    };

    columns.insert("PLAYER_ID".into(), index_map(&|_| json!(2544)));
    columns.insert(
        "SEASON_ID".into(),
        index_map(&|i| json!(format!("2{}", 2003 + i))),
    );
    columns.insert("PLAYER_AGE".into(), index_map(&|i| json!(19 + i)));
    columns.insert("TEAM_ABBREVIATION".into(), index_map(&|_| json!("LAL")));
    columns.insert("GP".into(), index_map(&|_| json!(82)));
    columns.insert("GS".into(), index_map(&|_| json!(80)));
    for field in OFFENSIVE_FIELDS {
        columns.insert(field.into(), index_map(&|i| sample_value(field, i)));
    }
    Value::Object(columns)
}

/// Column-oriented single-row `/get_stats` career body
pub fn career_stats_payload() -> Value {
    let mut columns = Map::new();
    columns.insert("PLAYER_ID".into(), json!({"0": 2544}));
    columns.insert("GP".into(), json!({"0": 1421}));
    columns.insert("GS".into(), json!({"0": 1420}));
    for field in OFFENSIVE_FIELDS {
        columns.insert(field.into(), json!({"0": sample_value(field, 0)}));
    }
    columns.insert("FG_PCT".into(), json!({"0": 0.506}));
    Value::Object(columns)
}

/// `/get_game_logs` body as a list of records, most recent first
pub fn game_logs_payload(rows: usize) -> Value {
    let games: Vec<Value> = (0..rows)
        .map(|i| {
            let mut game = Map::new();
            game.insert("PLAYER_ID".into(), json!(2544));
            game.insert("GAME_DATE".into(), json!(format!("APR {:02}, 2023", 28 - i)));
            game.insert("MATCHUP".into(), json!(if i % 2 == 0 { "LAL vs. MEM" } else { "LAL @ MEM" }));
            game.insert("WL".into(), json!(if i % 3 == 0 { "L" } else { "W" }));
            game.insert("PLUS_MINUS".into(), json!(i as i64 - 4));
            for field in OFFENSIVE_FIELDS {
                game.insert(field.into(), sample_value(field, i));
            }
            Value::Object(game)
        })
        .collect();
    Value::Array(games)
}

/// `/get_team_games` body for one season type
pub fn team_games_payload(team: &str, season_type: SeasonType) -> Value {
    let count = match season_type {
        SeasonType::RegularSeason => 12,
        SeasonType::Playoffs => 6,
        SeasonType::PreSeason => 4,
        SeasonType::PlayIn => 0,
    };
    let season_prefix = match season_type {
        SeasonType::RegularSeason => "2",
        SeasonType::Playoffs => "4",
        SeasonType::PreSeason => "1",
        SeasonType::PlayIn => "5",
    };
    let abbrev = team.chars().take(3).collect::<String>().to_uppercase();
    let games: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "SEASON_ID": format!("{}2022", season_prefix),
                "GAME_DATE": format!("2023-04-{:02}", 9 - (i % 9)),
                "MATCHUP": format!("{} vs. BOS", abbrev),
                "WL": if i % 2 == 0 { "W" } else { "L" },
                "MIN": 240,
                "PLUS_MINUS": i as i64 - 3
            })
        })
        .collect();
    Value::Array(games)
}

pub fn season_stats(rows: usize) -> Vec<StatRecord> {
    records_from_payload(&season_stats_payload(rows))
}

pub fn career_stats() -> Vec<StatRecord> {
    records_from_payload(&career_stats_payload())
}

pub fn game_logs(rows: usize) -> Vec<StatRecord> {
    records_from_payload(&game_logs_payload(rows))
}

pub fn team_games(team: &str, season_type: SeasonType) -> Vec<StatRecord> {
    records_from_payload(&team_games_payload(team, season_type))
}

pub fn live_games() -> Vec<LiveGameSummary> {
    serde_json::from_value(json!([
        {"gameId": "0022000207", "awayTeam": "Spurs", "homeTeam": "Trail Blazers",
         "gameTimeUTC": "2021-01-18T20:00:00Z"},
        {"gameId": "0022000205", "awayTeam": "Timberwolves", "homeTeam": "Hawks",
         "gameTimeUTC": "2021-01-18T19:30:00Z"},
        {"gameId": "0022000203", "awayTeam": "Magic", "homeTeam": "Knicks",
         "gameTimeUTC": "2021-01-18T17:00:00Z"}
    ]))
    .unwrap_or_default()
}

fn box_score_player(person_id: i64, jersey: &str, position: &str, name: &str, points: i64) -> Value {
    json!({
        "personId": person_id,
        "jerseyNum": jersey,
        "position": position,
        "played": if points > 0 { "1" } else { "0" },
        "name": name,
        "statistics": {
            "minutes": if points > 0 { "PT31M07.00S" } else { "PT00M00.00S" },
            "points": points,
            "assists": 4,
            "reboundsTotal": 7,
            "reboundsOffensive": 2,
            "reboundsDefensive": 5,
            "fieldGoalsMade": points / 2,
            "fieldGoalsAttempted": points,
            "fieldGoalsPercentage": if points > 0 { 0.5 } else { 0.0 },
            "twoPointersMade": 3,
            "twoPointersAttempted": 6,
            "twoPointersPercentage": 0.5,
            "threePointersMade": 1,
            "threePointersAttempted": 4,
            "threePointersPercentage": 0.25,
            "freeThrowsMade": 2,
            "freeThrowsAttempted": 2,
            "freeThrowsPercentage": 1.0,
            "turnovers": 1,
            "blocks": 0,
            "steals": 1,
            "foulsPersonal": 2,
            "foulsOffensive": 0,
            "foulsDrawn": 3,
            "foulsTechnical": 0,
            "pointsFastBreak": 2,
            "pointsInThePaint": 6,
            "pointsSecondChance": 0,
            "plusMinusPoints": 5.0,
            "plus": 60.0,
            "minus": 55.0
        }
    })
}

pub fn game_details(game_id: &str) -> GameDetails {
    serde_json::from_value(json!({
        "gameId": game_id,
        "homeTeam": {
            "teamName": "Trail Blazers",
            "score": 125,
            "players": [
                box_score_player(203081, "0", "G", "Damian Lillard", 34),
                box_score_player(203468, "3", "G", "CJ McCollum", 21),
                box_score_player(1629014, "35", "", "Anfernee Simons", 0)
            ]
        },
        "awayTeam": {
            "teamName": "Spurs",
            "score": 104,
            "players": [
                box_score_player(201942, "10", "F", "DeMar DeRozan", 20),
                box_score_player(1627749, "5", "G", "Dejounte Murray", 14)
            ]
        }
    }))
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shapes() {
        assert_eq!(season_stats(12).len(), 12);
        assert_eq!(career_stats().len(), 1);
        assert_eq!(game_logs(8).len(), 8);
        assert_eq!(team_games("Raptors", SeasonType::RegularSeason).len(), 12);
        assert!(team_games("Raptors", SeasonType::PlayIn).is_empty());
        assert_eq!(live_games().len(), 3);
    }

    #[test]
    fn test_game_details_fixture_decodes() {
        let details = game_details("0022000207");
        assert_eq!(details.game_id.as_deref(), Some("0022000207"));
        assert_eq!(details.home_team.unwrap().players.len(), 3);
        assert_eq!(details.away_team.unwrap().team_name, "Spurs");
    }
}
