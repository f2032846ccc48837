/// NBA team abbreviation lookup
///
/// The backend only matches full or partial team names, so official
/// abbreviations typed into the Team search are expanded here first.
use phf::phf_map;

static TEAMS_BY_ABBREV: phf::Map<&'static str, &'static str> = phf_map! {
    "ATL" => "Atlanta Hawks",
    "BOS" => "Boston Celtics",
    "BKN" => "Brooklyn Nets",
    "CHA" => "Charlotte Hornets",
    "CHI" => "Chicago Bulls",
    "CLE" => "Cleveland Cavaliers",
    "DAL" => "Dallas Mavericks",
    "DEN" => "Denver Nuggets",
    "DET" => "Detroit Pistons",
    "GSW" => "Golden State Warriors",
    "HOU" => "Houston Rockets",
    "IND" => "Indiana Pacers",
    "LAC" => "Los Angeles Clippers",
    "LAL" => "Los Angeles Lakers",
    "MEM" => "Memphis Grizzlies",
    "MIA" => "Miami Heat",
    "MIL" => "Milwaukee Bucks",
    "MIN" => "Minnesota Timberwolves",
    "NOP" => "New Orleans Pelicans",
    "NYK" => "New York Knicks",
    "OKC" => "Oklahoma City Thunder",
    "ORL" => "Orlando Magic",
    "PHI" => "Philadelphia 76ers",
    "PHX" => "Phoenix Suns",
    "POR" => "Portland Trail Blazers",
    "SAC" => "Sacramento Kings",
    "SAS" => "San Antonio Spurs",
    "TOR" => "Toronto Raptors",
    "UTA" => "Utah Jazz",
    "WAS" => "Washington Wizards",
};

/// Full team name for an official abbreviation (case-insensitive)
pub fn abbrev_to_team_name(abbrev: &str) -> Option<&'static str> {
    let key = abbrev.trim().to_ascii_uppercase();
    TEAMS_BY_ABBREV.get(key.as_str()).copied()
}

/// Normalize Team search input: abbreviations expand, anything else is trimmed
pub fn resolve_team_query(input: &str) -> String {
    match abbrev_to_team_name(input) {
        Some(name) => name.to_string(),
        None => input.trim().to_string(),
    }
}
