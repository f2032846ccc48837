/// Fixed column layouts for every table the dashboard renders
///
/// A schema is an ordered list of columns; column order is render order.
/// Keys and titles live together in one `Column` so they can never drift apart.

/// Where a column's raw value lives inside a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// Directly on the record
    TopLevel,
    /// Inside a nested mapping on the record (box-score `statistics`)
    Nested(&'static str),
}

/// Nested mapping holding box-score counting stats
pub const STATISTICS: &str = "statistics";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub title: &'static str,
    pub source: FieldSource,
}

const fn col(key: &'static str, title: &'static str) -> Column {
    Column {
        key,
        title,
        source: FieldSource::TopLevel,
    }
}

const fn stat(key: &'static str, title: &'static str) -> Column {
    Column {
        key,
        title,
        source: FieldSource::Nested(STATISTICS),
    }
}

/// An ordered, named set of columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl FieldSchema {
    pub fn titles(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.title).collect()
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.key).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

pub const CAREER: FieldSchema = FieldSchema {
    name: "career",
    columns: &[
        col("GP", "GP"),
        col("GS", "GS"),
        col("MIN", "MIN"),
        col("PTS", "PTS"),
        col("AST", "AST"),
        col("REB", "REB"),
        col("BLK", "BLK"),
        col("STL", "STL"),
        col("OREB", "OREB"),
        col("DREB", "DREB"),
        col("FGA", "FGA"),
        col("FGM", "FGM"),
        col("FG_PCT", "FG %"),
        col("FTA", "FTA"),
        col("FTM", "FTM"),
        col("FT_PCT", "FT %"),
        col("FG3A", "FG3A"),
        col("FG3M", "FG3M"),
        col("FG3_PCT", "FG3 %"),
        col("PF", "PF"),
        col("TOV", "TOV"),
    ],
};

pub const SEASON: FieldSchema = FieldSchema {
    name: "season",
    columns: &[
        col("PLAYER_AGE", "AGE"),
        col("TEAM_ABBREVIATION", "TEAM"),
        col("SEASON_ID", "SEASON"),
        col("GP", "GP"),
        col("GS", "GS"),
        col("MIN", "MIN"),
        col("PTS", "PTS"),
        col("AST", "AST"),
        col("REB", "REB"),
        col("BLK", "BLK"),
        col("STL", "STL"),
        col("OREB", "OREB"),
        col("DREB", "DREB"),
        col("FGA", "FGA"),
        col("FGM", "FGM"),
        col("FG_PCT", "FG %"),
        col("FTA", "FTA"),
        col("FTM", "FTM"),
        col("FT_PCT", "FT %"),
        col("FG3A", "FG3A"),
        col("FG3M", "FG3M"),
        col("FG3_PCT", "FG3 %"),
        col("PF", "PF"),
        col("TOV", "TOV"),
    ],
};

pub const GAME_LOG: FieldSchema = FieldSchema {
    name: "game_log",
    columns: &[
        col("GAME_DATE", "DATE"),
        col("MATCHUP", "MATCHUP"),
        col("WL", "WL"),
        col("MIN", "MIN"),
        col("PTS", "PTS"),
        col("AST", "AST"),
        col("REB", "REB"),
        col("BLK", "BLK"),
        col("STL", "STL"),
        col("OREB", "OREB"),
        col("DREB", "DREB"),
        col("FGA", "FGA"),
        col("FGM", "FGM"),
        col("FG_PCT", "FG %"),
        col("FTA", "FTA"),
        col("FTM", "FTM"),
        col("FT_PCT", "FT %"),
        col("FG3A", "FG3A"),
        col("FG3M", "FG3M"),
        col("FG3_PCT", "FG3 %"),
        col("PF", "PF"),
        col("TOV", "TOV"),
        col("PLUS_MINUS", "+/-"),
    ],
};

pub const TEAM_GAME: FieldSchema = FieldSchema {
    name: "team_game",
    columns: &[
        col("SEASON_ID", "SEASON"),
        col("GAME_DATE", "DATE"),
        col("MATCHUP", "MATCHUP"),
        col("WL", "WL"),
        col("MIN", "MIN"),
        col("PLUS_MINUS", "+/-"),
    ],
};

/// Shared by the home and away tables of a live game
pub const BOX_SCORE: FieldSchema = FieldSchema {
    name: "box_score",
    columns: &[
        col("jerseyNum", "Jersey #"),
        col("position", "Position"),
        col("played", "Played"),
        col("name", "Name"),
        stat("minutes", "Minutes"),
        stat("points", "Points"),
        stat("assists", "Assists"),
        stat("reboundsTotal", "TRB"),
        stat("reboundsOffensive", "ORB"),
        stat("reboundsDefensive", "DRB"),
        stat("fieldGoalsMade", "FGM"),
        stat("fieldGoalsAttempted", "FGA"),
        stat("fieldGoalsPercentage", "FG %"),
        stat("twoPointersMade", "2PM"),
        stat("twoPointersAttempted", "2PA"),
        stat("twoPointersPercentage", "2P %"),
        stat("threePointersMade", "3PM"),
        stat("threePointersAttempted", "3PA"),
        stat("threePointersPercentage", "3P %"),
        stat("freeThrowsMade", "FTM"),
        stat("freeThrowsAttempted", "FTA"),
        stat("freeThrowsPercentage", "FT %"),
        stat("turnovers", "Turnover"),
        stat("blocks", "Blocks"),
        stat("steals", "Steals"),
        stat("foulsPersonal", "PF"),
        stat("foulsOffensive", "Offensive Fouls"),
        stat("foulsDrawn", "Fouls Drawn"),
        stat("foulsTechnical", "Technical Fouls"),
        stat("pointsFastBreak", "Fast Break PTS"),
        stat("pointsInThePaint", "PTS in paint"),
        stat("pointsSecondChance", "Second Chance PTS"),
        stat("plusMinusPoints", "+/-"),
        stat("plus", "+"),
        stat("minus", "-"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_extends_career() {
        assert_eq!(&SEASON.keys()[3..], &CAREER.keys()[..]);
        assert_eq!(&SEASON.titles()[..3], &["AGE", "TEAM", "SEASON"]);
    }

    #[test]
    fn test_game_log_wraps_offensive_columns() {
        let keys = GAME_LOG.keys();
        assert_eq!(&keys[..3], &["GAME_DATE", "MATCHUP", "WL"]);
        assert_eq!(keys.last(), Some(&"PLUS_MINUS"));
        // offensive block is the career block without GP/GS
        assert_eq!(&keys[3..keys.len() - 1], &CAREER.keys()[2..]);
    }

    #[test]
    fn test_box_score_identity_columns_are_top_level() {
        let top: Vec<_> = BOX_SCORE
            .columns
            .iter()
            .filter(|c| c.source == FieldSource::TopLevel)
            .map(|c| c.key)
            .collect();
        assert_eq!(top, vec!["jerseyNum", "position", "played", "name"]);
        assert_eq!(BOX_SCORE.len(), 35);
    }

    #[test]
    fn test_keys_are_unique_per_schema() {
        for schema in [CAREER, SEASON, GAME_LOG, TEAM_GAME, BOX_SCORE] {
            let mut keys = schema.keys();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), schema.len(), "duplicate key in {}", schema.name);
        }
    }
}
