/// Core type definitions shared across the TUI
use crate::api::SeasonType;
use crate::stats::schema::{self, FieldSchema};

/// Tab enum for main navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Player,
    Team,
    Live,
}

impl Tab {
    pub fn all() -> [Tab; 3] {
        [Tab::Player, Tab::Team, Tab::Live]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Player => "Player Search",
            Tab::Team => "Team Search",
            Tab::Live => "Live Games",
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Player => Tab::Team,
            Tab::Team => Tab::Live,
            Tab::Live => Tab::Player,
        }
    }

    pub fn prev(self) -> Tab {
        match self {
            Tab::Player => Tab::Live,
            Tab::Team => Tab::Player,
            Tab::Live => Tab::Team,
        }
    }
}

/// Independently fetched slices of the Player screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlice {
    Career,
    Season,
    GameLogs,
}

impl PlayerSlice {
    pub const ALL: [PlayerSlice; 3] = [PlayerSlice::Career, PlayerSlice::Season, PlayerSlice::GameLogs];

    pub fn label(&self) -> &'static str {
        match self {
            PlayerSlice::Career => "career stats",
            PlayerSlice::Season => "season stats",
            PlayerSlice::GameLogs => "game logs",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PlayerSlice::Career => "Player Career Stats",
            PlayerSlice::Season => "Player Season Stats",
            PlayerSlice::GameLogs => "Player Game Logs",
        }
    }

    pub fn schema(&self) -> &'static FieldSchema {
        match self {
            PlayerSlice::Career => &schema::CAREER,
            PlayerSlice::Season => &schema::SEASON,
            PlayerSlice::GameLogs => &schema::GAME_LOG,
        }
    }

    /// Whether the table has a show-more control
    pub fn is_paginated(&self) -> bool {
        !matches!(self, PlayerSlice::Career)
    }
}

/// What has keyboard focus inside the Player screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerFocus {
    #[default]
    Input,
    Table(PlayerSlice),
}

/// What has keyboard focus inside the Team screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamFocus {
    #[default]
    Input,
    Table(SeasonType),
}

/// What has keyboard focus inside the Live screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiveFocus {
    #[default]
    GameList,
    Details(Side),
}

/// Home or away side of a box score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::Home => 0,
            Side::Away => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Player.next(), Tab::Team);
        assert_eq!(Tab::Live.next(), Tab::Player);
        assert_eq!(Tab::Player.prev(), Tab::Live);
        for tab in Tab::all() {
            assert_eq!(tab.next().prev(), tab);
        }
    }
}
