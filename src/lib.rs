pub mod api;
pub mod commands;
pub mod config;
pub mod formatting;
pub mod stats;
pub mod team_abbrev;
pub mod tui;

#[cfg(any(test, feature = "development"))]
pub mod dev;
#[cfg(any(test, feature = "development"))]
pub mod fixtures;
