pub mod boxscore;
pub mod live;
pub mod player;
pub mod team;

use crate::config::DisplayConfig;
use crate::formatting::{format_header, format_table};
use crate::stats::DisplayTable;

/// Append a titled table, or nothing when the table has no rows
pub(crate) fn push_section(
    output: &mut String,
    title: &str,
    table: &DisplayTable,
    display: &DisplayConfig,
) {
    if table.is_empty() {
        return;
    }
    output.push_str(&format!("\n{}", format_header(title, false, display)));
    output.push_str(&format_table(table, display));
}
