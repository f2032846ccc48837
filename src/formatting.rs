use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::stats::DisplayTable;

/// Box-drawing characters for table borders
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub cross: String,
    pub selector: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            cross: "┼".to_string(),
            selector: "►".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            cross: "+".to_string(),
            selector: ">".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Format a header with text and an underline of matching display width
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Display width of each column: the widest of its header and cells
pub fn column_widths(table: &DisplayTable) -> Vec<usize> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Pad text on the right to a display width
pub fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Render a whole table as aligned plain text with a header separator
pub fn format_table(table: &DisplayTable, display: &DisplayConfig) -> String {
    let widths = column_widths(table);
    let separator = format!(" {} ", display.box_chars.vertical);
    let mut output = String::new();

    let header_cells: Vec<String> = table
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad_right(h, *w))
        .collect();
    output.push_str(header_cells.join(&separator).trim_end());
    output.push('\n');

    let rule: Vec<String> = widths
        .iter()
        .map(|w| display.box_chars.horizontal.repeat(*w))
        .collect();
    let rule_joint = format!(
        "{}{}{}",
        display.box_chars.horizontal, display.box_chars.cross, display.box_chars.horizontal
    );
    output.push_str(&rule.join(&rule_joint));
    output.push('\n');

    for row in &table.rows {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| pad_right(row.get(i).map(String::as_str).unwrap_or(""), *w))
            .collect();
        output.push_str(cells.join(&separator).trim_end());
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii_display() -> DisplayConfig {
        DisplayConfig {
            use_unicode: false,
            box_chars: BoxChars::ascii(),
            ..Default::default()
        }
    }

    fn sample_table() -> DisplayTable {
        DisplayTable {
            headers: vec!["Name", "PTS"],
            rows: vec![
                vec!["Nikola Jokić".to_string(), "24".to_string()],
                vec!["Bol".to_string(), "".to_string()],
            ],
        }
    }

    #[test]
    fn test_format_header_unicode() {
        let display = DisplayConfig::default();
        assert_eq!(format_header("Game Logs", false, &display), "Game Logs\n─────────\n");
        assert_eq!(format_header("Game Logs", true, &display), "Game Logs\n═════════\n");
    }

    #[test]
    fn test_column_widths_use_display_width() {
        assert_eq!(column_widths(&sample_table()), vec![12, 3]);
    }

    #[test]
    fn test_format_table_ascii() {
        let text = format_table(&sample_table(), &ascii_display());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Name         | PTS");
        assert_eq!(lines[1], "-------------+----");
        assert_eq!(lines[2], "Nikola Jokić | 24");
        assert_eq!(lines[3], "Bol          |");
    }

    #[test]
    fn test_format_table_without_rows() {
        let table = DisplayTable {
            headers: vec!["GP"],
            rows: vec![],
        };
        assert_eq!(format_table(&table, &ascii_display()), "GP\n--\n");
    }
}
