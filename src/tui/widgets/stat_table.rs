/// StatTable widget - renders a projected stat table with horizontal scrolling
///
/// Layout: header row, rule, one line per row. Columns before `column_offset`
/// are skipped; columns that do not fit on the right are clipped.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::formatting::{column_widths, pad_right};
use crate::stats::DisplayTable;

use super::{put_str, RenderableWidget};

#[derive(Debug)]
pub struct StatTable {
    pub table: DisplayTable,
    pub column_offset: usize,
    pub focused: bool,
}

impl StatTable {
    pub fn new(table: DisplayTable) -> Self {
        Self {
            table,
            column_offset: 0,
            focused: false,
        }
    }

    pub fn with_column_offset(mut self, column_offset: usize) -> Self {
        self.column_offset = column_offset;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn header_style(&self, config: &DisplayConfig) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if self.focused {
            style.fg(config.selection_fg)
        } else {
            style
        }
    }
}

impl RenderableWidget for StatTable {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let widths = column_widths(&self.table);
        let first = self.column_offset.min(widths.len().saturating_sub(1));
        let separator = format!(" {} ", config.box_chars.vertical);
        let rule_joint = format!(
            "{}{}{}",
            config.box_chars.horizontal, config.box_chars.cross, config.box_chars.horizontal
        );

        let render_line = |buf: &mut Buffer, y: u16, cells: Vec<String>, joint: &str, style: Style| {
            let mut x = area.x;
            for (i, cell) in cells.iter().enumerate() {
                if i > 0 {
                    x = put_str(buf, area, x, y, joint, style);
                }
                x = put_str(buf, area, x, y, cell, style);
                if x >= area.right() {
                    break;
                }
            }
        };

        let headers: Vec<String> = self.table.headers[first..]
            .iter()
            .zip(&widths[first..])
            .map(|(h, w)| pad_right(h, *w))
            .collect();
        render_line(buf, area.y, headers, &separator, self.header_style(config));

        let rule: Vec<String> = widths[first..]
            .iter()
            .map(|w| config.box_chars.horizontal.repeat(*w))
            .collect();
        render_line(buf, area.y + 1, rule, &rule_joint, Style::default());

        for (r, row) in self.table.rows.iter().enumerate() {
            let y = area.y + 2 + r as u16;
            if y >= area.bottom() {
                break;
            }
            let cells: Vec<String> = (first..widths.len())
                .map(|c| pad_right(row.get(c).map(String::as_str).unwrap_or(""), widths[c]))
                .collect();
            render_line(buf, y, cells, &separator, Style::default());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        let rows = u16::try_from(self.table.rows.len()).unwrap_or(u16::MAX);
        Some(rows.saturating_add(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::*;

    fn table() -> DisplayTable {
        DisplayTable {
            headers: vec!["GP", "PTS", "FG%"],
            rows: vec![
                vec!["82".to_string(), "2251".to_string(), "50.6%".to_string()],
                vec!["5".to_string(), "".to_string(), "45.0%".to_string()],
            ],
        }
    }

    #[test]
    fn test_renders_header_rule_and_rows() {
        let widget = StatTable::new(table());
        let buf = render_widget_with_config(&widget, 30, 4, &test_config_ascii());

        assert_buffer(
            &buf,
            &[
                "GP | PTS  | FG%",
                "---+------+------",
                "82 | 2251 | 50.6%",
                "5  |      | 45.0%",
            ],
        );
    }

    #[test]
    fn test_column_offset_skips_leading_columns() {
        let widget = StatTable::new(table()).with_column_offset(2);
        let buf = render_widget_with_config(&widget, 30, 4, &test_config_ascii());

        assert_eq!(buffer_line(&buf, 0), "FG%");
        assert_eq!(buffer_line(&buf, 2), "50.6%");
    }

    #[test]
    fn test_clips_at_right_edge() {
        let widget = StatTable::new(table());
        let buf = render_widget_with_config(&widget, 8, 4, &test_config_ascii());

        assert_eq!(buffer_line(&buf, 2), "82 | 225");
    }

    #[test]
    fn test_preferred_height() {
        assert_eq!(StatTable::new(table()).preferred_height(), Some(4));

        let huge = DisplayTable {
            headers: vec!["GP"],
            rows: vec![Vec::new(); 70_000],
        };
        assert_eq!(StatTable::new(huge).preferred_height(), Some(u16::MAX));
    }

    #[test]
    fn test_focused_header_uses_selection_color() {
        let widget = StatTable::new(table()).focused(true);
        let buf = render_widget(&widget, 30, 4);

        assert_eq!(buf[(0, 0)].fg, test_config().selection_fg);
        assert_ne!(buf[(0, 2)].fg, test_config().selection_fg);
    }
}
