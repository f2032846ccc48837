/// Scroll rendering utilities - stacks widgets vertically inside a viewport
///
/// The scroll offset is derived from an anchor range of widgets that must be
/// visible (usually the focused table and its header), so no scroll state
/// needs to be kept between frames.
use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

/// Height used for widgets that do not state a preference
const DEFAULT_WIDGET_HEIGHT: u16 = 1;

/// Scroll offset that brings `anchor` (inclusive widget index range) into view
///
/// The anchor's top wins when the anchor is taller than the viewport.
pub fn anchor_offset(heights: &[u16], anchor: Option<(usize, usize)>, viewport: u16) -> u16 {
    let Some((first, last)) = anchor else {
        return 0;
    };
    let top: u16 = heights.iter().take(first).sum();
    let bottom: u16 = heights.iter().take(last + 1).sum();
    bottom.saturating_sub(viewport).min(top)
}

/// Render widgets top to bottom, scrolled so the anchor range is visible
pub fn render_scrollable_widgets(
    widgets: &[Box<dyn RenderableWidget + '_>],
    anchor: Option<(usize, usize)>,
    area: Rect,
    buf: &mut Buffer,
    config: &DisplayConfig,
) {
    let heights: Vec<u16> = widgets
        .iter()
        .map(|w| w.preferred_height().unwrap_or(DEFAULT_WIDGET_HEIGHT))
        .collect();
    let scroll_offset = anchor_offset(&heights, anchor, area.height) as i32;

    let mut y = area.y as i32 - scroll_offset;
    for (widget, height) in widgets.iter().zip(heights) {
        let top = y;
        y += height as i32;
        if y <= area.y as i32 || top >= area.bottom() as i32 {
            continue;
        }

        if top >= area.y as i32 {
            let visible = height.min(area.bottom() - top as u16);
            let widget_area = Rect::new(area.x, top as u16, area.width, visible);
            widget.render(widget_area, buf, config);
        } else {
            // Partly scrolled off the top: render whole, then copy the visible rows
            let mut scratch = Buffer::empty(Rect::new(0, 0, area.width, height));
            widget.render(scratch.area, &mut scratch, config);
            let skipped = (area.y as i32 - top) as u16;
            let rows = (height - skipped).min(area.height);
            for row in 0..rows {
                for col in 0..area.width {
                    buf[(area.x + col, area.y + row)] = scratch[(col, skipped + row)].clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::*;
    use crate::tui::widgets::TextLine;

    fn lines(n: usize) -> Vec<Box<dyn RenderableWidget>> {
        (0..n)
            .map(|i| Box::new(TextLine::new(format!("line {}", i))) as Box<dyn RenderableWidget>)
            .collect()
    }

    fn render(widgets: &[Box<dyn RenderableWidget>], anchor: Option<(usize, usize)>, height: u16) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, height));
        render_scrollable_widgets(widgets, anchor, buf.area, &mut buf, &test_config());
        buf
    }

    #[test]
    fn test_anchor_offset() {
        let heights = [1, 2, 5, 3];
        assert_eq!(anchor_offset(&heights, None, 4), 0);
        // Already visible
        assert_eq!(anchor_offset(&heights, Some((1, 1)), 4), 0);
        // Bottom aligned
        assert_eq!(anchor_offset(&heights, Some((3, 3)), 8), 3);
        // Taller than the viewport: top aligned
        assert_eq!(anchor_offset(&heights, Some((2, 3)), 4), 3);
    }

    #[test]
    fn test_without_anchor_renders_from_top() {
        let buf = render(&lines(5), None, 3);
        assert_buffer(&buf, &["line 0", "line 1", "line 2"]);
    }

    #[test]
    fn test_anchor_scrolls_into_view() {
        let buf = render(&lines(5), Some((4, 4)), 3);
        assert_buffer(&buf, &["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_partially_hidden_widget_shows_its_lower_rows() {
        let widgets: Vec<Box<dyn RenderableWidget>> = vec![
            Box::new(TextLine::new("a")),
            Box::new(TextLine::new("b")),
            Box::new(crate::tui::widgets::StatTable::new(crate::stats::DisplayTable {
                headers: vec!["GP"],
                rows: vec![vec!["1".to_string()], vec!["2".to_string()]],
            })),
            Box::new(TextLine::new("c")),
        ];
        // Anchor on the last line with a 3-line viewport: offset 3 cuts the
        // table's header and rule
        let buf = render(&widgets, Some((3, 3)), 3);
        assert_buffer(&buf, &["1", "2", "c"]);
    }
}
