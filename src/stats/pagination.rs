/// Row pagination strategies for stat tables
///
/// Two policies coexist on purpose and are kept separate:
///
/// - `ExpandToggle`: "Show More" reveals every row, "Show Less" returns to the
///   default count. Used by the player season and game-log tables.
/// - `StepPager`: each "Show More" reveals `DEFAULT_STEP` more rows and there
///   is no way back. Used by the four team season-type tables.

/// Rows visible before any show-more action
pub const DEFAULT_VISIBLE: usize = 5;

/// Rows added per show-more action on a stepped table
pub const DEFAULT_STEP: usize = 5;

/// Common interface of the pagination policies
pub trait Paginate {
    /// Number of rows to show out of `total`
    fn visible_count(&self, total: usize) -> usize;

    /// Apply the table's show-more control
    fn advance(&mut self);

    /// Label for the show-more control given the total row count
    fn control_label(&self, total: usize) -> &'static str;

    /// Whether the policy can shrink back after showing more
    fn can_collapse(&self) -> bool;

    /// Visible prefix of the full sequence, never padded
    fn visible_prefix<'a, T>(&self, all: &'a [T]) -> &'a [T] {
        &all[..self.visible_count(all.len())]
    }
}

/// Boolean show-more/show-less pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandToggle {
    expanded: bool,
    collapsed_count: usize,
}

impl Default for ExpandToggle {
    fn default() -> Self {
        Self {
            expanded: false,
            collapsed_count: DEFAULT_VISIBLE,
        }
    }
}

impl ExpandToggle {
    pub fn new(collapsed_count: usize) -> Self {
        Self {
            expanded: false,
            collapsed_count,
        }
    }

    /// Flip between all rows and the collapsed count
    pub fn expand(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

impl Paginate for ExpandToggle {
    fn visible_count(&self, total: usize) -> usize {
        if self.expanded {
            total
        } else {
            total.min(self.collapsed_count)
        }
    }

    fn advance(&mut self) {
        self.expand();
    }

    fn control_label(&self, _total: usize) -> &'static str {
        if self.expanded {
            "Show Less"
        } else {
            "Show More"
        }
    }

    fn can_collapse(&self) -> bool {
        true
    }
}

/// Monotonic show-more pagination with no collapse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPager {
    visible: usize,
    step: usize,
}

impl Default for StepPager {
    fn default() -> Self {
        Self {
            visible: DEFAULT_VISIBLE,
            step: DEFAULT_STEP,
        }
    }
}

impl StepPager {
    pub fn new(visible: usize, step: usize) -> Self {
        Self { visible, step }
    }

    /// Grow the visible count; it is allowed to run past the row count
    pub fn increment_by(&mut self, n: usize) {
        self.visible = self.visible.saturating_add(n);
    }

    pub fn visible(&self) -> usize {
        self.visible
    }
}

impl Paginate for StepPager {
    fn visible_count(&self, total: usize) -> usize {
        total.min(self.visible)
    }

    fn advance(&mut self) {
        self.increment_by(self.step);
    }

    fn control_label(&self, total: usize) -> &'static str {
        if self.visible >= total {
            "All Shown"
        } else {
            "Show More"
        }
    }

    fn can_collapse(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twelve() -> Vec<u32> {
        (1..=12).collect()
    }

    #[test]
    fn test_expand_toggle_round_trip() {
        let all = twelve();
        let mut pager = ExpandToggle::default();

        assert_eq!(pager.visible_prefix(&all).len(), 5);
        pager.expand();
        assert_eq!(pager.visible_prefix(&all).len(), 12);
        pager.expand();
        assert_eq!(pager.visible_prefix(&all).len(), 5);
    }

    #[test]
    fn test_expand_toggle_keeps_order() {
        let all = twelve();
        let pager = ExpandToggle::default();
        assert_eq!(pager.visible_prefix(&all), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_step_pager_grows_and_caps() {
        let all = twelve();
        let mut pager = StepPager::default();

        assert_eq!(pager.visible_prefix(&all).len(), 5);
        pager.increment_by(5);
        assert_eq!(pager.visible_prefix(&all).len(), 10);
        pager.increment_by(5);
        assert_eq!(pager.visible_prefix(&all).len(), 12);
        assert_eq!(pager.visible(), 15);
    }

    #[test]
    fn test_step_pager_advance_never_collapses() {
        let all = twelve();
        let mut pager = StepPager::default();
        for _ in 0..5 {
            pager.advance();
        }
        assert_eq!(pager.visible_prefix(&all).len(), 12);
        assert_eq!(pager.control_label(all.len()), "All Shown");
    }

    #[test]
    fn test_short_sequence_is_not_padded() {
        let all = vec!['a', 'b'];
        assert_eq!(ExpandToggle::default().visible_prefix(&all), &['a', 'b']);
        assert_eq!(StepPager::default().visible_prefix(&all), &['a', 'b']);
        let empty: Vec<u8> = Vec::new();
        assert!(StepPager::default().visible_prefix(&empty).is_empty());
    }

    #[test]
    fn test_control_labels() {
        let mut toggle = ExpandToggle::default();
        assert_eq!(toggle.control_label(12), "Show More");
        toggle.advance();
        assert_eq!(toggle.control_label(12), "Show Less");
        assert!(toggle.is_expanded());
    }
}
