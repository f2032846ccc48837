pub mod live;
pub mod navigation;
pub mod player;
pub mod team;

pub use live::reduce_live;
pub use navigation::reduce_navigation;
pub use player::reduce_player;
pub use team::reduce_team;

/// Move a column offset by `delta`, keeping at least one column visible
pub(crate) fn scroll_offset(offset: usize, delta: isize, column_count: usize) -> usize {
    let max = column_count.saturating_sub(1);
    offset.saturating_add_signed(delta).min(max)
}

/// Next entry of a focus ring, wrapping around; unknown entries restart at 0
pub(crate) fn cycle<T: PartialEq + Copy>(ring: &[T], current: T, forward: bool) -> Option<T> {
    if ring.is_empty() {
        return None;
    }
    let len = ring.len();
    let next = match ring.iter().position(|f| *f == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None => 0,
    };
    Some(ring[next])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_clamps() {
        assert_eq!(scroll_offset(0, -1, 10), 0);
        assert_eq!(scroll_offset(3, 2, 10), 5);
        assert_eq!(scroll_offset(8, 5, 10), 9);
        assert_eq!(scroll_offset(0, 1, 0), 0);
    }

    #[test]
    fn test_cycle_wraps() {
        let ring = [1, 2, 3];
        assert_eq!(cycle(&ring, 3, true), Some(1));
        assert_eq!(cycle(&ring, 1, false), Some(3));
        assert_eq!(cycle(&ring, 9, true), Some(1));
        assert_eq!(cycle::<u8>(&[], 0, true), None);
    }
}
