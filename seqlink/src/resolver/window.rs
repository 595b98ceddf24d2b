//! Padded coordinate window for locus-browser links.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::HitCoordinates;

/// Default number of positions added on each side of a hit.
pub const DEFAULT_WINDOW_PADDING: u64 = 5000;

/// The region shown around a hit in the locus browser.
///
/// `from` never drops below 1. `to` is not clamped against the sequence
/// length; the browser handles regions past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateWindow {
    /// First position shown.
    pub from: u64,
    /// Last position shown.
    pub to: u64,
}

impl CoordinateWindow {
    /// Pads `coordinates` by `padding` on both sides.
    #[must_use]
    pub const fn around(coordinates: HitCoordinates, padding: u64) -> Self {
        let from = coordinates.start.saturating_sub(padding);
        Self {
            from: if from < 1 { 1 } else { from },
            to: coordinates.end.saturating_add(padding),
        }
    }
}

impl fmt::Display for CoordinateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_from_to_one() {
        let window = CoordinateWindow::around(HitCoordinates::new(10, 20), DEFAULT_WINDOW_PADDING);
        assert_eq!(window, CoordinateWindow { from: 1, to: 5020 });
        assert_eq!(window.to_string(), "1..5020");
    }

    #[test]
    fn test_from_is_one_for_any_start_up_to_padding() {
        for start in [1, 2, 999, 4999, 5000] {
            let window =
                CoordinateWindow::around(HitCoordinates::new(start, start + 10), DEFAULT_WINDOW_PADDING);
            assert_eq!(window.from, 1, "start: {start}");
        }
    }

    #[test]
    fn test_unclamped_window() {
        let window = CoordinateWindow::around(HitCoordinates::new(12_000, 12_500), DEFAULT_WINDOW_PADDING);
        assert_eq!(window, CoordinateWindow { from: 7000, to: 17_500 });
    }

    #[test]
    fn test_first_position_after_padding() {
        let window = CoordinateWindow::around(HitCoordinates::new(5001, 5001), DEFAULT_WINDOW_PADDING);
        assert_eq!(window.from, 1);

        let window = CoordinateWindow::around(HitCoordinates::new(5002, 5002), DEFAULT_WINDOW_PADDING);
        assert_eq!(window.from, 2);
    }

    #[test]
    fn test_saturates_at_extremes() {
        let window = CoordinateWindow::around(HitCoordinates::new(0, u64::MAX), DEFAULT_WINDOW_PADDING);
        assert_eq!(window.from, 1);
        assert_eq!(window.to, u64::MAX);
    }

    #[test]
    fn test_custom_padding() {
        let window = CoordinateWindow::around(HitCoordinates::new(300, 400), 100);
        assert_eq!(window.to_string(), "200..500");
    }
}
