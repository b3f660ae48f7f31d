//! Formatting utilities for terminal output

use crate::view::Slot;

/// Appended to the mistakes line when one more mistake loses the round
pub const ALMOST_LOST_MARK: &str = "⚠";

/// Word slots separated by spaces, e.g. `a _ _ o m`
#[must_use]
pub fn spaced_slots(slots: &[Slot]) -> String {
    let glyphs: Vec<String> = slots.iter().map(|s| s.glyph().to_string()).collect();
    glyphs.join(" ")
}

/// Mistakes as a comma-separated list, e.g. `q,z`
#[must_use]
pub fn mistake_list(mistakes: &[char]) -> String {
    let listed: Vec<String> = mistakes.iter().map(char::to_string).collect();
    listed.join(",")
}

/// One mark per allowed mistake: filled for used, hollow for remaining
#[must_use]
pub fn mistakes_gauge(used: usize, max: usize) -> String {
    let used = used.min(max);
    format!("{}{}", "●".repeat(used), "○".repeat(max - used))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_slots_masks_hidden() {
        let slots = [
            Slot::Revealed('a'),
            Slot::Hidden,
            Slot::Hidden,
            Slot::Revealed('o'),
            Slot::Hidden,
        ];
        assert_eq!(spaced_slots(&slots), "a _ _ o _");
    }

    #[test]
    fn mistake_list_joins_with_commas() {
        assert_eq!(mistake_list(&[]), "");
        assert_eq!(mistake_list(&['z']), "z");
        assert_eq!(mistake_list(&['z', 'q', 'w']), "z,q,w");
    }

    #[test]
    fn mistakes_gauge_fills_left_to_right() {
        assert_eq!(mistakes_gauge(0, 3), "○○○");
        assert_eq!(mistakes_gauge(2, 3), "●●○");
        assert_eq!(mistakes_gauge(3, 3), "●●●");
        assert_eq!(mistakes_gauge(5, 3), "●●●");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
