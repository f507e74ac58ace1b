//! Formatting utilities for terminal output

use crate::core::Decomposition;

/// Format a witness as its pieces joined by `·`
///
/// Non-madison results format as an empty string.
#[must_use]
pub fn witness_to_string(decomposition: &Decomposition) -> String {
    decomposition.witness().join("·")
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

/// Format the madison ratio as a bar of the given width
#[must_use]
pub fn ratio_bar(ratio: f64, width: usize) -> String {
    create_progress_bar(ratio, 1.0, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn witness_joins_pieces() {
        let decomposition = Decomposition::madison(vec!["no".into(), "thing".into()]);
        assert_eq!(witness_to_string(&decomposition), "no·thing");
    }

    #[test]
    fn witness_of_non_madison_is_empty() {
        assert_eq!(witness_to_string(&Decomposition::not_madison()), "");
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
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }

    #[test]
    fn ratio_bar_half() {
        assert_eq!(ratio_bar(0.5, 10), "█████░░░░░");
    }
}
