//! Formatting utilities for terminal output

/// Render chance stars: lit ones as ★, spent ones as ☆
#[must_use]
pub fn stars_line(stars: &[bool]) -> String {
    stars
        .iter()
        .map(|&lit| if lit { '★' } else { '☆' })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Show how blurred the poster still is
#[must_use]
pub fn blur_bar(blur: f32, max_blur: f32, width: usize) -> String {
    create_progress_bar(f64::from(blur), f64::from(max_blur), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_line_mixed() {
        assert_eq!(stars_line(&[true, true, false]), "★★☆");
        assert_eq!(stars_line(&[]), "");
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
        assert_eq!(create_progress_bar(5.0, 0.0, 3), "░░░");
    }

    #[test]
    fn blur_bar_tracks_blur() {
        assert_eq!(blur_bar(55.0, 55.0, 5), "█████");
        assert_eq!(blur_bar(1.0, 55.0, 5), "░░░░░");
    }
}
