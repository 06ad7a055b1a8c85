//! Helper functions and constants for UI rendering

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Spinner frames for loading indicators
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for the given tick count
pub fn spinner_frame(tick_count: u64) -> &'static str {
    SPINNER_FRAMES[(tick_count as usize / 4) % SPINNER_FRAMES.len()]
}

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Truncate to a display width, ending in "..." when cut.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Radio marker for an option row
pub fn radio_marker(selected: bool) -> &'static str {
    if selected {
        "(\u{2022})"
    } else {
        "( )"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis_short_text_untouched() {
        assert_eq!(truncate_with_ellipsis("Sports", 10), "Sports");
    }

    #[test]
    fn test_truncate_with_ellipsis_cuts_long_text() {
        assert_eq!(truncate_with_ellipsis("General Knowledge", 10), "General...");
        assert_eq!(truncate_with_ellipsis("abcdef", 2), "..");
    }

    #[test]
    fn test_truncate_with_ellipsis_counts_wide_chars() {
        // The emoji is two columns wide.
        let cut = truncate_with_ellipsis("ok 🎉 done", 6);
        assert!(cut.width() <= 6);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_inner_rect_saturates() {
        let area = Rect::new(0, 0, 2, 2);
        assert_eq!(inner_rect(area, 2), Rect::new(2, 2, 0, 0));
    }

    #[test]
    fn test_spinner_frame_cycles() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(4), SPINNER_FRAMES[1]);
        assert_eq!(spinner_frame(40), SPINNER_FRAMES[0]);
    }
}
