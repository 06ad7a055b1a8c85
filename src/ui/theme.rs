//! Color theme constants for the trivia UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the title
pub const COLOR_HEADER: Color = Color::White;

/// Focused field / cursor row
pub const COLOR_FOCUS: Color = Color::Cyan;

/// Correct answer and selected radio - green #04B575
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Error messages and wrong answers
pub const COLOR_ERROR: Color = Color::Red;

/// Loading indicators
pub const COLOR_LOADING: Color = Color::Yellow;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Unfocused option text
pub const COLOR_MUTED: Color = Color::Gray;
