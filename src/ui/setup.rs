//! Setup screen: name, category and difficulty form.
//!
//! ```text
//!  > First Name:   Ada_
//!    Category:     < General Knowledge >
//!    Difficulty:   < Easy >
//!
//!    [ Take Quiz ]
//! ```

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{App, SetupFocus};
use crate::models::setup_category_name;

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_FOCUS, COLOR_MUTED};

pub const CATEGORY_PLACEHOLDER: &str = "-- Select Category --";
pub const DIFFICULTY_PLACEHOLDER: &str = "-- Select Difficulty --";

const LABEL_WIDTH: usize = 14;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let profile = &app.session.profile;
    let focus = app.setup_focus;

    let category = if profile.category_id.is_empty() {
        CATEGORY_PLACEHOLDER
    } else {
        setup_category_name(&profile.category_id).unwrap_or(profile.category_id.as_str())
    };
    let difficulty = profile
        .difficulty
        .map(|d| d.label())
        .unwrap_or(DIFFICULTY_PLACEHOLDER);

    let name_value = if focus == SetupFocus::FirstName {
        format!("{}_", profile.first_name)
    } else {
        profile.first_name.clone()
    };

    let mut lines = vec![
        field_line("First Name:", name_value, focus == SetupFocus::FirstName),
        field_line(
            "Category:",
            format!("< {} >", category),
            focus == SetupFocus::Category,
        ),
        field_line(
            "Difficulty:",
            format!("< {} >", difficulty),
            focus == SetupFocus::Difficulty,
        ),
        Line::raw(""),
        Line::styled(
            "   [ Take Quiz ]",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(error) = &app.session.error {
        lines.push(Line::raw(""));
        lines.push(super::error_line(error));
    }

    if let Some((category_id, difficulty)) = app.session.questions.empty_query() {
        let category_name = app
            .session
            .category_name(category_id)
            .unwrap_or(category_id);
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!(
                "There are no questions for {} with a difficulty of {}",
                category_name,
                difficulty.label()
            ),
            Style::default().fg(COLOR_MUTED),
        ));
        if app.session.error.is_some() {
            lines.push(Line::styled(
                "[ Back Home ] (esc)",
                Style::default().fg(COLOR_ACCENT),
            ));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn field_line(label: &str, value: String, focused: bool) -> Line<'static> {
    let (cursor, style) = if focused {
        ("> ", Style::default().fg(COLOR_FOCUS).add_modifier(Modifier::BOLD))
    } else {
        ("  ", Style::default().fg(COLOR_MUTED))
    };
    Line::from(vec![
        Span::styled(cursor, style),
        Span::styled(format!(" {:<width$}", label, width = LABEL_WIDTH), Style::default().fg(COLOR_DIM)),
        Span::styled(value, style),
    ])
}
