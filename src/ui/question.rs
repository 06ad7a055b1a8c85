//! Question screen: category header, question text and the answer radio group.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::text::decode_entities;

use super::helpers::radio_marker;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_FOCUS, COLOR_LOADING, COLOR_MUTED, COLOR_SUCCESS};

pub const CATEGORY_LOADING: &str = "Loading category information...";
pub const CATEGORY_NOT_FOUND: &str = "Category not found";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    let Some(question) = session.questions.first() else {
        return;
    };

    // Nothing but the loading line until the directory arrives.
    let Some(directory) = &session.categories else {
        let mut lines = vec![Line::styled(
            CATEGORY_LOADING,
            Style::default().fg(COLOR_LOADING),
        )];
        push_error(&mut lines, session.error.as_deref());
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
        return;
    };

    // Only the fetched directory counts here; the setup list is not consulted.
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Category: ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                directory
                    .name(&session.profile.category_id)
                    .unwrap_or(CATEGORY_NOT_FOUND)
                    .to_string(),
                Style::default().fg(COLOR_ACCENT),
            ),
        ]),
        Line::from(vec![
            Span::styled("Difficulty: ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                session.profile.difficulty_label(),
                Style::default().fg(COLOR_ACCENT),
            ),
        ]),
        Line::raw(""),
        Line::styled(
            decode_entities(&question.question_html),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
    ];

    let selection = &app.answer_selection;
    for (index, choice) in question.choices().into_iter().enumerate() {
        let is_cursor = selection.cursor == index;
        let is_selected = selection.selected == Some(index);
        let style = if is_selected {
            Style::default().fg(COLOR_SUCCESS)
        } else if is_cursor {
            Style::default().fg(COLOR_FOCUS)
        } else {
            Style::default().fg(COLOR_MUTED)
        };
        lines.push(Line::styled(
            format!(
                "{}{} {}. {}",
                if is_cursor { "> " } else { "  " },
                radio_marker(is_selected),
                index + 1,
                decode_entities(choice)
            ),
            style,
        ));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "  [ Submit Answer ]",
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    ));

    push_error(&mut lines, session.error.as_deref());

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn push_error(lines: &mut Vec<Line<'_>>, error: Option<&str>) {
    if let Some(error) = error {
        lines.push(Line::raw(""));
        lines.push(super::error_line(error));
        lines.push(Line::styled(
            "[ Back Home ] (esc)",
            Style::default().fg(COLOR_ACCENT),
        ));
    }
}
