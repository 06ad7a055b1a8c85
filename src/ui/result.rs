//! Result screen: verdict, correct answer and running score.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::text::decode_entities;

use super::theme::{COLOR_ACCENT, COLOR_ERROR, COLOR_MUTED, COLOR_SUCCESS};

pub const CORRECT_MESSAGE: &str = "Congrats, you answered correctly! 🎉";
pub const WRONG_MESSAGE: &str = "Wrong Answer! ❌ You'll get it on the next one!";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    let Some(question) = session.questions.first() else {
        return;
    };

    let correct = session.answer_is_correct().unwrap_or(false);

    let mut lines = vec![
        Line::styled(
            format!("Here's how you did, {}.", session.profile.first_name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
    ];
    if correct {
        lines.push(Line::styled(
            CORRECT_MESSAGE,
            Style::default().fg(COLOR_SUCCESS),
        ));
    } else {
        lines.push(Line::styled(WRONG_MESSAGE, Style::default().fg(COLOR_ERROR)));
        lines.push(Line::styled(
            format!(
                "The correct answer was: {}",
                decode_entities(&question.correct_answer)
            ),
            Style::default().fg(COLOR_MUTED),
        ));
    }
    lines.extend([
        Line::raw(""),
        Line::raw(format!("Your current score: {}", session.score.score)),
        Line::raw(format!("Your high score: {}", session.score.high_score)),
        Line::raw(""),
        Line::styled(
            "[ Play Again ]",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
