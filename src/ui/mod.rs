//! UI rendering for the trivia quiz
//!
//! Every frame draws the same chrome: a header, the score panel, a status
//! line and a hint footer. The body in between belongs to whichever screen
//! the session state derives (see [`crate::session::Screen`]).
//!
//! Rendering never mutates the [`App`]; mount effects such as scoring run in
//! [`App::sync_screen`] before a frame is drawn.

mod helpers;
mod question;
mod result;
mod setup;
mod theme;

pub use helpers::{radio_marker, spinner_frame, truncate_with_ellipsis, SPINNER_FRAMES};
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_FOCUS, COLOR_HEADER,
    COLOR_LOADING, COLOR_MUTED, COLOR_SUCCESS,
};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::session::Screen;

pub const TITLE: &str = "Trivia Quiz";
pub const SUBTITLE: &str = "How Much Do You Know?";

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let [header_area, score_area, status_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header_area);
    render_score_panel(frame, score_area, app);
    render_status_line(frame, status_area, app);

    let screen = app.screen();
    let body_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", screen_title(screen)),
            Style::default().fg(COLOR_ACCENT),
        ));
    let body_inner = helpers::inner_rect(body_block.inner(body_area), 1);
    frame.render_widget(body_block, body_area);

    match screen {
        Screen::Setup => setup::render(frame, body_inner, app),
        Screen::Question => question::render(frame, body_inner, app),
        Screen::Result => result::render(frame, body_inner, app),
    }

    render_footer(frame, footer_area, app);
}

fn screen_title(screen: Screen) -> &'static str {
    match screen {
        Screen::Setup => "Setup",
        Screen::Question => "Question",
        Screen::Result => "Result",
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            TITLE,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(SUBTITLE, Style::default().fg(COLOR_DIM)),
    ];
    let header = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(header, area);
}

fn render_score_panel(frame: &mut Frame, area: Rect, app: &App) {
    let score = &app.session.score;
    let line = Line::from(vec![
        Span::styled(
            format!("Score: {}", score.score),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            format!("High Score: {}", score.high_score),
            Style::default().fg(COLOR_SUCCESS),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    if !app.session.loading_questions {
        return;
    }
    let line = Line::styled(
        format!("{} Loading questions...", spinner_frame(app.tick_count)),
        Style::default().fg(COLOR_LOADING),
    );
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let back_home = app.session.error.is_some();
    let hints = match app.screen() {
        Screen::Setup => {
            let mut hints = "tab/\u{2191}\u{2193} field   \u{2190}\u{2192} choose   enter take quiz".to_string();
            if back_home && app.session.questions.is_empty_marker() {
                hints.push_str("   esc back home");
            }
            hints
        }
        Screen::Question => {
            let mut hints =
                "\u{2191}\u{2193} navigate   space/1-4 select   enter submit".to_string();
            if back_home {
                hints.push_str("   esc back home");
            }
            hints
        }
        Screen::Result => "enter/r play again   q quit".to_string(),
    };
    let hints = format!("{}   ctrl+c exit", hints);
    let text = truncate_with_ellipsis(&hints, area.width as usize);
    frame.render_widget(
        Line::styled(text, Style::default().fg(COLOR_DIM)),
        area,
    );
}

/// Error banner used by the setup and question screens.
pub(crate) fn error_line(message: &str) -> Line<'static> {
    Line::styled(message.to_string(), Style::default().fg(COLOR_ERROR))
}
