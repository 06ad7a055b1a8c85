//! Keyboard handling, dispatched by the active screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::models::{Difficulty, ProfileField, SETUP_CATEGORIES};
use crate::session::Screen;

use super::{App, SetupFocus};

/// Step through `options` from `current`, wrapping at both ends.
///
/// A value not in the list is treated as the first option.
fn cycle_option<'a>(options: &[&'a str], current: &str, forward: bool) -> &'a str {
    let len = options.len();
    let index = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    options[next]
}

fn category_options() -> Vec<&'static str> {
    std::iter::once("")
        .chain(SETUP_CATEGORIES.iter().map(|(id, _)| *id))
        .collect()
}

fn difficulty_options() -> Vec<&'static str> {
    std::iter::once("")
        .chain(Difficulty::ALL.iter().map(|d| d.as_str()))
        .collect()
}

impl App {
    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        self.mark_dirty();
        match self.screen() {
            Screen::Setup => self.handle_setup_key(key),
            Screen::Question => self.handle_question_key(key),
            Screen::Result => self.handle_result_key(key),
        }
        self.sync_screen();
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.submit_setup();
            }
            KeyCode::Esc => {
                if self.session.questions.is_empty_marker() {
                    self.return_home();
                }
            }
            KeyCode::Tab | KeyCode::Down => self.setup_focus = self.setup_focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.setup_focus = self.setup_focus.prev(),
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                self.cycle_focused_selector(forward);
            }
            KeyCode::Backspace if self.setup_focus == SetupFocus::FirstName => {
                let mut name = self.session.profile.first_name.clone();
                name.pop();
                self.update_profile(ProfileField::FirstName, &name);
            }
            KeyCode::Char(c) if self.setup_focus == SetupFocus::FirstName => {
                let mut name = self.session.profile.first_name.clone();
                name.push(c);
                self.update_profile(ProfileField::FirstName, &name);
            }
            _ => {}
        }
    }

    fn cycle_focused_selector(&mut self, forward: bool) {
        match self.setup_focus {
            SetupFocus::Category => {
                let value =
                    cycle_option(&category_options(), &self.session.profile.category_id, forward);
                self.update_profile(ProfileField::Category, value);
            }
            SetupFocus::Difficulty => {
                let current = self
                    .session
                    .profile
                    .difficulty
                    .map(Difficulty::as_str)
                    .unwrap_or("");
                let value = cycle_option(&difficulty_options(), current, forward);
                self.update_profile(ProfileField::Difficulty, value);
            }
            SetupFocus::FirstName => {}
        }
    }

    fn handle_question_key(&mut self, key: KeyEvent) {
        // Answers are locked while the category directory is still loading.
        if self.session.categories.is_none() && key.code != KeyCode::Esc {
            debug!("Ignoring {:?} until categories load", key.code);
            return;
        }

        let choice_count = self
            .session
            .questions
            .first()
            .map(|q| q.choices().len())
            .unwrap_or(0);

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.answer_selection.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.answer_selection.move_down(choice_count),
            KeyCode::Char(' ') => self.answer_selection.select_cursor(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                self.answer_selection.select(index, choice_count);
            }
            KeyCode::Enter => self.submit_answer(),
            KeyCode::Esc => {
                if !self.return_home() {
                    debug!("Back Home unavailable without an error");
                }
            }
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => self.restart(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }
}
