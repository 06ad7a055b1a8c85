//! View-state for the interactive screens.
//!
//! These hold only cursor/focus positions. Everything the user has actually
//! entered lives in [`crate::session::SessionState`].

/// Which setup field receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupFocus {
    #[default]
    FirstName,
    Category,
    Difficulty,
}

impl SetupFocus {
    pub fn next(self) -> Self {
        match self {
            SetupFocus::FirstName => SetupFocus::Category,
            SetupFocus::Category => SetupFocus::Difficulty,
            SetupFocus::Difficulty => SetupFocus::FirstName,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SetupFocus::FirstName => SetupFocus::Difficulty,
            SetupFocus::Category => SetupFocus::FirstName,
            SetupFocus::Difficulty => SetupFocus::Category,
        }
    }
}

/// Radio-group state for the question screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnswerSelection {
    /// Highlighted row
    pub cursor: usize,
    /// Chosen row, if any
    pub selected: Option<usize>,
}

impl AnswerSelection {
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, choice_count: usize) {
        if self.cursor + 1 < choice_count {
            self.cursor += 1;
        }
    }

    /// Select the highlighted row.
    pub fn select_cursor(&mut self) {
        self.selected = Some(self.cursor);
    }

    /// Select row `index` directly (number keys).
    pub fn select(&mut self, index: usize, choice_count: usize) {
        if index < choice_count {
            self.cursor = index;
            self.selected = Some(index);
        }
    }
}
