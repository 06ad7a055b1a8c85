//! Running score and session high score.

/// `high_score >= score` holds after every update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u32,
    pub high_score: u32,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// +1 for a correct answer, -1 floored at 0 otherwise; the high score
    /// follows in the same update.
    pub fn apply(&mut self, correct: bool) {
        self.score = if correct {
            self.score + 1
        } else {
            self.score.saturating_sub(1)
        };
        self.high_score = self.high_score.max(self.score);
    }
}
