//! Questions as served by the provider.

use serde::Deserialize;

use super::{deserialize_nullable_string, Difficulty};

/// A multiple-choice question. Text fields are still HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub question_html: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub difficulty: String,
}

impl Question {
    pub fn new(
        question_html: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
    ) -> Self {
        Self {
            question_html: question_html.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers,
            category: String::new(),
            difficulty: String::new(),
        }
    }

    /// Answer choices: the incorrect answers in server order, then the correct one.
    ///
    /// Not shuffled, so the correct answer is always last.
    pub fn choices(&self) -> Vec<&str> {
        self.incorrect_answers
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.correct_answer.as_str()))
            .collect()
    }

    /// Exact, case-sensitive comparison against the server's text.
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }
}

/// Questions fetched for the current round.
///
/// `Empty` is the explicit "provider had nothing" marker and is distinct
/// from `NotFetched`. It remembers the query that came back empty, so later
/// edits to the setup form do not change what it reports. `Loaded` never
/// holds an empty vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuestionBatch {
    #[default]
    NotFetched,
    Empty {
        category_id: String,
        difficulty: Difficulty,
    },
    Loaded(Vec<Question>),
}

impl QuestionBatch {
    /// `Loaded` for a non-empty result, otherwise `Empty` for the given query.
    pub fn from_results(results: Vec<Question>, category_id: &str, difficulty: Difficulty) -> Self {
        if results.is_empty() {
            QuestionBatch::Empty {
                category_id: category_id.to_string(),
                difficulty,
            }
        } else {
            QuestionBatch::Loaded(results)
        }
    }

    /// The active question. Later entries are fetched but never shown.
    pub fn first(&self) -> Option<&Question> {
        match self {
            QuestionBatch::Loaded(questions) => questions.first(),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, QuestionBatch::Loaded(_))
    }

    pub fn is_empty_marker(&self) -> bool {
        matches!(self, QuestionBatch::Empty { .. })
    }

    /// Category id and difficulty of the query that returned nothing.
    pub fn empty_query(&self) -> Option<(&str, Difficulty)> {
        match self {
            QuestionBatch::Empty {
                category_id,
                difficulty,
            } => Some((category_id.as_str(), *difficulty)),
            _ => None,
        }
    }
}
