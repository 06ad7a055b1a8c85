//! Error types for the trivia client.
//!
//! | Kind | Raised by | Recovery |
//! |------|-----------|----------|
//! | [`ValidationError`] | Setup/Question screen submit | fix input and resubmit |
//! | [`TriviaError::EmptyResult`] | question fetch with a non-zero response code | pick another category/difficulty |
//! | [`NetworkError`] | any of the three endpoints | restart the step; nothing is retried |
//!
//! None of these are fatal: the worst case is a screen stuck on its loading
//! indicator.

mod network;
mod validation;

pub use network::NetworkError;
pub use validation::ValidationError;

use thiserror::Error;

/// Unified error type for the application.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TriviaError {
    /// Transport or decode failure.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Missing user input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The provider had no questions for this combination.
    #[error("No questions available for {category} with difficulty set to {difficulty}. Please select a different category and difficulty.")]
    EmptyResult {
        /// Human-readable category name
        category: String,
        /// Capitalized difficulty label
        difficulty: String,
    },
}

impl TriviaError {
    /// Message shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            TriviaError::Network(err) => err.user_message(),
            TriviaError::Validation(err) => err.to_string(),
            TriviaError::EmptyResult { .. } => self.to_string(),
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            TriviaError::Network(err) => err.error_code(),
            TriviaError::Validation(_) => "VALIDATION",
            TriviaError::EmptyResult { .. } => "EMPTY_RESULT",
        }
    }
}
