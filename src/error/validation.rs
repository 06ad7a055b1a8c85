//! Input validation errors, shown inline on the screen that raised them.

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Name, category or difficulty left empty on the setup form.
    #[error("All fields must be filled out.")]
    MissingFields,

    /// Answer submitted with no choice selected.
    #[error("Please select an answer!")]
    NoAnswerSelected,
}
