//! AppMessage enum for async communication within the application.

use crate::api::QuestionFetch;
use crate::error::NetworkError;
use crate::models::{Category, SessionToken};

/// Results delivered back to the event loop by spawned network tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Startup token request finished
    TokenLoaded {
        result: Result<SessionToken, NetworkError>,
    },
    /// Question fetch for the submitted setup form finished
    QuestionsLoaded {
        result: Result<QuestionFetch, NetworkError>,
    },
    /// Category directory request finished
    CategoriesLoaded {
        result: Result<Vec<Category>, NetworkError>,
    },
}
