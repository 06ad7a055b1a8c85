//! Session state and the transitions between screens.
//!
//! [`SessionState`] is the single owned source of truth for one run of the
//! application. The active [`Screen`] is never stored: it is computed from
//! the question batch and the submitted answer by [`SessionState::screen`].
//!
//! ```text
//!            fetch ok (>=1 result)            answer submitted
//!   Setup  ───────────────────────▶ Question ─────────────────▶ Result
//!     ▲  ◀── Back Home (error shown) ──┘                          │
//!     └────────────────────────── restart ────────────────────────┘
//! ```

use crate::api::QuestionFetch;
use crate::error::{NetworkError, TriviaError, ValidationError};
use crate::models::{
    setup_category_name, Category, CategoryDirectory, Difficulty, ProfileField, QuestionBatch,
    ScoreState, SessionToken, UserProfile,
};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Setup,
    Question,
    Result,
}

/// The user's resolved answer for the active question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedAnswer {
    pub choice: String,
    scored: bool,
}

impl SubmittedAnswer {
    pub fn is_scored(&self) -> bool {
        self.scored
    }
}

/// Arguments for one question fetch, handed out by
/// [`SessionState::begin_question_fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: SessionToken,
    pub category_id: String,
    pub difficulty: Difficulty,
}

/// Why a setup submit did not produce a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A field was empty; the error message has been set.
    Invalid(ValidationError),
    /// The session token has not arrived (or never will).
    TokenNotReady,
    /// A fetch is already running.
    InFlight,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub profile: UserProfile,
    pub questions: QuestionBatch,
    pub token: Option<SessionToken>,
    pub score: ScoreState,
    pub answer: Option<SubmittedAnswer>,
    pub error: Option<String>,
    pub loading_questions: bool,
    /// Query of the fetch in flight, kept so its outcome is reported against
    /// what was sent rather than the current form.
    in_flight: Option<FetchRequest>,
    /// Cached for the whole process once loaded.
    pub categories: Option<CategoryDirectory>,
    pub loading_categories: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the active screen from the shape of the state.
    pub fn screen(&self) -> Screen {
        match (&self.questions, &self.answer) {
            (QuestionBatch::Loaded(_), None) => Screen::Question,
            (QuestionBatch::Loaded(_), Some(_)) => Screen::Result,
            _ => Screen::Setup,
        }
    }

    pub fn update_profile(&mut self, field: ProfileField, value: &str) {
        self.profile.update(field, value);
    }

    /// Store the session token. The first token wins; later ones are ignored.
    pub fn apply_token(&mut self, result: Result<SessionToken, NetworkError>) {
        match result {
            Ok(token) if self.token.is_none() => self.token = Some(token),
            Ok(_) => tracing::warn!("Ignoring second session token"),
            Err(err) => {
                tracing::error!("Error fetching token: {}", err);
                self.error = Some("Error fetching token.".to_string());
            }
        }
    }

    /// Validate the profile and, if a fetch may start, mark it in flight.
    pub fn begin_question_fetch(&mut self) -> Result<FetchRequest, SubmitRejected> {
        if let Err(err) = self.profile.validate() {
            self.error = Some(err.to_string());
            return Err(SubmitRejected::Invalid(err));
        }
        let Some(token) = self.token.clone() else {
            tracing::warn!("Question fetch requested before the session token arrived");
            return Err(SubmitRejected::TokenNotReady);
        };
        if self.loading_questions {
            return Err(SubmitRejected::InFlight);
        }
        let Some(difficulty) = self.profile.difficulty else {
            return Err(SubmitRejected::Invalid(ValidationError::MissingFields));
        };

        let request = FetchRequest {
            token,
            category_id: self.profile.category_id.clone(),
            difficulty,
        };
        self.loading_questions = true;
        self.in_flight = Some(request.clone());
        Ok(request)
    }

    /// Apply the outcome of a question fetch started by `begin_question_fetch`.
    pub fn apply_question_fetch(&mut self, result: Result<QuestionFetch, NetworkError>) {
        let Some(request) = self.in_flight.take() else {
            tracing::debug!("Dropping question fetch result that nobody is waiting for");
            return;
        };
        self.loading_questions = false;

        let results = match result {
            Ok(QuestionFetch::Batch(results)) => results,
            Ok(QuestionFetch::Empty(_)) => Vec::new(),
            Err(err) => {
                tracing::error!("Error fetching questions: {}", err);
                self.error = Some(format!("Error fetching questions: {}", err.user_message()));
                return;
            }
        };

        self.questions =
            QuestionBatch::from_results(results, &request.category_id, request.difficulty);
        self.answer = None;
        self.error = match self.questions.empty_query() {
            Some((category_id, difficulty)) => {
                Some(self.empty_result_error(category_id, difficulty).user_message())
            }
            None => None,
        };
    }

    /// Error describing an empty result for the given query.
    pub fn empty_result_error(&self, category_id: &str, difficulty: Difficulty) -> TriviaError {
        TriviaError::EmptyResult {
            category: self
                .category_name(category_id)
                .unwrap_or(category_id)
                .to_string(),
            difficulty: difficulty.label().to_string(),
        }
    }

    /// Resolve a category id via the loaded directory, then the setup form's list.
    pub fn category_name(&self, id: &str) -> Option<&str> {
        self.categories
            .as_ref()
            .and_then(|directory| directory.name(id))
            .or_else(|| setup_category_name(id))
    }

    /// True when the question screen should start loading the directory.
    pub fn needs_categories(&self) -> bool {
        self.categories.is_none() && !self.loading_categories
    }

    pub fn begin_category_fetch(&mut self) {
        self.loading_categories = true;
    }

    pub fn apply_categories(&mut self, result: Result<Vec<Category>, NetworkError>) {
        self.loading_categories = false;
        match result {
            Ok(categories) => {
                self.categories = Some(CategoryDirectory::from_categories(categories));
            }
            Err(err) => {
                tracing::error!("Error fetching categories: {}", err);
                self.error = Some(format!("Error fetching categories: {}", err.user_message()));
            }
        }
    }

    /// Resolve the active question with `choice`.
    ///
    /// `None` sets the "select an answer" error and leaves the screen as is.
    pub fn submit_answer(&mut self, choice: Option<&str>) -> Result<(), ValidationError> {
        if self.screen() != Screen::Question {
            return Ok(());
        }
        let Some(choice) = choice else {
            let err = ValidationError::NoAnswerSelected;
            self.error = Some(err.to_string());
            return Err(err);
        };
        self.answer = Some(SubmittedAnswer {
            choice: choice.to_string(),
            scored: false,
        });
        self.error = None;
        Ok(())
    }

    /// Whether the submitted answer matches the active question.
    pub fn answer_is_correct(&self) -> Option<bool> {
        let answer = self.answer.as_ref()?;
        let question = self.questions.first()?;
        Some(question.is_correct(&answer.choice))
    }

    /// Apply the scoring rule for the submitted answer, at most once.
    ///
    /// Returns the correctness the first time and `None` afterwards.
    pub fn score_answer(&mut self) -> Option<bool> {
        let correct = self.answer_is_correct()?;
        let answer = self.answer.as_mut()?;
        if answer.scored {
            return None;
        }
        answer.scored = true;
        self.score.apply(correct);
        tracing::debug!(
            "Scored answer (correct={}): score={} high_score={}",
            correct,
            self.score.score,
            self.score.high_score
        );
        Some(correct)
    }

    /// Back to setup for another round. Score and high score are kept.
    pub fn restart(&mut self) {
        self.profile.clear();
        self.questions = QuestionBatch::NotFetched;
        self.answer = None;
        self.error = None;
    }

    /// Leave the question (or empty-result notice) for setup.
    ///
    /// Only available while an error is showing; returns whether it applied.
    pub fn return_home(&mut self) -> bool {
        if self.error.is_none() || self.screen() == Screen::Result {
            return false;
        }
        self.questions = QuestionBatch::NotFetched;
        self.answer = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ResponseCode;
    use crate::models::Question;
    use crate::traits::HttpError;

    fn question() -> Question {
        Question::new(
            "Capital of France?",
            "Paris",
            vec!["London".to_string(), "Rome".to_string(), "Berlin".to_string()],
        )
    }

    fn ready_session() -> SessionState {
        let mut session = SessionState::new();
        session.apply_token(Ok(SessionToken::new("tok")));
        session.update_profile(ProfileField::FirstName, "Ada");
        session.update_profile(ProfileField::Category, "9");
        session.update_profile(ProfileField::Difficulty, "easy");
        session
    }

    fn session_on_question() -> SessionState {
        let mut session = ready_session();
        session.begin_question_fetch().unwrap();
        session.apply_question_fetch(Ok(QuestionFetch::Batch(vec![question()])));
        session
    }

    #[test]
    fn test_initial_screen_is_setup() {
        assert_eq!(SessionState::new().screen(), Screen::Setup);
    }

    #[test]
    fn test_begin_fetch_returns_profile_and_token() {
        let mut session = ready_session();
        let request = session.begin_question_fetch().unwrap();
        assert_eq!(
            request,
            FetchRequest {
                token: SessionToken::new("tok"),
                category_id: "9".to_string(),
                difficulty: Difficulty::Easy,
            }
        );
        assert!(session.loading_questions);
        assert_eq!(session.begin_question_fetch(), Err(SubmitRejected::InFlight));
    }

    #[test]
    fn test_begin_fetch_validates_first() {
        let mut session = ready_session();
        session.update_profile(ProfileField::FirstName, "");
        assert_eq!(
            session.begin_question_fetch(),
            Err(SubmitRejected::Invalid(ValidationError::MissingFields))
        );
        assert_eq!(session.error.as_deref(), Some("All fields must be filled out."));
        assert!(!session.loading_questions);
    }

    #[test]
    fn test_begin_fetch_without_token_is_noop() {
        let mut session = ready_session();
        session.token = None;
        assert_eq!(
            session.begin_question_fetch(),
            Err(SubmitRejected::TokenNotReady)
        );
        assert!(!session.loading_questions);
        assert!(session.error.is_none());
    }

    #[test]
    fn test_token_is_immutable_once_set() {
        let mut session = ready_session();
        session.apply_token(Ok(SessionToken::new("other")));
        assert_eq!(session.token, Some(SessionToken::new("tok")));
    }

    #[test]
    fn test_token_failure_sets_error() {
        let mut session = SessionState::new();
        session.apply_token(Err(NetworkError::Http(HttpError::Timeout("t".to_string()))));
        assert!(session.token.is_none());
        assert_eq!(session.error.as_deref(), Some("Error fetching token."));
    }

    #[test]
    fn test_successful_fetch_moves_to_question_and_clears_error() {
        let mut session = ready_session();
        session.error = Some("old".to_string());
        session.begin_question_fetch().unwrap();
        session.apply_question_fetch(Ok(QuestionFetch::Batch(vec![
            question(),
            Question::new("Second?", "B", vec![]),
        ])));
        assert_eq!(session.screen(), Screen::Question);
        assert_eq!(session.questions.first().unwrap().correct_answer, "Paris");
        assert!(session.error.is_none());
        assert!(!session.loading_questions);
    }

    #[test]
    fn test_empty_fetch_stays_on_setup_with_marker() {
        let mut session = ready_session();
        session.begin_question_fetch().unwrap();
        session.apply_question_fetch(Ok(QuestionFetch::Empty(ResponseCode::NoResults)));

        assert_eq!(session.screen(), Screen::Setup);
        assert!(session.questions.is_empty_marker());
        let error = session.error.as_deref().unwrap();
        assert!(error.contains("General Knowledge"));
        assert!(error.contains("Easy"));
    }

    #[test]
    fn test_empty_marker_keeps_the_query_that_was_sent() {
        let mut session = ready_session();
        session.begin_question_fetch().unwrap();
        session.update_profile(ProfileField::Category, "10");
        session.apply_question_fetch(Ok(QuestionFetch::Empty(ResponseCode::NoResults)));
        session.update_profile(ProfileField::Difficulty, "hard");

        assert_eq!(session.questions.empty_query(), Some(("9", Difficulty::Easy)));
        let error = session.error.as_deref().unwrap();
        assert!(error.contains("General Knowledge"), "{}", error);
        assert!(error.contains("Easy"), "{}", error);
    }

    #[test]
    fn test_network_failure_keeps_setup() {
        let mut session = ready_session();
        session.begin_question_fetch().unwrap();
        session.apply_question_fetch(Err(NetworkError::Status {
            status: 503,
            url: String::new(),
        }));
        assert_eq!(session.screen(), Screen::Setup);
        assert_eq!(session.questions, QuestionBatch::NotFetched);
        assert!(session
            .error
            .as_deref()
            .unwrap()
            .starts_with("Error fetching questions: "));
    }

    #[test]
    fn test_unrequested_fetch_result_is_dropped() {
        let mut session = ready_session();
        session.apply_question_fetch(Ok(QuestionFetch::Batch(vec![question()])));
        assert_eq!(session.screen(), Screen::Setup);
    }

    #[test]
    fn test_category_name_prefers_directory() {
        let mut session = SessionState::new();
        assert_eq!(session.category_name("9"), Some("General Knowledge"));
        assert_eq!(session.category_name("15"), None);

        session.apply_categories(Ok(vec![Category {
            id: "15".to_string(),
            name: "Entertainment: Video Games".to_string(),
        }]));
        assert_eq!(session.category_name("15"), Some("Entertainment: Video Games"));
        assert!(!session.needs_categories());
    }

    #[test]
    fn test_category_failure_sets_error_and_allows_retry() {
        let mut session = SessionState::new();
        session.begin_category_fetch();
        assert!(!session.needs_categories());
        session.apply_categories(Err(NetworkError::Http(HttpError::Other("x".to_string()))));
        assert!(session.categories.is_none());
        assert!(session.needs_categories());
        assert!(session
            .error
            .as_deref()
            .unwrap()
            .starts_with("Error fetching categories: "));
    }

    #[test]
    fn test_submit_without_choice_is_validation_error() {
        let mut session = session_on_question();
        assert_eq!(
            session.submit_answer(None),
            Err(ValidationError::NoAnswerSelected)
        );
        assert_eq!(session.error.as_deref(), Some("Please select an answer!"));
        assert_eq!(session.screen(), Screen::Question);
    }

    #[test]
    fn test_correct_answer_scores_once() {
        let mut session = session_on_question();
        session.submit_answer(Some("Paris")).unwrap();
        assert_eq!(session.screen(), Screen::Result);

        assert_eq!(session.score_answer(), Some(true));
        assert_eq!(session.score_answer(), None);
        assert_eq!(session.score_answer(), None);
        assert_eq!(session.score, ScoreState { score: 1, high_score: 1 });
    }

    #[test]
    fn test_wrong_answer_decrements_and_keeps_high_score() {
        let mut session = session_on_question();
        session.score = ScoreState { score: 2, high_score: 4 };
        session.submit_answer(Some("London")).unwrap();
        assert_eq!(session.score_answer(), Some(false));
        assert_eq!(session.score, ScoreState { score: 1, high_score: 4 });
    }

    #[test]
    fn test_restart_clears_round_but_keeps_score() {
        let mut session = session_on_question();
        session.submit_answer(Some("Paris")).unwrap();
        session.score_answer();
        session.restart();

        assert_eq!(session.screen(), Screen::Setup);
        assert_eq!(session.profile, UserProfile::default());
        assert_eq!(session.questions, QuestionBatch::NotFetched);
        assert!(session.answer.is_none());
        assert!(session.error.is_none());
        assert_eq!(session.score, ScoreState { score: 1, high_score: 1 });
        assert_eq!(session.token, Some(SessionToken::new("tok")));
    }

    #[test]
    fn test_return_home_requires_error() {
        let mut session = session_on_question();
        assert!(!session.return_home());
        assert_eq!(session.screen(), Screen::Question);

        let _ = session.submit_answer(None);
        assert!(session.return_home());
        assert_eq!(session.screen(), Screen::Setup);
        assert_eq!(session.questions, QuestionBatch::NotFetched);
    }

    #[test]
    fn test_return_home_from_empty_marker() {
        let mut session = ready_session();
        session.begin_question_fetch().unwrap();
        session.apply_question_fetch(Ok(QuestionFetch::Empty(ResponseCode::NoResults)));
        assert!(session.return_home());
        assert_eq!(session.questions, QuestionBatch::NotFetched);
    }
}
