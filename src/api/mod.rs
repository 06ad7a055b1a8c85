//! Client for the Open Trivia Database.
//!
//! Wraps the three read-only endpoints: session token, category list and
//! question batches. Nothing here retries or caches.

mod payloads;

pub use payloads::{CategoriesResponse, QuestionsResponse, ResponseCode, TokenResponse};

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::error::NetworkError;
use crate::models::{Category, Difficulty, Question, SessionToken};
use crate::traits::{Headers, HttpClient};

/// Outcome of a question fetch that reached the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionFetch {
    /// `response_code == 0` with at least one result.
    Batch(Vec<Question>),
    /// The provider signalled it has nothing for this query.
    Empty(ResponseCode),
}

/// Trivia API client over an injectable [`HttpClient`].
#[derive(Clone)]
pub struct TriviaClient {
    http: Arc<dyn HttpClient>,
    config: ApiConfig,
}

impl std::fmt::Debug for TriviaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriviaClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TriviaClient {
    pub fn new(http: Arc<dyn HttpClient>, config: ApiConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        endpoint: &str,
    ) -> Result<T, NetworkError> {
        let response = self.http.get(url, &Headers::new()).await?;

        if !response.is_success() {
            return Err(NetworkError::Status {
                status: response.status,
                url: url.to_string(),
            });
        }

        response.json().map_err(|e| NetworkError::Parse {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }

    /// Obtain a session token. Called once per launch.
    pub async fn request_token(&self) -> Result<SessionToken, NetworkError> {
        let body: TokenResponse = self.get_json(&self.config.token_url(), "token").await?;
        tracing::info!("Session token issued (response_code={})", body.response_code);
        Ok(SessionToken::new(body.token))
    }

    /// List every category the provider knows about.
    pub async fn list_categories(&self) -> Result<Vec<Category>, NetworkError> {
        let body: CategoriesResponse = self
            .get_json(&self.config.categories_url(), "categories")
            .await?;
        tracing::debug!("Loaded {} categories", body.trivia_categories.len());
        Ok(body.trivia_categories)
    }

    /// Fetch a batch of multiple-choice questions.
    ///
    /// A non-zero `response_code` becomes [`QuestionFetch::Empty`], not an error.
    pub async fn fetch_questions(
        &self,
        token: &SessionToken,
        category_id: &str,
        difficulty: Difficulty,
    ) -> Result<QuestionFetch, NetworkError> {
        let url = self
            .config
            .questions_url(category_id, difficulty.as_str(), token.as_str());
        let body: QuestionsResponse = self.get_json(&url, "questions").await?;

        let code = ResponseCode::from(body.response_code);
        if !code.is_success() {
            tracing::warn!(
                "No questions for category={} difficulty={}: {} ({})",
                category_id,
                difficulty,
                code.describe(),
                body.response_code
            );
            return Ok(QuestionFetch::Empty(code));
        }
        if body.results.is_empty() {
            return Ok(QuestionFetch::Empty(ResponseCode::NoResults));
        }

        tracing::info!(
            "Fetched {} questions for category={} difficulty={}",
            body.results.len(),
            category_id,
            difficulty
        );
        Ok(QuestionFetch::Batch(body.results))
    }
}
