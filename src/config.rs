//! Endpoint configuration for the Open Trivia Database.
//!
//! Host and paths are build-time constants. The builder methods exist so
//! tests can point the client at a local mock server.

/// Default provider base URL.
pub const DEFAULT_BASE_URL: &str = "https://opentdb.com";

/// Questions requested per fetch. Only the first one is ever shown.
pub const DEFAULT_QUESTION_AMOUNT: u32 = 50;

/// Path of the session token endpoint.
pub const TOKEN_PATH: &str = "/api_token.php";

/// Path of the category list endpoint.
pub const CATEGORIES_PATH: &str = "/api_category.php";

/// Path of the question endpoint.
pub const QUESTIONS_PATH: &str = "/api.php";

/// Configuration for [`crate::api::TriviaClient`].
///
/// ```ignore
/// let config = ApiConfig::default().with_base_url("http://127.0.0.1:9000");
/// assert_eq!(config.categories_url(), "http://127.0.0.1:9000/api_category.php");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme + host (+ port), without trailing slash
    pub base_url: String,
    /// Batch size sent as `amount`
    pub amount: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            amount: DEFAULT_QUESTION_AMOUNT,
        }
    }
}

impl ApiConfig {
    /// Create a configuration with the default endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Override the batch size.
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    /// `GET <token-endpoint>?command=request`
    pub fn token_url(&self) -> String {
        format!("{}{}?command=request", self.base_url, TOKEN_PATH)
    }

    /// `GET <categories-endpoint>`
    pub fn categories_url(&self) -> String {
        format!("{}{}", self.base_url, CATEGORIES_PATH)
    }

    /// `GET <questions-endpoint>?amount=N&type=multiple&category=..&difficulty=..&token=..`
    pub fn questions_url(&self, category_id: &str, difficulty: &str, token: &str) -> String {
        format!(
            "{}{}?amount={}&type=multiple&category={}&difficulty={}&token={}",
            self.base_url,
            QUESTIONS_PATH,
            self.amount,
            urlencoding::encode(category_id),
            urlencoding::encode(difficulty),
            urlencoding::encode(token),
        )
    }
}
