//! Wire shapes of the three provider endpoints.

use serde::Deserialize;

use crate::models::{Category, Question};

/// `GET /api_token.php?command=request`
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub response_code: i64,
    pub token: String,
}

/// `GET /api_category.php`
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesResponse {
    pub trivia_categories: Vec<Category>,
}

/// `GET /api.php?...`
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionsResponse {
    pub response_code: i64,
    #[serde(default)]
    pub results: Vec<Question>,
}

/// Provider response codes. Anything but `Success` means "no usable questions".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    NoResults,
    InvalidParameter,
    TokenNotFound,
    TokenEmpty,
    RateLimit,
    Unknown(i64),
}

impl From<i64> for ResponseCode {
    fn from(code: i64) -> Self {
        match code {
            0 => ResponseCode::Success,
            1 => ResponseCode::NoResults,
            2 => ResponseCode::InvalidParameter,
            3 => ResponseCode::TokenNotFound,
            4 => ResponseCode::TokenEmpty,
            5 => ResponseCode::RateLimit,
            other => ResponseCode::Unknown(other),
        }
    }
}

impl ResponseCode {
    pub fn is_success(self) -> bool {
        self == ResponseCode::Success
    }

    /// Short description for log lines.
    pub fn describe(self) -> &'static str {
        match self {
            ResponseCode::Success => "success",
            ResponseCode::NoResults => "not enough questions for the query",
            ResponseCode::InvalidParameter => "invalid parameter",
            ResponseCode::TokenNotFound => "session token not found",
            ResponseCode::TokenEmpty => "session token has returned every question",
            ResponseCode::RateLimit => "rate limited",
            ResponseCode::Unknown(_) => "unknown response code",
        }
    }
}
