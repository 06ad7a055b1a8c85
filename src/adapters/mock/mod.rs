//! Mock implementations for testing.
//!
//! Lets the trivia client and the app controller run without network access.

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
