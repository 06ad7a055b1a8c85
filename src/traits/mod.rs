//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET operations used by the trivia API client

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
