//! Trivia TUI - a terminal quiz client for the Open Trivia Database
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;
pub mod terminal;
pub mod text;
pub mod traits;
pub mod ui;
