//! Version and usage text.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `trivia-tui <version>`
pub fn version_line() -> String {
    format!("trivia-tui {}", VERSION)
}

pub fn usage() -> String {
    format!(
        "{}\n\
         A terminal trivia quiz backed by the Open Trivia Database.\n\n\
         USAGE:\n    trivia-tui [OPTIONS]\n\n\
         OPTIONS:\n    -h, --help       Print this help\n    -V, --version    Print version\n\n\
         ENVIRONMENT:\n    TRIVIA_LOG       Log filter (e.g. \"debug\"); enables the log file",
        version_line()
    )
}
