//! Services: upstream lookups, sessions, and the word of the day.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route handlers stay thin: they resolve the session, call into these
//! modules, and render. Nothing here knows about HTTP request types.

pub mod dictionary;
pub mod images;
pub mod lookup;
pub mod session;
pub mod word_of_day;

/// Errors from the dictionary and image HTTP APIs.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The request could not be sent or timed out.
    #[error("request failed: {0}")]
    Request(String),

    /// The API answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The response body was not in the expected shape.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}
