//! Error types for quill operations.

use thiserror::Error;

/// Errors from input validation and the Gemini call.
///
/// The first four variants are detected locally, before any network I/O.
/// The rest come out of [`crate::GenerationClient::generate`].
#[derive(Debug, Error)]
pub enum Error {
    /// No API key configured
    #[error("API key is not set")]
    MissingApiKey,

    /// Raw input was empty or all-whitespace
    #[error("input is empty")]
    EmptyInput,

    /// Raw input had no '>>' marker
    #[error("instruction marker '>>' not found")]
    MissingMarker,

    /// Nothing after the '>>' marker once trimmed
    #[error("instruction is empty")]
    EmptyInstruction,

    /// Connection, DNS, timeout or body-read failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx status; carries the remote message when the body had one
    #[error("remote error: {0}")]
    Remote(String),

    /// 2xx body that did not contain `candidates[0].content.parts[0].text`.
    /// Carries the parsed body so callers can log it.
    #[error("invalid response structure from API")]
    UnexpectedShape(serde_json::Value),
}

/// Result type for quill operations.
pub type Result<T> = std::result::Result<T, Error>;
