//! Wire types for the `generateContent` request body.
//!
//! Only the request side is typed. The response is traversed as
//! `serde_json::Value` so a missing intermediate field yields "no text"
//! instead of a deserialization failure.

use serde::Serialize;

/// Request body: `{"contents":[{"parts":[{"text": "<prompt>"}]}]}`.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    /// Wrap a prompt in the fixed single-content, single-part envelope.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}
