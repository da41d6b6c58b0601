//! quill-llm — input splitter, prompt builder and Gemini client.
//!
//! The portable core of quill: everything here is host-agnostic. A front-end
//! (CLI, editor plugin, ...) supplies raw text and a credential; this crate
//! turns the text into a (context, instruction) pair, renders the prompt and
//! performs the single `generateContent` call.

mod client;
mod error;
mod prompt;
mod split;
mod types;

#[cfg(test)]
mod tests;

pub use client::{GeminiClient, GeminiConfig, GenerationClient};
pub use error::{Error, Result};
pub use prompt::build_prompt;
pub use split::{split, ParsedRequest};
pub use types::{Content, GenerateContentRequest, Part};
