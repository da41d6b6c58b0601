//! Raw input splitter: context `>>` instruction.

use crate::error::{Error, Result};

/// The marker separating context from instruction.
pub const MARKER: &str = ">>";

/// A validated (context, instruction) pair, both trimmed.
///
/// `instruction` is never empty; an empty `context` is legal (a bare
/// instruction with no grounding text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    pub context: String,
    pub instruction: String,
}

/// Split raw text at the first `>>` into context and instruction.
///
/// Everything before the first marker is context; everything after it,
/// including any further `>>` occurrences, is instruction verbatim.
pub fn split(raw: &str) -> Result<ParsedRequest> {
    if raw.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let Some(at) = raw.find(MARKER) else {
        return Err(Error::MissingMarker);
    };

    let context = raw[..at].trim();
    let instruction = raw[at + MARKER.len()..].trim();

    if instruction.is_empty() {
        return Err(Error::EmptyInstruction);
    }

    Ok(ParsedRequest {
        context: context.to_string(),
        instruction: instruction.to_string(),
    })
}
