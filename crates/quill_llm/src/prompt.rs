//! Prompt template for the Gemini call.

/// Render the single free-text prompt sent to the model.
///
/// The template is fixed; snapshot tests and user expectations about how the
/// model reads the structure depend on it byte-for-byte. Context and
/// instruction are inserted literally, no escaping.
pub fn build_prompt(context: &str, instruction: &str) -> String {
    format!(
        "Using the following context:\n---\n{context}\n---\nPerform this instruction: \"{instruction}\""
    )
}
