//! Invocation orchestrator.

use std::sync::Arc;

use quill_llm::{split, Error, GenerationClient};
use tracing::{debug, error};

use crate::notifier::Notifier;

pub(crate) const MSG_MISSING_KEY: &str = "Gemini API key is not set.";
pub(crate) const MSG_EMPTY_INPUT: &str = "The input is empty.";
pub(crate) const MSG_MISSING_MARKER: &str = "Instruction marker '>>' not found.";
pub(crate) const MSG_EMPTY_INSTRUCTION: &str =
    "Instruction is empty. Provide an instruction after the '>>' marker.";
pub(crate) const MSG_REQUESTING: &str = "Requesting from Gemini...";
pub(crate) const MSG_COMPLETED: &str = "Task completed successfully.";
pub(crate) const MSG_EMPTY_RESPONSE: &str = "Received an empty response from the model.";
pub(crate) const MSG_REQUEST_FAILED: &str =
    "Error during API call. Check the API key and your network connection.";

/// Every distinct reportable situation of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Generated text was handed to the insertion callback
    Completed,
    /// The call succeeded but the trimmed result was empty
    EmptyResponse,
    MissingApiKey,
    EmptyInput,
    MissingMarker,
    EmptyInstruction,
    /// The client failed; detail is in the diagnostic log only
    RequestFailed,
}

impl Outcome {
    pub fn is_completed(self) -> bool {
        matches!(self, Outcome::Completed)
    }
}

/// Runs one raw-input invocation end to end.
pub struct Agent {
    client: Arc<dyn GenerationClient>,
}

impl Agent {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }

    /// Validate, generate, and report.
    ///
    /// The credential check runs before parsing so a missing key is never
    /// masked by an input problem, and vice versa. Client failures are
    /// collapsed into one generic notice; the specific kind and message go
    /// to the log only.
    pub async fn invoke<F>(
        &self,
        raw: &str,
        api_key: &str,
        notifier: &dyn Notifier,
        insert: F,
    ) -> Outcome
    where
        F: FnOnce(&str),
    {
        if api_key.is_empty() {
            notifier.notify(MSG_MISSING_KEY);
            return Outcome::MissingApiKey;
        }

        let parsed = match split(raw) {
            Ok(parsed) => parsed,
            Err(Error::EmptyInput) => {
                notifier.notify(MSG_EMPTY_INPUT);
                return Outcome::EmptyInput;
            }
            Err(Error::MissingMarker) => {
                notifier.notify(MSG_MISSING_MARKER);
                return Outcome::MissingMarker;
            }
            Err(Error::EmptyInstruction) => {
                notifier.notify(MSG_EMPTY_INSTRUCTION);
                return Outcome::EmptyInstruction;
            }
            Err(other) => {
                // split never produces the remaining variants
                error!(error = %other, "unexpected validation failure");
                notifier.notify(MSG_REQUEST_FAILED);
                return Outcome::RequestFailed;
            }
        };

        debug!(
            context_len = parsed.context.len(),
            instruction_len = parsed.instruction.len(),
            "invoking generation"
        );

        notifier.busy(MSG_REQUESTING);
        let result = self
            .client
            .generate(api_key, &parsed.context, &parsed.instruction)
            .await;
        notifier.idle();

        match result {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    notifier.notify(MSG_EMPTY_RESPONSE);
                    Outcome::EmptyResponse
                } else {
                    insert(trimmed);
                    notifier.notify(MSG_COMPLETED);
                    Outcome::Completed
                }
            }
            Err(Error::UnexpectedShape(body)) => {
                error!(body = %body, "response did not contain expected text structure");
                notifier.notify(MSG_REQUEST_FAILED);
                Outcome::RequestFailed
            }
            Err(err) => {
                error!(error = %err, "generation request failed");
                notifier.notify(MSG_REQUEST_FAILED);
                Outcome::RequestFailed
            }
        }
    }
}
