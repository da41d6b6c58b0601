//! quill-runtime — ties the splitter, prompt and client together.
//!
//! A front-end hands [`Agent::invoke`] the raw text and the credential; the
//! agent validates, calls the model, and reports every distinct outcome
//! through a [`Notifier`]. The generated text goes to an insertion callback
//! so the front-end decides where it lands.

mod agent;
mod notifier;

pub use agent::{Agent, Outcome};
pub use notifier::Notifier;
