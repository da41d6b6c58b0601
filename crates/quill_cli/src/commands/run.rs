//! `quill run` — the front-end adapter around the agent.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use quill_llm::{GeminiClient, GeminiConfig};
use quill_runtime::{Agent, Notifier, Outcome};

use crate::output;
use crate::settings::Settings;

/// Maps agent notifications onto the terminal: plain notices plus a spinner
/// while the request is in flight.
struct CliNotifier {
    spinner: Mutex<Option<ProgressBar>>,
}

impl Notifier for CliNotifier {
    fn notify(&self, message: &str) {
        output::notice(message);
    }

    fn busy(&self, message: &str) {
        *self.spinner.lock().unwrap() = output::spinner(message);
    }

    fn idle(&self) {
        if let Some(spinner) = self.spinner.lock().unwrap().take() {
            spinner.finish_and_clear();
        }
    }
}

pub async fn handle(
    input: Option<String>,
    file: Option<PathBuf>,
    append: bool,
    model: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<()> {
    let raw = read_input(input, file.as_deref())?;
    let settings = Settings::load();

    let mut config = GeminiConfig::new();
    if let Some(model) = model {
        config = config.with_model(model);
    }
    if let Some(secs) = timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    tracing::debug!(model = %config.model, timeout = ?config.timeout, "client configured");
    let client = GeminiClient::new(config)?;
    let agent = Agent::new(Arc::new(client));
    let notifier = CliNotifier {
        spinner: Mutex::new(None),
    };

    let mut generated: Option<String> = None;
    let outcome = agent
        .invoke(&raw, &settings.api_key, &notifier, |text| {
            generated = Some(text.to_string());
        })
        .await;

    if outcome == Outcome::MissingApiKey {
        output::dim(&format!(
            "Set it with 'quill config api' or the {} environment variable.",
            crate::settings::API_KEY_ENV
        ));
    }

    if let Some(text) = generated {
        match (&file, append) {
            // Insert-after: the result lands in the file right after the
            // input block.
            (Some(path), true) => {
                let mut content = raw.clone();
                if !content.ends_with('\n') {
                    content.push('\n');
                }
                content.push('\n');
                content.push_str(&text);
                content.push('\n');
                fs::write(path, content)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                output::dim(&format!("Appended result to {}", path.display()));
            }
            // Replacement-style: the result goes to stdout, notices stay on
            // stderr so the output can be piped.
            _ => println!("{text}"),
        }
    }

    if !matches!(outcome, Outcome::Completed | Outcome::EmptyResponse) {
        std::process::exit(1);
    }
    Ok(())
}

fn read_input(input: Option<String>, file: Option<&std::path::Path>) -> Result<String> {
    if let Some(text) = input {
        return Ok(text);
    }
    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf)
}
