//! Terminal output helpers — styled text for humans, one JSON object per
//! line for machines.
//!
//! Uses `console` for colors (respects NO_COLOR, auto-disables when piped)
//! and `indicatif` for the request spinner.

use std::sync::atomic::{AtomicBool, Ordering};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::cli::OutputFormat;

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
}

// Notices go to stderr in both modes; stdout carries only the generated
// text so it can be piped.
fn emit_json(level: &str, message: &str) {
    let msg = Msg { level, message };
    let json = serde_json::to_string(&msg)
        .unwrap_or_else(|_| format!("{{\"level\":\"{level}\",\"message\":\"{message}\"}}"));
    eprintln!("{json}");
}

/// Level-less user notice, the CLI equivalent of a host editor's toast.
pub fn notice(text: &str) {
    if is_json() {
        emit_json("notice", text);
    } else {
        eprintln!("{}", style(text).bright());
    }
}

pub fn success(text: &str) {
    if is_json() {
        emit_json("success", text);
    } else {
        eprintln!("{} {}", style("✓").green(), style(text).bright());
    }
}

pub fn error(text: &str) {
    if is_json() {
        let json = serde_json::to_string(&Msg {
            level: "error",
            message: text,
        })
        .unwrap_or_default();
        eprintln!("{json}");
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        emit_json("warning", text);
    } else {
        eprintln!("{} {}", style("!").yellow(), style(text).bright());
    }
}

pub fn dim(text: &str) {
    if is_json() {
        emit_json("info", text);
    } else {
        eprintln!("{}", style(text).dim());
    }
}

/// Print a key-value pair with styled key.
pub fn kv(key: &str, value: &str) {
    if is_json() {
        emit_json("info", &format!("{key}={value}"));
    } else {
        eprintln!("  {} {}", style(key).cyan().bold(), value);
    }
}

/// Spinner shown while a request is in flight. Suppressed in JSON mode.
pub fn spinner(message: &str) -> Option<ProgressBar> {
    if is_json() {
        emit_json("notice", message);
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(template);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    Some(spinner)
}
