//! `quill config` subcommands.

use std::io::{self, Write};

use anyhow::Result;

use crate::cli::ConfigAction;
use crate::output;
use crate::settings::{Settings, API_KEY_ENV};

pub async fn handle(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Api => configure_api(),
        ConfigAction::Show => show(),
    }
}

fn configure_api() -> Result<()> {
    let current = Settings::load();
    if !current.api_key.is_empty() {
        println!("  Current: {}", mask_key(&current.api_key));
        println!();
    }

    let key = prompt_api_key()?;
    if key.is_empty() {
        output::warning("No key entered, cancelled.");
        return Ok(());
    }

    let settings = Settings { api_key: key };
    let path = settings.save()?;

    output::success(&format!("Saved {} to {}", API_KEY_ENV, path.display()));
    output::dim("Run 'source ~/.quill/env' or restart your shell to apply.");
    Ok(())
}

fn show() -> Result<()> {
    let settings = Settings::load();
    let display = if settings.api_key.is_empty() {
        "(not set)".to_string()
    } else {
        mask_key(&settings.api_key)
    };
    output::kv(API_KEY_ENV, &display);
    Ok(())
}

/// Masked key entry: characters echo as `*`, Ctrl-C cancels.
fn prompt_api_key() -> Result<String> {
    use crossterm::{
        event::{self, Event, KeyCode, KeyModifiers},
        terminal,
    };

    println!("Enter Gemini API key:");
    print!("> ");
    io::stdout().flush()?;

    let mut key = String::new();

    terminal::enable_raw_mode()?;
    loop {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(k) = event::read()? {
                match k.code {
                    KeyCode::Enter => {
                        println!();
                        break;
                    }
                    KeyCode::Backspace => {
                        if !key.is_empty() {
                            key.pop();
                            print!("\x08 \x08");
                            io::stdout().flush()?;
                        }
                    }
                    KeyCode::Char(c) => {
                        if k.modifiers.contains(KeyModifiers::CONTROL) && c == 'c' {
                            terminal::disable_raw_mode()?;
                            println!();
                            return Ok(String::new());
                        }
                        key.push(c);
                        print!("*");
                        io::stdout().flush()?;
                    }
                    _ => {}
                }
            }
        }
    }
    terminal::disable_raw_mode()?;

    Ok(key.trim().to_string())
}

fn mask_key(key: &str) -> String {
    if key.len() <= 8 {
        return "*".repeat(key.len());
    }
    format!("{}...{}", &key[..4], &key[key.len() - 4..])
}
