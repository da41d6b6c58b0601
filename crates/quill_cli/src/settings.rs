//! Settings store: a single API key, persisted in `~/.quill/env`.
//!
//! The file is an env-style list of `export KEY="value"` lines so it can be
//! sourced from a shell and is picked up by `load_quill_config` at startup.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

/// Environment variable holding the credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// In-memory settings. The stored value merges over a default of an empty
/// string; an empty key is a reportable condition, not an error here.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub api_key: String,
}

impl Settings {
    /// Read the credential from the environment (env files already loaded
    /// at startup).
    pub fn load() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).unwrap_or_default(),
        }
    }

    /// Persist the current in-memory value to the global env file.
    pub fn save(&self) -> Result<PathBuf> {
        let path = config_path()?;
        save_to(&path, self)?;
        Ok(path)
    }
}

fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    let quill_dir = home.join(".quill");
    fs::create_dir_all(&quill_dir)?;
    Ok(quill_dir.join("env"))
}

/// Read settings back from an env file. Missing file or key yields the
/// default empty string.
pub(crate) fn load_from(path: &Path) -> Settings {
    let Ok(content) = fs::read_to_string(path) else {
        return Settings::default();
    };
    let api_key = parse_exports(&content)
        .remove(API_KEY_ENV)
        .unwrap_or_default();
    Settings { api_key }
}

/// Write the key into the env file, preserving unrelated entries.
pub(crate) fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    let existing = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let mut config = parse_exports(&existing);
    config.insert(API_KEY_ENV.to_string(), settings.api_key.clone());

    let mut content = String::new();
    content.push_str("# quill configuration\n");
    content.push_str("# Source this file: source ~/.quill/env\n\n");
    for (k, v) in &config {
        content.push_str(&format!("export {k}=\"{v}\"\n"));
    }

    fs::write(path, content)?;
    Ok(())
}

fn parse_exports(content: &str) -> BTreeMap<String, String> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim().strip_prefix("export ")?;
            let (key, value) = line.split_once('=')?;
            Some((key.trim().to_string(), unquote(value.trim()).to_string()))
        })
        .collect()
}

/// Strip one level of surrounding double quotes (values are stored quoted).
fn unquote(v: &str) -> &str {
    if v.len() >= 2 && v.starts_with('"') && v.ends_with('"') {
        &v[1..v.len() - 1]
    } else {
        v
    }
}
