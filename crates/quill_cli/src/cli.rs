//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Run "context >> instruction" text through Gemini
#[derive(Parser)]
#[command(name = "quill", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose diagnostic logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split input on '>>', send it to Gemini, emit the generated text
    Run {
        /// Raw input text ("context >> instruction"). Reads stdin when
        /// neither this nor --file is given.
        input: Option<String>,

        /// Read the raw input from a file
        #[arg(long, conflicts_with = "input")]
        file: Option<PathBuf>,

        /// Append the result to the file after the input block instead of
        /// printing it
        #[arg(long, requires = "file")]
        append: bool,

        /// Model name (default: gemini-pro)
        #[arg(long)]
        model: Option<String>,

        /// Request timeout in seconds. No timeout when unset.
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
    /// Configure quill settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Set the Gemini API key
    Api,
    /// Show the current configuration (key masked)
    Show,
}
