//! CLI entry point for quill.

mod cli;
mod commands;
mod output;
mod settings;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Load configuration env files. Shell environment wins over both files;
/// the global file wins over the project one because it loads first and
/// dotenvy never overrides what is already set.
fn load_quill_config() {
    if let Some(home) = dirs::home_dir() {
        let global_env = home.join(".quill").join("env");
        if global_env.exists() {
            let _ = dotenvy::from_path(&global_env);
        }
    }
    let _ = dotenvy::dotenv();
}

/// Diagnostic log on stderr. `--verbose` lowers the default level to debug;
/// RUST_LOG overrides everything.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    load_quill_config();
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    output::init(cli.output);

    if let Err(e) = commands::handle(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
