mod config;
mod run;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Run {
            input,
            file,
            append,
            model,
            timeout_secs,
        } => run::handle(input, file, append, model, timeout_secs).await,
        Command::Config { action } => config::handle(action).await,
    }
}
