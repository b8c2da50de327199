mod cli;
mod commands;
mod config;
mod domain_events;
mod main_lib;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use config::Config;
use main_lib::{build_state, init_tracing, StorageTarget};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing(&config);

    match run(cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Domain errors are user-facing; print them as-is.
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    let target = if cli.in_memory {
        StorageTarget::InMemory
    } else {
        StorageTarget::Sqlite(cli.db.unwrap_or_else(|| config.db_path.clone()))
    };
    let state = build_state(target).await?;

    let output = commands::execute(cli.command, &state).await?;
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);
    Ok(())
}
