use clap::Parser;
use std::path::PathBuf;
use taskboard::{BoardConfig, BoardContext, BoardOperationProcessor};

mod cli;
mod commands;
mod error;
mod exit_codes;
mod logging;

use cli::Cli;
use error::{handle_cli_result, CliResult};

fn main() {
    let cli = Cli::parse();
    let exit_code = handle_cli_result(run(cli));
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> CliResult<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = BoardConfig::load_from(&cwd, cli.config.as_deref());

    // Logging comes up before the config error is reported so it gets printed
    let configured = config
        .as_ref()
        .map_or("info", |c| c.log_level.as_str())
        .to_string();
    logging::configure_logging(&logging::log_level(
        cli.verbose,
        cli.debug,
        cli.quiet,
        &configured,
    ));

    let mut config = config?;
    if let Some(dir) = cli.storage_dir {
        config.storage_dir = dir;
    }
    tracing::debug!(storage_dir = %config.storage_dir.display(), "opening board");

    let processor = match cli.actor {
        Some(actor) => BoardOperationProcessor::with_actor(actor),
        None => BoardOperationProcessor::new(),
    };
    let mut ctx = BoardContext::open(config);

    let value = commands::run_command(cli.command, &processor, &mut ctx)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
