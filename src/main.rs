use anyhow::Result;
use clap::{CommandFactory, Parser};

use pmdetect::cli::{Cli, Command};
use pmdetect::commands;
use pmdetect::config::Config;
use pmdetect::logging;
use pmdetect::PackageManager;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.quiet);

    if let Some(Command::Completions(args)) = &cli.command {
        clap_complete::generate(
            args.shell,
            &mut Cli::command(),
            "pmdetect",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    let options = cli.detect_options(config.detect_options());
    let pm = PackageManager::resolve(&options)?;

    // Dispatch to subcommand
    match cli.command.and_then(Command::operation) {
        Some(operation) => {
            tracing::info!(?operation, "Starting operation");
            commands::delegate::run(&pm, operation).await?;
        }
        None => commands::detect::run(&pm, cli.json)?,
    }

    Ok(())
}
