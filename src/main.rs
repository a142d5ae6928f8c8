//! Entry point for the TRANSTEXT ⇄ gettext sync tool.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use transtext_sync::cli::{
    Cli,
    Command,
};
use transtext_sync::error::CliError;
use transtext_sync::{
    commands,
    config,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // エラーメッセージは加工せずそのまま stderr へ
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Init => commands::init::run(config_path),
        Command::Upload { source } => {
            let settings = config::load(config_path)?;
            commands::upload::run(source, &settings).await
        }
        Command::Download { dest_dir } => {
            let settings = config::load(config_path)?;
            commands::download::run(dest_dir, &settings).await
        }
        Command::CsvToGettext { input, output } => {
            commands::convert::csv_to_gettext(&input, &output).await
        }
        Command::GettextToCsv { input, output } => {
            let settings = config::load(config_path)?;
            commands::convert::gettext_to_csv(&input, &output, &settings).await
        }
    }
}

fn init_tracing(cli: &Cli) {
    let default_filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
