// ABOUTME: Main entry point for twin
//
// Binary: twin
// Usage: twin <COMMAND>
// - tspmo: spin up tmux sessions from the active recipes
// - sybau: fzf session switcher in a tmux popup
// - fr: open a single recipe (by name, via fzf, or --list)

#![allow(missing_docs)]

use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;

use twin::cli::{self, Cli, Commands};

fn main() -> ExitCode {
    setup_logging();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage errors go to stderr; help and version go to stdout
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let command_name = args.command.name();
    let result = match args.command {
        Commands::Tspmo => cli::tspmo::execute(args.format),
        Commands::Sybau => cli::sybau::execute(),
        Commands::SybauPicker => cli::sybau::execute_picker(),
        Commands::Fr(fr_args) => cli::fr::execute(fr_args, args.format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("twin {} failed: {:#}", command_name, e);
            eprintln!("twin {command_name}: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    // stdout and stderr belong to the user, so logs only ever go to a file
    let Some(log_dir) = dirs::home_dir().map(|home| home.join(".twin").join("logs")) else {
        return;
    };
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    // One JSONL log file per day
    let log_file = log_dir.join(format!(
        "twin-{}.jsonl",
        chrono::Local::now().format("%Y%m%d")
    ));

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()             // Output in JSON Lines format
                .with_target(true)  // Include target module in JSON
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "twin=info".into()),
        )
        .init();
}
