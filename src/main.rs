//! stagehand CLI - build-preparation shim for legacy JavaScript projects
//!
//! Usage: stagehand [--prepare | --revert | --init] [options]
//!
//! Without a recognized action flag (or with an unparseable argument list)
//! the help text is shown and the process exits 0. Fatal errors exit 1; the
//! mapping from error to exit code lives here and nowhere else.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use stagehand::commands;
use stagehand::config::{Mode, Options};
use stagehand::error::StagehandError;
use stagehand::ui;
use stagehand::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            // Bad argument lists fall through to help, not to a failure.
            let _ = Cli::command().print_help();
            return ExitCode::SUCCESS;
        }
    };

    let project_root = cli.dir.clone().unwrap_or_else(|| PathBuf::from("."));

    if cli.init {
        return exit_with(commands::init(&project_root), cli.sanitize);
    }

    let mode = if cli.prepare {
        Mode::Prepare
    } else if cli.revert {
        Mode::Revert
    } else {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    let opts = Options::new(mode, project_root, cli.config.clone(), cli.sanitize);
    exit_with(commands::run(&opts), cli.sanitize)
}

/// Single exit point for fatal errors: print the diagnostic, exit 1.
fn exit_with(result: anyhow::Result<()>, sanitize: bool) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error(&format!("{err:#}"));

            let parse_failure = matches!(
                err.downcast_ref::<StagehandError>(),
                Some(StagehandError::ManifestParse { .. })
            );
            if parse_failure && !sanitize {
                ui::error("the manifest may contain comments; retry with --sanitize");
            }

            ExitCode::FAILURE
        }
    }
}
