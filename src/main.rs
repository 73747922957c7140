use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use tasker::cli::{Cli, Commands};
use tasker::cli_utils::tasker_prefix;
use tasker::{commands, logging, CommandExecutionError, Task};

fn main() -> ExitCode {
    // Initialize structured logging
    logging::init();

    let cli = Cli::parse();

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} Error: {:#}", tasker_prefix(), err);
            // A failed toolchain command passes its own exit code through
            match err.downcast_ref::<CommandExecutionError>() {
                Some(cmd_err) => ExitCode::from(cmd_err.exit_code()),
                None => ExitCode::FAILURE,
            }
        }
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build(args) => commands::task::run(Task::Build, &args),
        Commands::Check(args) => commands::task::run(Task::Check, &args),
        Commands::List(args) => commands::list::run(&args),
        Commands::Doctor(args) => commands::doctor::run(args),
    }
}
