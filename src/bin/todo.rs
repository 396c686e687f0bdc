//! todo - local todo list manager
//!
//! Usage:
//!   todo -list
//!   todo -add <task words...>     (or the task on stdin)
//!   todo -complete N | -delete N | -get N

use clap::Parser;
use std::io;
use std::process::ExitCode;

use todo_rest::config;
use todo_rest::local_cli::{self, Cli};
use todo_rest::tracing_setup;

fn main() -> ExitCode {
    tracing_setup::init_cli_tracing();

    let cli = match Cli::try_parse_from(local_cli::normalize_flags(std::env::args())) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let file = config::todo_file_from_env();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    match local_cli::run(&cli, &file, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Warning: {e}");
            ExitCode::FAILURE
        }
    }
}
