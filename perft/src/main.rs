use std::process::ExitCode;

use clap::Parser;
use perft::cli::{exit_status, handle_command, Cli};

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    let result = handle_command(args.command);
    if let Err(err) = &result {
        log::error!("{err}");
    }
    ExitCode::from(exit_status(&result))
}
