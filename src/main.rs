use std::process::ExitCode;

use astro_routes::cli::{Arguments, Command, ExitStatus};
use clap::Parser;

fn main() -> ExitCode {
    let args = Arguments::parse();

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = astro_routes::mcp::run_server() {
            eprintln!("Error: {:#}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match astro_routes::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
