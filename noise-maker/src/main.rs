mod args;
mod generator;
mod stream;

use std::process::ExitCode;

use args::CliArgs;
use clap::Parser;
use stream::write_log_file;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match write_log_file(&args) {
        Ok(lines) => {
            println!("Wrote {lines} log lines to {}", args.output().display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to write {}: {e}", args.output().display());
            ExitCode::FAILURE
        }
    }
}
