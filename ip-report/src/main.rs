use std::{error::Error, path::PathBuf, process::ExitCode};

use clap::Parser;
use ip_report::{OutputFormat, generate_report};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Rank client addresses by traffic in an access log", long_about = None)]
struct Args {
    /// Semicolon-delimited log: timestamp;bytes_sent;status;address
    #[arg(short, long, default_value = "logfiles/requests.log")]
    input: PathBuf,

    #[arg(short, long, default_value = "reports/ipaddr.csv")]
    output: PathBuf,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    match generate_report(&args.input, &args.output, args.format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn error_chain(e: &dyn Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
