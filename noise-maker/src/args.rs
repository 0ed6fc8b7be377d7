use std::path::PathBuf;

use clap::Parser;
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate fake semicolon-delimited access logs for testing", long_about = None)]
pub struct CliArgs {
    #[arg(long, default_value = "logfiles/requests.log")]
    output: PathBuf,

    #[arg(long, default_value_t = 10000)]
    lines: usize,

    /// Distinct client addresses to draw from
    #[arg(long, default_value_t = 50)]
    hosts: usize,

    /// Share of lines, 0.0 to 1.0, that are deliberately broken
    #[arg(long, default_value_t = 0.0)]
    malformed_ratio: f64,

    /// Fixed seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}
