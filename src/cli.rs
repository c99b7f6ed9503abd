//! Command-line interface parsing
//!
//! This module handles CLI argument parsing using clap.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "plunger")]
#[command(version = "0.1.0")]
#[command(
    about = "Push the big red button: fire a GitHub Actions dispatch from your terminal",
    long_about = None
)]
pub struct Cli {
    /// Enable logging to specified file
    #[arg(short = 'l', long, value_name = "PATH")]
    pub log_file: Option<String>,
}
