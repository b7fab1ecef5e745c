//! Command line interface.

pub mod command;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use crate::month::Month;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    /// Weather data file [default: <home>/weather-analyzer.csv]
    #[arg(short, long, global = true, env = "WEATHER_FILE")]
    pub file: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a year of synthetic weather, unless the file already exists
    Generate(GenerateArgs),
    /// Clear the data file and generate a new year
    Regenerate(GenerateArgs),
    /// Show the summary for a month
    Show {
        /// Month name or number
        #[arg(short, long, default_value = "january", conflicts_with = "all")]
        month: Month,
        /// Show every month
        #[arg(short, long)]
        all: bool,
    },
    /// Step through the months interactively
    Browse {},
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Year to generate [default: random, 2000-2025]
    #[arg(short, long)]
    pub year: Option<i32>,
    /// Seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Creates a progress bar.
pub fn create_progress_bar(size: u64, message: String) -> ProgressBar {
    ProgressBar::new(size).with_message(message).with_style(
        ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    )
}
