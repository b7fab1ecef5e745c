mod cli;
mod climate;
mod deserialise;
mod error;
mod generate;
mod month;
mod reading;
mod session;

use std::io;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let file_path = match cli.file {
        Some(path) => path,
        None => command::default_data_file()?,
    };

    let result = match &cli.command {
        Commands::Generate(args) => command::generate(&file_path, args),
        Commands::Regenerate(args) => command::regenerate(&file_path, args),
        Commands::Show { month, all } => command::show(&file_path, *month, *all),
        Commands::Browse {} => command::browse(&file_path),
    };

    match result {
        Ok(message) => println!("{}", message),
        Err(e) => eprintln!("Error: {}", e),
    }

    Ok(())
}
