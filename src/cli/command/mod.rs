pub mod browse;
pub mod generate;
pub mod show;

use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    error::{Result, WeatherError},
    month::MonthCursor,
    reading::MonthSummary,
};

pub use browse::browse;
pub use generate::{generate, regenerate};
pub use show::show;

const DEFAULT_FILE_NAME: &str = "weather-analyzer.csv";

/// The data file in the user's home directory.
pub fn default_data_file() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_FILE_NAME))
        .ok_or(WeatherError::NoHomeDirectory)
}

/// Seeded generator when a seed is given, otherwise seeded from the thread RNG.
pub fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}

/// Renders a month summary the way the analytics screen lays it out.
pub fn render_summary(cursor: &MonthCursor, summary: &MonthSummary) -> String {
    format!(
        "Here is the data for: {}\n\
         Average temperature is: {:.3}\n\
         The temperature is considered: {}\n\
         The number of rainy days is: {}\n\
         Next Month: {} | Previous Month: {}",
        cursor.current(),
        summary.average_temperature,
        summary.classification,
        summary.rainy_days,
        cursor.peek_next(),
        cursor.peek_previous(),
    )
}

// -- Tests -------------------------------------------------------------------
