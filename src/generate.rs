//! Synthesises a year of daily weather and writes it to the data file.
//!
//! Each month is appended with its own file handle, one record per line
//! followed by an empty line.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, ErrorKind, Write},
    path::Path,
};

use indicatif::ProgressBar;
use rand::Rng;
use tracing::{debug, info};

use crate::{
    climate::MonthClimate,
    error::{Result, WeatherError},
    month::Month,
    reading::DayRecord,
};

/// Years drawn when the caller does not pick one.
pub const DEFAULT_YEARS: std::ops::RangeInclusive<i32> = 2000..=2025;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    Generated { year: i32 },
    /// The data file was already there; nothing was written.
    AlreadyExists,
}

/// Produces one day of weather for `month`.
pub fn generate_day<R: Rng>(
    climate: &MonthClimate,
    year: i32,
    month: Month,
    day: u32,
    rng: &mut R,
) -> DayRecord {
    let temperature = rng.random_range(climate.temperature_range(day));
    let humidity = match climate.humidity_range(day) {
        Some(range) => rng.random_range(range),
        None => 0,
    };
    let rained = climate.rain_probability > rng.random::<f64>();

    DayRecord {
        year,
        month,
        day,
        temperature,
        humidity,
        rained,
    }
}

/// Writes every day of `month` to `writer`.
pub fn write_month<W: Write, R: Rng>(
    writer: &mut W,
    year: i32,
    month: Month,
    rng: &mut R,
) -> io::Result<()> {
    let climate = MonthClimate::for_month(month);

    for day in 1..=month.days_in(year) {
        let record = generate_day(climate, year, month, day, rng);
        write!(writer, "{}\n\n", record.to_line())?;
    }

    Ok(())
}

/// Appends one month of records to the file at `file_path`, creating it if needed.
pub fn append_month<R: Rng>(file_path: &Path, year: i32, month: Month, rng: &mut R) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_path)
        .map_err(WeatherError::io(file_path))?;
    let mut writer = BufWriter::new(file);

    write_month(&mut writer, year, month, rng).map_err(WeatherError::io(file_path))?;
    writer.flush().map_err(WeatherError::io(file_path))?;

    debug!(%month, year, "appended month");

    Ok(())
}

/// Generates a full year into a new file.
///
/// Refuses to touch a file that already exists and reports `AlreadyExists`
/// instead; use [`regenerate`] to start over.
pub fn generate<R: Rng>(
    file_path: &Path,
    year: i32,
    rng: &mut R,
    progress: &ProgressBar,
) -> Result<GenerateOutcome> {
    if file_path.exists() {
        info!(path = %file_path.display(), "data file already generated");
        return Ok(GenerateOutcome::AlreadyExists);
    }

    create_parent_dir(file_path)?;

    match OpenOptions::new().write(true).create_new(true).open(file_path) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Ok(GenerateOutcome::AlreadyExists);
        }
        Err(e) => return Err(WeatherError::io(file_path)(e)),
    }

    fill_months(file_path, year, rng, progress)?;
    info!(path = %file_path.display(), year, "data file generated");

    Ok(GenerateOutcome::Generated { year })
}

/// Empties the data file, creating it and its directory if they do not exist.
pub fn clear(file_path: &Path) -> Result<()> {
    create_parent_dir(file_path)?;
    File::create(file_path).map_err(WeatherError::io(file_path))?;
    Ok(())
}

/// Clears the data file and fills it again with a fresh year.
pub fn regenerate<R: Rng>(
    file_path: &Path,
    year: i32,
    rng: &mut R,
    progress: &ProgressBar,
) -> Result<i32> {
    clear(file_path)?;
    fill_months(file_path, year, rng, progress)?;
    info!(path = %file_path.display(), year, "data file regenerated");

    Ok(year)
}

pub fn random_year<R: Rng>(rng: &mut R) -> i32 {
    rng.random_range(DEFAULT_YEARS)
}

fn create_parent_dir(file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(WeatherError::io(parent))?;
    }
    Ok(())
}

fn fill_months<R: Rng>(
    file_path: &Path,
    year: i32,
    rng: &mut R,
    progress: &ProgressBar,
) -> Result<()> {
    progress.set_length(Month::ALL.len() as u64);

    for month in Month::ALL {
        progress.set_message(format!("Generating {} {}", month, year));
        append_month(file_path, year, month, rng)?;
        progress.inc(1);
    }

    progress.finish_with_message(format!("Generated {}", year));

    Ok(())
}

// -- Tests -------------------------------------------------------------------
