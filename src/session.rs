//! State owned by the presentation layer: the data file, the last generated
//! year and the month being viewed.

use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use rand::Rng;
use tracing::info;

use crate::{
    deserialise::read_month,
    error::{Result, WeatherError},
    generate::{self, random_year, GenerateOutcome},
    month::{Month, MonthCursor},
    reading::{summarize, MonthSummary},
};

#[derive(Debug, Clone)]
pub struct Session {
    data_file: PathBuf,
    loaded_file: Option<PathBuf>,
    generated_year: Option<i32>,
    cursor: MonthCursor,
}

impl Session {
    /// `data_file` is where generation writes.
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            loaded_file: None,
            generated_year: None,
            cursor: MonthCursor::new(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn generated_year(&self) -> Option<i32> {
        self.generated_year
    }

    pub fn current_month(&self) -> Month {
        self.cursor.current()
    }

    pub fn cursor(&self) -> &MonthCursor {
        &self.cursor
    }

    /// Generates a year of data unless the data file already exists.
    pub fn generate<R: Rng>(
        &mut self,
        year: Option<i32>,
        rng: &mut R,
        progress: &ProgressBar,
    ) -> Result<GenerateOutcome> {
        if self.data_file.exists() {
            return Ok(GenerateOutcome::AlreadyExists);
        }

        let year = year.unwrap_or_else(|| random_year(rng));
        let outcome = generate::generate(&self.data_file, year, rng, progress)?;

        if let GenerateOutcome::Generated { year } = outcome {
            self.generated_year = Some(year);
        }

        Ok(outcome)
    }

    /// Clears the data file and generates a fresh year into it.
    pub fn regenerate<R: Rng>(
        &mut self,
        year: Option<i32>,
        rng: &mut R,
        progress: &ProgressBar,
    ) -> Result<i32> {
        let year = year.unwrap_or_else(|| random_year(rng));
        let year = generate::regenerate(&self.data_file, year, rng, progress)?;
        self.generated_year = Some(year);

        Ok(year)
    }

    /// Loads `file_path` and returns the January summary.
    ///
    /// The file only becomes the loaded one if January can be summarised.
    pub fn load(&mut self, file_path: impl Into<PathBuf>) -> Result<MonthSummary> {
        let file_path = file_path.into();
        let summary = summarize_month(&file_path, Month::January)?;

        info!(path = %file_path.display(), "loaded data file");
        self.loaded_file = Some(file_path);
        self.cursor.reset();

        Ok(summary)
    }

    /// Loads `file_path` and moves straight to `month`.
    pub fn load_at(&mut self, file_path: impl Into<PathBuf>, month: Month) -> Result<MonthSummary> {
        let file_path = file_path.into();
        let summary = summarize_month(&file_path, month)?;

        self.loaded_file = Some(file_path);
        self.cursor = MonthCursor::at(month);

        Ok(summary)
    }

    /// Re-reads the loaded file for the month under the cursor.
    pub fn current_summary(&self) -> Result<MonthSummary> {
        let file_path = self.loaded_file.as_ref().ok_or(WeatherError::NoFileLoaded)?;
        summarize_month(file_path, self.cursor.current())
    }

    /// Moves to the next month and summarises it. The cursor stays moved
    /// even when the read fails.
    pub fn next_month(&mut self) -> Result<MonthSummary> {
        if self.loaded_file.is_none() {
            return Err(WeatherError::NoFileLoaded);
        }
        self.cursor.next();
        self.current_summary()
    }

    /// Moves to the previous month and summarises it. The cursor stays moved
    /// even when the read fails.
    pub fn previous_month(&mut self) -> Result<MonthSummary> {
        if self.loaded_file.is_none() {
            return Err(WeatherError::NoFileLoaded);
        }
        self.cursor.previous();
        self.current_summary()
    }
}

fn summarize_month(file_path: &Path, month: Month) -> Result<MonthSummary> {
    let records = read_month(file_path, month)?;
    summarize(&records)
}

// -- Tests -------------------------------------------------------------------
