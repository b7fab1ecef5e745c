//! Errors surfaced to the caller by generation, parsing and aggregation.

use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("I/O error on `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line_number}: {source} (`{line}`)")]
    Parse {
        line_number: usize,
        line: String,
        #[source]
        source: RecordError,
    },
    #[error("no data for month")]
    EmptyMonth,
    #[error("no data file has been loaded")]
    NoFileLoaded,
    #[error("could not determine the home directory")]
    NoHomeDirectory,
}

impl WeatherError {
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| WeatherError::Io { path, source }
    }
}

/// Defects of a single record line.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("expected 4 comma separated fields, found {0}")]
    FieldCount(usize),
    #[error("expected a year-month-day date, found `{0}`")]
    DateLayout(String),
    #[error("invalid {field} `{value}`: {source}")]
    Number {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("no such date {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("rain flag must be 0 or 1, found {0}")]
    RainFlag(i32),
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
