//! Monthly aggregates computed from day records.

use std::fmt;

use tracing::debug;

use crate::{
    error::{Result, WeatherError},
    month::Month,
};

use super::DayRecord;

/// Months averaging below this are cold.
pub const COLD_BELOW: f64 = 50.0;
/// Months averaging below this (and not cold) are warm.
pub const WARM_BELOW: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Cold,
    Warm,
    Hot,
}

impl Classification {
    pub fn from_average(average: f64) -> Self {
        if average < COLD_BELOW {
            Classification::Cold
        } else if average < WARM_BELOW {
            Classification::Warm
        } else {
            Classification::Hot
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Classification::Cold => "cold",
            Classification::Warm => "warm",
            Classification::Hot => "hot",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub average_temperature: f64,
    pub rainy_days: usize,
    pub classification: Classification,
    pub days: usize,
}

/// Reduces a month of records. Fails with `EmptyMonth` when there are none.
pub fn summarize(records: &[DayRecord]) -> Result<MonthSummary> {
    if records.is_empty() {
        return Err(WeatherError::EmptyMonth);
    }

    let total: f64 = records.iter().map(|r| f64::from(r.temperature)).sum();
    let rainy_days = records.iter().filter(|r| r.rained).count();
    let average_temperature = total / records.len() as f64;

    debug!(
        total,
        average_temperature,
        days = records.len(),
        "summarised month"
    );

    Ok(MonthSummary {
        average_temperature,
        rainy_days,
        classification: Classification::from_average(average_temperature),
        days: records.len(),
    })
}

/// Summaries for every month present in `records`, January first.
pub fn summarize_year(records: &[DayRecord]) -> Vec<(Month, MonthSummary)> {
    Month::ALL
        .iter()
        .filter_map(|&month| {
            let days: Vec<DayRecord> = records
                .iter()
                .filter(|r| r.month == month)
                .cloned()
                .collect();
            summarize(&days).ok().map(|summary| (month, summary))
        })
        .collect()
}

// -- Tests -------------------------------------------------------------------
