//! Monthly climate parameters used to synthesise daily weather.
//!
//! Values are New York City monthly normals in Fahrenheit. Months with both
//! humidity bounds at zero have no humidity model and always report 0.

use std::ops::Range;

use crate::month::Month;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthClimate {
    pub low_temp: i32,
    pub high_temp: i32,
    pub temp_drift: i32,
    pub low_humidity: i32,
    pub high_humidity: i32,
    pub humidity_drift: i32,
    pub rain_probability: f64,
}

const fn entry(
    low_temp: i32,
    high_temp: i32,
    temp_drift: i32,
    low_humidity: i32,
    high_humidity: i32,
    humidity_drift: i32,
    rain_probability: f64,
) -> MonthClimate {
    MonthClimate {
        low_temp,
        high_temp,
        temp_drift,
        low_humidity,
        high_humidity,
        humidity_drift,
        rain_probability,
    }
}

/// One entry per month, January first.
pub const CLIMATE_TABLE: [MonthClimate; 12] = [
    entry(31, 41, -1, 0, 0, 0, 0.23),
    entry(28, 40, 5, 0, 0, 0, 0.24),
    entry(33, 46, 11, 0, 0, 0, 0.27),
    entry(41, 55, 11, 0, 0, 0, 0.29),
    entry(51, 67, 8, 0, 12, 12, 0.31),
    entry(61, 75, 7, 12, 37, 25, 0.32),
    entry(69, 83, 1, 38, 54, 16, 0.33),
    entry(71, 84, -4, 35, 54, -19, 0.31),
    entry(67, 80, -9, 11, 33, -22, 0.26),
    entry(57, 70, -10, 1, 11, 10, 0.24),
    entry(47, 59, -9, 0, 0, 0, 0.24),
    entry(38, 49, -7, 0, 0, 0, 0.26),
];

impl MonthClimate {
    pub fn for_month(month: Month) -> &'static MonthClimate {
        &CLIMATE_TABLE[month.number() as usize - 1]
    }

    /// Half-open temperature interval sampled on `day`.
    pub fn temperature_range(&self, day: u32) -> Range<i32> {
        sampling_range(self.low_temp, self.high_temp, self.temp_drift, day)
    }

    /// Half-open humidity interval sampled on `day`, or `None` when the month
    /// has no humidity model.
    pub fn humidity_range(&self, day: u32) -> Option<Range<i32>> {
        let high = compensate_high(self.high_humidity);
        if self.low_humidity == 0 && high == 0 {
            return None;
        }

        Some(sampling_range(
            self.low_humidity,
            self.high_humidity,
            self.humidity_drift,
            day,
        ))
    }
}

/// Coarse day-of-month bucket: 0 for days 1-9, 1 for 10-19, 2 for 20-29, 3 from 30.
pub fn phase(day: u32) -> i32 {
    (day / 10) as i32
}

// A non-zero high bound is raised by one so the nominal high is reachable
// through the exclusive upper end. Applies to every month, January included.
fn compensate_high(high: i32) -> i32 {
    if high != 0 {
        high + 1
    } else {
        high
    }
}

// Both bounds shift by (drift / 3) * phase, using truncating integer division.
fn sampling_range(low: i32, high: i32, drift: i32, day: u32) -> Range<i32> {
    let shift = (drift / 3) * phase(day);
    (low + shift)..(compensate_high(high) + shift)
}

// -- Tests -------------------------------------------------------------------
