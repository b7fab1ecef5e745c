use chrono::NaiveDate;

use crate::{error::RecordError, month::Month};

/// One synthetic day of weather.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub year: i32,
    pub month: Month,
    pub day: u32,
    pub temperature: i32,
    /// 0 when the month has no humidity model.
    pub humidity: i32,
    pub rained: bool,
}

impl DayRecord {
    /// Decodes a `year-month-day,temperature,humidity,rained` line.
    pub fn from_line(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.trim().split(',').collect();
        if fields.len() != 4 {
            return Err(RecordError::FieldCount(fields.len()));
        }

        let date: Vec<&str> = fields[0].split('-').collect();
        if date.len() != 3 {
            return Err(RecordError::DateLayout(fields[0].to_string()));
        }

        let year = parse_field("year", date[0])?;
        let month_number: u32 = parse_field("month", date[1])?;
        let day = parse_field("day", date[2])?;
        if NaiveDate::from_ymd_opt(year, month_number, day).is_none() {
            return Err(RecordError::InvalidDate {
                year,
                month: month_number,
                day,
            });
        }
        let month = Month::from_number(month_number).ok_or(RecordError::InvalidDate {
            year,
            month: month_number,
            day,
        })?;

        let temperature = parse_field("temperature", fields[1])?;
        let humidity = parse_field("humidity", fields[2])?;
        let rained = match parse_field::<i32>("rain flag", fields[3])? {
            0 => false,
            1 => true,
            other => return Err(RecordError::RainFlag(other)),
        };

        Ok(DayRecord {
            year,
            month,
            day,
            temperature,
            humidity,
            rained,
        })
    }

    /// Encodes the record without a trailing line separator.
    pub fn to_line(&self) -> String {
        format!(
            "{}-{}-{},{},{},{}",
            self.year,
            self.month.number(),
            self.day,
            self.temperature,
            self.humidity,
            u8::from(self.rained)
        )
    }
}

/// Reads only the month number from the date of a record line.
pub fn month_field(line: &str) -> Result<u32, RecordError> {
    let date = line.trim().split(',').next().unwrap_or_default();
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 {
        return Err(RecordError::DateLayout(date.to_string()));
    }

    parse_field("month", parts[1])
}

fn parse_field<T>(field: &'static str, value: &str) -> Result<T, RecordError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    let value = value.trim();
    value.parse().map_err(|source| RecordError::Number {
        field,
        value: value.to_string(),
        source,
    })
}

// -- Tests ----------------------------------------------------------------------------
