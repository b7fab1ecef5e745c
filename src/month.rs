//! Calendar months, day counts and the month cursor used for navigation.

use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Calendar number of the month, 1 for January through 12 for December.
    pub fn number(self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
            Month::July => 7,
            Month::August => 8,
            Month::September => 9,
            Month::October => 10,
            Month::November => 11,
            Month::December => 12,
        }
    }

    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1..=12 => Some(Self::ALL[number as usize - 1]),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Number of days in the month for the given year.
    pub fn days_in(self, year: i32) -> u32 {
        match self {
            Month::February if is_leap_year(year) => 29,
            Month::February => 28,
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = String;

    /// Accepts a month number (`3`), a full name (`march`) or a three letter
    /// abbreviation (`mar`), case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(number) = s.parse::<u32>() {
            return Month::from_number(number)
                .ok_or_else(|| format!("month number must be 1-12, got {}", number));
        }

        let lower = s.to_lowercase();
        Month::ALL
            .iter()
            .copied()
            .find(|m| {
                let name = m.name().to_lowercase();
                name == lower || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| format!("unknown month `{}`", s))
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Cyclic position over the twelve months. Starts at January.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthCursor {
    index: usize,
}

impl MonthCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(month: Month) -> Self {
        Self {
            index: month.index(),
        }
    }

    pub fn current(&self) -> Month {
        Month::ALL[self.index]
    }

    /// Month after the current one, without moving.
    pub fn peek_next(&self) -> Month {
        Month::ALL[(self.index + 1) % Month::ALL.len()]
    }

    /// Month before the current one, without moving.
    pub fn peek_previous(&self) -> Month {
        Month::ALL[(self.index + Month::ALL.len() - 1) % Month::ALL.len()]
    }

    pub fn next(&mut self) -> Month {
        self.index = (self.index + 1) % Month::ALL.len();
        self.current()
    }

    pub fn previous(&mut self) -> Month {
        self.index = (self.index + Month::ALL.len() - 1) % Month::ALL.len();
        self.current()
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_apply_leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn should_count_days_in_month() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        let days: Vec<u32> = Month::ALL.iter().map(|m| m.days_in(2023)).collect();
        assert_eq!(days, expected);

        assert_eq!(Month::February.days_in(2024), 29);
        assert_eq!(Month::February.days_in(1900), 28);
    }

    #[test]
    fn should_round_trip_month_numbers() {
        for month in Month::ALL {
            assert_eq!(Month::from_number(month.number()), Some(month));
        }
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn should_parse_month_names() {
        assert_eq!("march".parse::<Month>(), Ok(Month::March));
        assert_eq!("Sep".parse::<Month>(), Ok(Month::September));
        assert_eq!("12".parse::<Month>(), Ok(Month::December));
        assert!("13".parse::<Month>().is_err());
        assert!("smarch".parse::<Month>().is_err());
    }

    #[test]
    fn should_wrap_cursor_backwards_from_january() {
        let mut cursor = MonthCursor::new();
        assert_eq!(cursor.current(), Month::January);
        assert_eq!(cursor.previous(), Month::December);
    }

    #[test]
    fn should_wrap_cursor_forwards_from_december() {
        let mut cursor = MonthCursor::at(Month::December);
        assert_eq!(cursor.peek_next(), Month::January);
        assert_eq!(cursor.next(), Month::January);
    }

    #[test]
    fn should_return_to_start_after_full_cycle() {
        let mut cursor = MonthCursor::at(Month::May);
        for _ in 0..12 {
            cursor.next();
        }
        assert_eq!(cursor.current(), Month::May);

        cursor.reset();
        assert_eq!(cursor.current(), Month::January);
        assert_eq!(cursor.peek_previous(), Month::December);
    }
}
