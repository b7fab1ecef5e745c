//! Reads a weather data file back into day records.

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use tracing::debug;

use crate::error::{RecordError, Result, WeatherError};
use crate::month::Month;
use crate::reading::{daily::month_field, DayRecord};

/// Load the records of `month` from the data file.
///
/// Blank lines are skipped. Each line's month field is read first, and only
/// lines of `month` are decoded in full. A bad month field on any line, or a
/// malformed line of `month`, fails the whole read. The file is re-read on
/// every call.
pub fn read_month(file_path: &Path, month: Month) -> Result<Vec<DayRecord>> {
    let mut records = Vec::new();

    for_each_line(file_path, |line_number, line| {
        let line_month = month_field(line).map_err(parse_error(line_number, line))?;
        if line_month == month.number() {
            let record = DayRecord::from_line(line).map_err(parse_error(line_number, line))?;
            records.push(record);
        }
        Ok(())
    })?;

    debug!(%month, days = records.len(), "read month");

    Ok(records)
}

/// Load every record in the data file, in file order.
pub fn read_records(file_path: &Path) -> Result<Vec<DayRecord>> {
    let mut records = Vec::new();

    for_each_line(file_path, |line_number, line| {
        let record = DayRecord::from_line(line).map_err(parse_error(line_number, line))?;
        records.push(record);
        Ok(())
    })?;

    Ok(records)
}

// Calls `f` with the 1-based number and text of every non-blank line.
fn for_each_line<F>(file_path: &Path, mut f: F) -> Result<()>
where
    F: FnMut(usize, &str) -> Result<()>,
{
    let file = File::open(file_path).map_err(WeatherError::io(file_path))?;
    let reader = io::BufReader::new(file);

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(WeatherError::io(file_path))?;
        if line.trim().is_empty() {
            continue;
        }
        f(idx + 1, &line)?;
    }

    Ok(())
}

fn parse_error(line_number: usize, line: &str) -> impl FnOnce(RecordError) -> WeatherError + '_ {
    move |source| WeatherError::Parse {
        line_number,
        line: line.to_string(),
        source,
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_fixture(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("weather.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn should_filter_to_requested_month() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "2020-1-1,35,0,0\n\n2020-1-2,38,0,1\n\n2020-2-1,30,0,0\n\n",
        );

        let january = read_month(&path, Month::January).unwrap();
        assert_eq!(january.len(), 2);
        assert_eq!(january[1].temperature, 38);
        assert!(january[1].rained);

        let february = read_month(&path, Month::February).unwrap();
        assert_eq!(february.len(), 1);

        let march = read_month(&path, Month::March).unwrap();
        assert!(march.is_empty());
    }

    #[test]
    fn should_tolerate_blank_line_padding() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "\n\n   \n2020-3-4,40,0,0\n\n\n\n2020-3-5,41,0,0");

        let records = read_month(&path, Month::March).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn should_only_decode_lines_of_requested_month() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "2020-1-1,35,0,0\n\n2020-2-1,thirty,0,0\n\n");

        let january = read_month(&path, Month::January).unwrap();
        assert_eq!(january.len(), 1);

        let err = read_month(&path, Month::February).unwrap_err();
        match err {
            WeatherError::Parse {
                line_number, line, ..
            } => {
                assert_eq!(line_number, 3);
                assert_eq!(line, "2020-2-1,thirty,0,0");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn should_fail_every_month_on_bad_month_field() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "2020-1-1,35,0,0\n\n2020-x-1,30,0,0\n\n");

        let err = read_month(&path, Month::January).unwrap_err();
        assert!(matches!(
            err,
            WeatherError::Parse {
                line_number: 3,
                source: RecordError::Number { field: "month", .. },
                ..
            }
        ));
    }

    #[test]
    fn should_fail_full_read_on_any_malformed_line() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "2020-1-1,35,0,0\n\n2020-2-1,30,0,7\n\n");

        let err = read_records(&path).unwrap_err();
        assert!(matches!(
            err,
            WeatherError::Parse {
                source: RecordError::RainFlag(7),
                ..
            }
        ));
    }

    #[test]
    fn should_report_missing_file_as_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_month(&dir.path().join("missing.csv"), Month::January).unwrap_err();
        assert!(matches!(err, WeatherError::Io { .. }));
    }
}
