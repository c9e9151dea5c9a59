//! In-memory prayer time schedule and its line-oriented source format.
//!
//! Each meaningful source line looks like
//! `2024-06-01 05:30 06:00 13:00 17:00 20:30 22:00`: an ISO date followed by
//! fajr, sunrise, dhuhr, asr, maghrib and isha. Blank lines and lines starting
//! with `#` are ignored. A line that cannot be understood is skipped and
//! reported; it never aborts the load.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::models::DayTimes;

/// Date format of the first column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date plus six times
pub const MIN_TOKENS: usize = 7;

/// Why a source line was skipped
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("line {line}: expected at least 7 fields, found {found}")]
    TooFewTokens { line: usize, found: usize },
    #[error("line {line}: invalid date '{value}'")]
    InvalidDate { line: usize, value: String },
}

impl LineError {
    /// 1-based line number in the source
    pub fn line_number(&self) -> usize {
        match self {
            LineError::TooFewTokens { line, .. } | LineError::InvalidDate { line, .. } => *line,
        }
    }
}

/// Date to prayer times lookup table. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    days: BTreeMap<NaiveDate, DayTimes>,
}

/// A parsed schedule together with the lines that were skipped
#[derive(Debug, Clone, Default)]
pub struct ParsedSchedule {
    pub schedule: Schedule,
    pub skipped: Vec<LineError>,
}

impl Schedule {
    /// A schedule with no days, as produced when the source could not be read
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse schedule source text.
    ///
    /// When a date appears more than once the last line wins.
    pub fn parse(text: &str) -> ParsedSchedule {
        let mut days = BTreeMap::new();
        let mut skipped = Vec::new();

        for (index, raw_line) in text.lines().enumerate() {
            match parse_line(raw_line, index + 1) {
                Ok(Some((date, times))) => {
                    days.insert(date, times);
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("Skipping schedule line: {} ({:?})", e, raw_line.trim());
                    skipped.push(e);
                }
            }
        }

        info!("Prayer times loaded for {} days ({} lines skipped)", days.len(), skipped.len());

        ParsedSchedule {
            schedule: Schedule { days },
            skipped,
        }
    }

    pub fn get(&self, date: &NaiveDate) -> Option<&DayTimes> {
        self.days.get(date)
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.days.contains_key(date)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of dates covered
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Earliest covered date
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    /// Latest covered date
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }
}

impl FromIterator<(NaiveDate, DayTimes)> for Schedule {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, DayTimes)>>(iter: I) -> Self {
        Schedule {
            days: iter.into_iter().collect(),
        }
    }
}

/// Parse one source line. `Ok(None)` means the line carries no data.
fn parse_line(raw_line: &str, line: usize) -> Result<Option<(NaiveDate, DayTimes)>, LineError> {
    let trimmed = raw_line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.len() < MIN_TOKENS {
        return Err(LineError::TooFewTokens {
            line,
            found: tokens.len(),
        });
    }

    let date = NaiveDate::parse_from_str(tokens[0], DATE_FORMAT).map_err(|_| LineError::InvalidDate {
        line,
        value: tokens[0].to_string(),
    })?;

    let times = DayTimes::from_columns(&tokens[1..]).ok_or(LineError::TooFewTokens {
        line,
        found: tokens.len(),
    })?;

    Ok(Some((date, times)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_well_formed_line() {
        let parsed = Schedule::parse("2024-06-01 05:30 06:00 13:00 17:00 20:30 22:00\n");

        assert!(parsed.skipped.is_empty());
        assert_eq!(parsed.schedule.len(), 1);

        let times = parsed.schedule.get(&date(2024, 6, 1)).unwrap();
        assert_eq!(times.fajr, "05:30");
        assert_eq!(times.isha, "22:00");
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let text = "# Prayer times 2024\n\n   \n  # indented comment\n2024-06-01 05:30 06:00 13:00 17:00 20:30 22:00\n";
        let parsed = Schedule::parse(text);

        assert!(parsed.skipped.is_empty());
        assert_eq!(parsed.schedule.len(), 1);
    }

    #[test]
    fn test_parse_tolerates_malformed_lines() {
        let text = "2024-06-01 05:30 06:00 13:00 17:00 20:30 22:00\n\
                    2024-06-02 05:31 06:01 13:00 17:00\n";
        let parsed = Schedule::parse(text);

        assert_eq!(parsed.schedule.len(), 1);
        assert!(parsed.schedule.contains(&date(2024, 6, 1)));
        assert!(!parsed.schedule.contains(&date(2024, 6, 2)));
        assert_eq!(parsed.skipped, vec![LineError::TooFewTokens { line: 2, found: 5 }]);
    }

    #[test]
    fn test_parse_reports_invalid_dates() {
        let text = "2024-13-01 05:30 06:00 13:00 17:00 20:30 22:00\n\
                    01.06.2024 05:30 06:00 13:00 17:00 20:30 22:00\n";
        let parsed = Schedule::parse(text);

        assert!(parsed.schedule.is_empty());
        assert_eq!(parsed.skipped.len(), 2);
        assert_eq!(
            parsed.skipped[0],
            LineError::InvalidDate {
                line: 1,
                value: "2024-13-01".to_string()
            }
        );
        assert_eq!(parsed.skipped[1].line_number(), 2);
    }

    #[test]
    fn test_parse_last_duplicate_wins() {
        let text = "2024-06-01 05:30 06:00 13:00 17:00 20:30 22:00\n\
                    2024-06-01 04:00 05:00 12:00 16:00 19:00 21:00\n";
        let parsed = Schedule::parse(text);

        assert_eq!(parsed.schedule.len(), 1);
        assert_eq!(parsed.schedule.get(&date(2024, 6, 1)).unwrap().fajr, "04:00");
    }

    #[test]
    fn test_parse_keeps_values_verbatim_and_ignores_extra_columns() {
        let parsed = Schedule::parse("2024-06-01\t5.30 sunrise? 13:00 17:00 20:30 22:00 trailing notes\n");
        let times = parsed.schedule.get(&date(2024, 6, 1)).unwrap();

        assert_eq!(times.fajr, "5.30");
        assert_eq!(times.sunrise, "sunrise?");
        assert_eq!(times.isha, "22:00");
    }

    #[test]
    fn test_first_and_last_date() {
        let text = "2024-06-03 a b c d e f\n2024-06-01 a b c d e f\n2024-06-02 a b c d e f\n";
        let schedule = Schedule::parse(text).schedule;

        assert_eq!(schedule.first_date(), Some(date(2024, 6, 1)));
        assert_eq!(schedule.last_date(), Some(date(2024, 6, 3)));
        assert_eq!(Schedule::empty().first_date(), None);
    }
}
