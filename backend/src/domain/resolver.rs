//! Prayer time lookup with a bounded nearest-date fallback.
//!
//! When the requested date is missing, neighbouring dates are tried in a fixed
//! scan order: one day back, one day forward, two days back, two days forward,
//! and so on up to [`SEARCH_WINDOW_DAYS`]. The first date present wins. This is
//! a scan-order search, not a closest-distance search.

use chrono::{Days, NaiveDate};

use super::models::DayTimes;
use super::schedule::{Schedule, DATE_FORMAT};

/// Furthest offset, in days, tried on either side of the requested date
pub const SEARCH_WINDOW_DAYS: u64 = 7;

/// Prayer times found for a requested date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTimes {
    pub times: DayTimes,
    /// The neighbouring date whose times were used, if not an exact match
    pub substituted_from: Option<NaiveDate>,
}

impl ResolvedTimes {
    /// Human-readable note for substituted times
    pub fn note(&self) -> Option<String> {
        self.substituted_from
            .map(|date| format!("estimated time (from {})", date.format(DATE_FORMAT)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The schedule holds no data at all
    #[error("prayer times unavailable — source not loaded")]
    Unavailable,
    /// Neither the date nor any neighbour within the window is present
    #[error("no prayer times available for {0}")]
    NoDataForDate(NaiveDate),
}

impl ResolveError {
    /// Times a caller can render without further checks.
    /// Only `NoDataForDate` carries them.
    pub fn placeholder_times(&self) -> Option<DayTimes> {
        match self {
            ResolveError::Unavailable => None,
            ResolveError::NoDataForDate(_) => Some(DayTimes::placeholder()),
        }
    }
}

/// Look up the prayer times for `date`. Never modifies the schedule.
pub fn resolve(schedule: &Schedule, date: NaiveDate) -> Result<ResolvedTimes, ResolveError> {
    if schedule.is_empty() {
        return Err(ResolveError::Unavailable);
    }

    if let Some(times) = schedule.get(&date) {
        return Ok(ResolvedTimes {
            times: times.clone(),
            substituted_from: None,
        });
    }

    fallback_dates(date)
        .find_map(|candidate| {
            schedule.get(&candidate).map(|times| ResolvedTimes {
                times: times.clone(),
                substituted_from: Some(candidate),
            })
        })
        .ok_or(ResolveError::NoDataForDate(date))
}

/// Neighbouring dates in the order they are tried: -1, +1, -2, +2, ... -7, +7.
/// Offsets that fall outside the representable calendar are skipped.
pub fn fallback_dates(date: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (1..=SEARCH_WINDOW_DAYS).flat_map(move |offset| {
        let earlier = date.checked_sub_days(Days::new(offset));
        let later = date.checked_add_days(Days::new(offset));
        earlier.into_iter().chain(later)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn times(tag: &str) -> DayTimes {
        DayTimes {
            fajr: format!("{}-fajr", tag),
            sunrise: format!("{}-sunrise", tag),
            dhuhr: format!("{}-dhuhr", tag),
            asr: format!("{}-asr", tag),
            maghrib: format!("{}-maghrib", tag),
            isha: format!("{}-isha", tag),
        }
    }

    fn schedule_with(dates: &[NaiveDate]) -> Schedule {
        dates
            .iter()
            .map(|d| (*d, times(&d.format(DATE_FORMAT).to_string())))
            .collect()
    }

    #[test]
    fn test_exact_match_has_no_note() {
        let schedule = Schedule::parse("2024-06-01 05:30 06:00 13:00 17:00 20:30 22:00").schedule;

        let resolved = resolve(&schedule, date(2024, 6, 1)).unwrap();

        assert_eq!(
            resolved.times,
            DayTimes::from_columns(&["05:30", "06:00", "13:00", "17:00", "20:30", "22:00"]).unwrap()
        );
        assert_eq!(resolved.substituted_from, None);
        assert_eq!(resolved.note(), None);
    }

    #[test]
    fn test_past_preferred_at_equal_distance() {
        let schedule = schedule_with(&[date(2024, 6, 1), date(2024, 6, 3)]);

        let resolved = resolve(&schedule, date(2024, 6, 2)).unwrap();

        assert_eq!(resolved.substituted_from, Some(date(2024, 6, 1)));
        assert_eq!(resolved.times, times("2024-06-01"));
        assert_eq!(resolved.note().unwrap(), "estimated time (from 2024-06-01)");
    }

    #[test]
    fn test_future_neighbour_found_at_smaller_offset() {
        // offset 1 checks 06-02 (absent) then 06-04 (present)
        let schedule = schedule_with(&[date(2024, 6, 1), date(2024, 6, 4)]);

        let resolved = resolve(&schedule, date(2024, 6, 3)).unwrap();

        assert_eq!(resolved.substituted_from, Some(date(2024, 6, 4)));
    }

    #[test]
    fn test_smaller_offset_beats_larger_offset() {
        // 06-01 sits at offset 2 in the past, 06-06 at offset 3 in the future
        let schedule = schedule_with(&[date(2024, 6, 1), date(2024, 6, 6)]);

        let resolved = resolve(&schedule, date(2024, 6, 3)).unwrap();

        assert_eq!(resolved.substituted_from, Some(date(2024, 6, 1)));
    }

    #[test]
    fn test_window_edge_is_inclusive() {
        let schedule = schedule_with(&[date(2024, 6, 17)]);

        let resolved = resolve(&schedule, date(2024, 6, 10)).unwrap();
        assert_eq!(resolved.substituted_from, Some(date(2024, 6, 17)));

        let missed = resolve(&schedule, date(2024, 6, 9)).unwrap_err();
        assert_eq!(missed, ResolveError::NoDataForDate(date(2024, 6, 9)));
    }

    #[test]
    fn test_out_of_window_returns_placeholders() {
        let schedule = schedule_with(&[date(2024, 1, 1)]);

        let err = resolve(&schedule, date(2024, 2, 1)).unwrap_err();

        assert_eq!(err, ResolveError::NoDataForDate(date(2024, 2, 1)));
        assert_eq!(err.to_string(), "no prayer times available for 2024-02-01");
        let placeholder = err.placeholder_times().unwrap();
        assert!(placeholder.entries().iter().all(|(_, value)| *value == "--:--"));
    }

    #[test]
    fn test_empty_schedule_is_unavailable() {
        let err = resolve(&Schedule::empty(), date(2024, 6, 1)).unwrap_err();

        assert_eq!(err, ResolveError::Unavailable);
        assert_eq!(err.to_string(), "prayer times unavailable — source not loaded");
        assert_eq!(err.placeholder_times(), None);
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let schedule = schedule_with(&[date(2024, 6, 1), date(2024, 6, 3)]);

        for requested in [date(2024, 6, 1), date(2024, 6, 2), date(2024, 7, 1)] {
            assert_eq!(resolve(&schedule, requested), resolve(&schedule, requested));
        }
    }

    #[test]
    fn test_resolve_crosses_month_and_year_boundaries() {
        let schedule = schedule_with(&[date(2025, 1, 2)]);

        let resolved = resolve(&schedule, date(2024, 12, 30)).unwrap();

        assert_eq!(resolved.substituted_from, Some(date(2025, 1, 2)));
    }

    #[test]
    fn test_fallback_scan_order() {
        let order: Vec<NaiveDate> = fallback_dates(date(2024, 6, 10)).take(6).collect();

        assert_eq!(
            order,
            vec![
                date(2024, 6, 9),
                date(2024, 6, 11),
                date(2024, 6, 8),
                date(2024, 6, 12),
                date(2024, 6, 7),
                date(2024, 6, 13),
            ]
        );
        assert_eq!(fallback_dates(date(2024, 6, 10)).count(), 14);
    }
}
