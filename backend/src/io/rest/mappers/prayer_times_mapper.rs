//! Conversions between domain prayer time results and shared DTOs.

use shared::{PrayerTimesResponse, ReloadScheduleResponse, ScheduleStatusResponse, SkippedLine};

use crate::domain::models::DayTimes;
use crate::domain::schedule::{LineError, DATE_FORMAT};
use crate::domain::{ReloadOutcome, ResolveError, ResolvedTimes, ScheduleStatus};
use crate::storage::ScheduleError;

/// Mapper for prayer time DTOs.
pub struct PrayerTimesMapper;

impl PrayerTimesMapper {
    /// Converts a lookup result into its wire record.
    ///
    /// Errors become data: `NoDataForDate` still carries placeholder times so
    /// callers can render it directly.
    pub fn to_dto(result: &Result<ResolvedTimes, ResolveError>) -> PrayerTimesResponse {
        match result {
            Ok(resolved) => PrayerTimesResponse {
                note: resolved.note(),
                ..Self::times_to_dto(&resolved.times)
            },
            Err(e) => {
                let times = e
                    .placeholder_times()
                    .map(|t| Self::times_to_dto(&t))
                    .unwrap_or_default();
                PrayerTimesResponse {
                    error: Some(e.to_string()),
                    ..times
                }
            }
        }
    }

    fn times_to_dto(times: &DayTimes) -> PrayerTimesResponse {
        PrayerTimesResponse {
            fajr: Some(times.fajr.clone()),
            sunrise: Some(times.sunrise.clone()),
            dhuhr: Some(times.dhuhr.clone()),
            asr: Some(times.asr.clone()),
            maghrib: Some(times.maghrib.clone()),
            isha: Some(times.isha.clone()),
            note: None,
            error: None,
        }
    }

    pub fn status_to_dto(status: ScheduleStatus) -> ScheduleStatusResponse {
        ScheduleStatusResponse {
            loaded: status.is_loaded(),
            day_count: status.day_count,
            first_date: status.first_date.map(|d| d.format(DATE_FORMAT).to_string()),
            last_date: status.last_date.map(|d| d.format(DATE_FORMAT).to_string()),
            source_path: status.source_path.map(|p| p.display().to_string()),
        }
    }

    pub fn reload_to_dto(outcome: ReloadOutcome) -> ReloadScheduleResponse {
        ReloadScheduleResponse {
            success: true,
            message: format!(
                "Loaded prayer times for {} days from {}",
                outcome.day_count,
                outcome.source_path.display()
            ),
            day_count: outcome.day_count,
            skipped_lines: outcome.skipped.iter().map(Self::skipped_to_dto).collect(),
        }
    }

    pub fn reload_failure_to_dto(error: &ScheduleError, current_day_count: usize) -> ReloadScheduleResponse {
        ReloadScheduleResponse {
            success: false,
            message: format!("{}; keeping the current schedule", error),
            day_count: current_day_count,
            skipped_lines: Vec::new(),
        }
    }

    fn skipped_to_dto(line: &LineError) -> SkippedLine {
        SkippedLine {
            line_number: line.line_number(),
            reason: line.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_times() -> DayTimes {
        DayTimes::from_columns(&["05:30", "06:00", "13:00", "17:00", "20:30", "22:00"]).unwrap()
    }

    #[test]
    fn test_exact_hit() {
        let dto = PrayerTimesMapper::to_dto(&Ok(ResolvedTimes {
            times: sample_times(),
            substituted_from: None,
        }));

        assert_eq!(dto.fajr.as_deref(), Some("05:30"));
        assert_eq!(dto.isha.as_deref(), Some("22:00"));
        assert_eq!(dto.note, None);
        assert_eq!(dto.error, None);
    }

    #[test]
    fn test_substituted_hit_carries_note() {
        let dto = PrayerTimesMapper::to_dto(&Ok(ResolvedTimes {
            times: sample_times(),
            substituted_from: Some(date(2024, 6, 1)),
        }));

        assert!(dto.has_times());
        assert_eq!(dto.note.as_deref(), Some("estimated time (from 2024-06-01)"));
        assert_eq!(dto.error, None);
    }

    #[test]
    fn test_no_data_has_placeholders_and_error() {
        let dto = PrayerTimesMapper::to_dto(&Err(ResolveError::NoDataForDate(date(2024, 2, 1))));

        assert!(dto.has_times());
        assert_eq!(dto.maghrib.as_deref(), Some("--:--"));
        assert_eq!(dto.error.as_deref(), Some("no prayer times available for 2024-02-01"));
        assert_eq!(dto.note, None);
    }

    #[test]
    fn test_unavailable_has_error_only() {
        let dto = PrayerTimesMapper::to_dto(&Err(ResolveError::Unavailable));

        assert!(!dto.has_times());
        assert_eq!(dto.fajr, None);
        assert_eq!(dto.error.as_deref(), Some("prayer times unavailable — source not loaded"));
    }

    #[test]
    fn test_status_and_reload_mapping() {
        let status = PrayerTimesMapper::status_to_dto(ScheduleStatus {
            day_count: 2,
            first_date: Some(date(2024, 6, 1)),
            last_date: Some(date(2024, 6, 2)),
            source_path: Some(PathBuf::from("static/gb.txt")),
        });
        assert!(status.loaded);
        assert_eq!(status.first_date.as_deref(), Some("2024-06-01"));
        assert_eq!(status.last_date.as_deref(), Some("2024-06-02"));

        let reload = PrayerTimesMapper::reload_to_dto(ReloadOutcome {
            day_count: 1,
            skipped: vec![LineError::TooFewTokens { line: 3, found: 5 }],
            source_path: PathBuf::from("gb.txt"),
        });
        assert!(reload.success);
        assert_eq!(reload.skipped_lines.len(), 1);
        assert_eq!(reload.skipped_lines[0].line_number, 3);
    }
}
