use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::NaiveDate;
use tracing::{error, info};

use super::resolver::{self, ResolveError, ResolvedTimes};
use super::schedule::{LineError, Schedule};
use crate::storage::{ScheduleError, ScheduleFile, ScheduleLoad};

/// A schedule snapshot and where it was read from
#[derive(Debug, Clone, Default)]
struct LoadedSchedule {
    schedule: Arc<Schedule>,
    source_path: Option<PathBuf>,
}

/// Summary of the schedule currently in use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleStatus {
    pub day_count: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub source_path: Option<PathBuf>,
}

impl ScheduleStatus {
    pub fn is_loaded(&self) -> bool {
        self.day_count > 0
    }
}

/// Result of a successful reload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadOutcome {
    pub day_count: usize,
    pub skipped: Vec<LineError>,
    pub source_path: PathBuf,
}

/// Service that owns the prayer time schedule and answers lookups.
///
/// Schedules are never modified. A reload builds a new one and swaps the
/// shared handle, so lookups already holding the previous snapshot finish
/// against it undisturbed.
#[derive(Clone)]
pub struct PrayerTimeService {
    source: ScheduleFile,
    current: Arc<RwLock<LoadedSchedule>>,
}

impl PrayerTimeService {
    /// Load the schedule from `source`. A missing source leaves the service
    /// with an empty schedule, so every lookup reports it as unavailable.
    pub async fn initialize(source: ScheduleFile) -> Self {
        let load = source.load().await;
        if load.failure.is_some() {
            error!("Starting without prayer times; lookups will report them as unavailable");
        }
        Self::from_load(source, load)
    }

    /// Wrap an already built schedule
    pub fn from_schedule(source: ScheduleFile, schedule: Schedule) -> Self {
        Self::from_load(
            source,
            ScheduleLoad {
                schedule,
                ..Default::default()
            },
        )
    }

    fn from_load(source: ScheduleFile, load: ScheduleLoad) -> Self {
        let loaded = LoadedSchedule {
            schedule: Arc::new(load.schedule),
            source_path: load.source_path,
        };
        Self {
            source,
            current: Arc::new(RwLock::new(loaded)),
        }
    }

    fn snapshot(&self) -> LoadedSchedule {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The schedule currently in use
    pub fn schedule(&self) -> Arc<Schedule> {
        self.snapshot().schedule
    }

    /// File the current schedule was read from
    pub fn source_path(&self) -> Option<PathBuf> {
        self.snapshot().source_path
    }

    /// Look up prayer times for a date
    pub fn resolve(&self, date: NaiveDate) -> Result<ResolvedTimes, ResolveError> {
        let schedule = self.schedule();
        let result = resolver::resolve(&schedule, date);
        match &result {
            Ok(resolved) if resolved.substituted_from.is_some() => {
                info!("No prayer times for {}, using {:?}", date, resolved.substituted_from)
            }
            Ok(_) => {}
            Err(e) => info!("Prayer time lookup for {} failed: {}", date, e),
        }
        result
    }

    /// Re-read the schedule source and swap in the result.
    ///
    /// When the source cannot be read the current schedule stays in place.
    pub async fn reload(&self) -> Result<ReloadOutcome, ScheduleError> {
        info!("Reloading prayer times from {} candidate path(s)", self.source.candidates().len());
        let load = self.source.load().await;

        if let Some(failure) = load.failure {
            error!("Reload failed, keeping the current schedule: {}", failure);
            return Err(failure);
        }

        let source_path = load.source_path.unwrap_or_default();
        let outcome = ReloadOutcome {
            day_count: load.schedule.len(),
            skipped: load.skipped,
            source_path: source_path.clone(),
        };

        let replacement = LoadedSchedule {
            schedule: Arc::new(load.schedule),
            source_path: Some(source_path),
        };
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = replacement;

        info!("Reloaded prayer times for {} days", outcome.day_count);
        Ok(outcome)
    }

    pub fn status(&self) -> ScheduleStatus {
        let loaded = self.snapshot();
        ScheduleStatus {
            day_count: loaded.schedule.len(),
            first_date: loaded.schedule.first_date(),
            last_date: loaded.schedule.last_date(),
            source_path: loaded.source_path,
        }
    }
}
