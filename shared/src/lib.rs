use serde::{Deserialize, Serialize};

/// Placeholder rendered in every time field when no data exists for a date
pub const PLACEHOLDER_TIME: &str = "--:--";

/// Prayer times for one date as returned by the API.
///
/// Three shapes travel through this one record:
/// - a lookup hit: all six times, plus `note` when a neighbouring date was substituted
/// - no data near the date: all six times set to [`PLACEHOLDER_TIME`] plus `error`
/// - schedule never loaded: only `error`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PrayerTimesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fajr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dhuhr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maghrib: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isha: Option<String>,
    /// Set when the times were borrowed from a nearby date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PrayerTimesResponse {
    /// True when all six time fields are present
    pub fn has_times(&self) -> bool {
        [
            &self.fajr,
            &self.sunrise,
            &self.dhuhr,
            &self.asr,
            &self.maghrib,
            &self.isha,
        ]
        .iter()
        .all(|field| field.is_some())
    }
}

/// Prayer times for the date a page-style lookup settled on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPrayerTimesResponse {
    /// The date actually looked up (YYYY-MM-DD), after falling back to today if needed
    pub date: String,
    pub prayer_times: PrayerTimesResponse,
}

/// Information about the currently loaded schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStatusResponse {
    pub loaded: bool,
    pub day_count: usize,
    pub first_date: Option<String>, // YYYY-MM-DD
    pub last_date: Option<String>,  // YYYY-MM-DD
    pub source_path: Option<String>,
}

/// Result of re-reading the schedule source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReloadScheduleResponse {
    pub success: bool,
    pub message: String,
    pub day_count: usize,
    pub skipped_lines: Vec<SkippedLine>,
}

/// A source line that was ignored while loading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedLine {
    pub line_number: usize,
    pub reason: String,
}

/// Current date information from the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentDateResponse {
    pub month: u32,
    pub year: u32,
    pub day: u32,
    pub formatted_date: String, // e.g., "June 19, 2025"
    pub iso_date: String,       // e.g., "2025-06-19"
}

/// Body of a client error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
