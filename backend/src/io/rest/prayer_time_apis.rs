//! # REST API for Prayer Times
//!
//! Two lookup endpoints share the same resolver but treat bad dates
//! differently:
//! - `GET /api/prayer-times` answers a malformed `date` with 400
//! - `GET /api/prayer-times/daily` falls back to today and always answers

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use shared::{DailyPrayerTimesResponse, ErrorResponse};
use tracing::{error, info, warn};

use super::mappers::PrayerTimesMapper;
use crate::domain::schedule::DATE_FORMAT;
use crate::domain::{parse_date, DateRequest};
use crate::AppState;

/// Query parameters for the raw lookup API
#[derive(Debug, Deserialize)]
pub struct PrayerTimesQuery {
    pub date: Option<String>,
}

/// Query parameters for the page-style lookup. Kept as strings so that
/// garbage input still reaches the fallback instead of failing extraction.
#[derive(Debug, Deserialize, Default)]
pub struct DailyPrayerTimesQuery {
    pub date: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
}

impl From<DailyPrayerTimesQuery> for DateRequest {
    fn from(query: DailyPrayerTimesQuery) -> Self {
        DateRequest {
            date: query.date,
            year: query.year,
            month: query.month,
            day: query.day,
        }
    }
}

/// Get prayer times for `?date=YYYY-MM-DD`, or today when no date is given
pub async fn get_prayer_times(
    State(state): State<AppState>,
    query: Result<Query<PrayerTimesQuery>, QueryRejection>,
) -> impl IntoResponse {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!("Rejecting prayer time request: {}", rejection.body_text());
            let body = ErrorResponse {
                error: rejection.body_text(),
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };
    info!("GET /api/prayer-times - query: {:?}", query);

    let requested = query.date.as_deref().map(str::trim).filter(|d| !d.is_empty());
    let date = match requested {
        None => state.calendar_service.today(),
        Some(raw) => match parse_date(raw) {
            Ok(date) => date,
            Err(e) => {
                warn!("Rejecting prayer time request: {}", e);
                let body = ErrorResponse { error: e.to_string() };
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
        },
    };

    let result = state.prayer_time_service.resolve(date);
    (StatusCode::OK, Json(PrayerTimesMapper::to_dto(&result))).into_response()
}

/// Get prayer times for a date given as `?date=` or `?year=&month=&day=`.
/// Anything unusable means today.
pub async fn get_daily_prayer_times(
    State(state): State<AppState>,
    query: Result<Query<DailyPrayerTimesQuery>, QueryRejection>,
) -> impl IntoResponse {
    let request = match query {
        Ok(Query(query)) => {
            info!("GET /api/prayer-times/daily - query: {:?}", query);
            DateRequest::from(query)
        }
        Err(rejection) => {
            info!("GET /api/prayer-times/daily - unreadable query: {}", rejection.body_text());
            DateRequest::default()
        }
    };

    let date = request.coerce(state.calendar_service.today());
    let result = state.prayer_time_service.resolve(date);

    let response = DailyPrayerTimesResponse {
        date: date.format(DATE_FORMAT).to_string(),
        prayer_times: PrayerTimesMapper::to_dto(&result),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Describe the schedule currently in use
pub async fn get_schedule_status(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/prayer-times/status");

    let status = state.prayer_time_service.status();
    (StatusCode::OK, Json(PrayerTimesMapper::status_to_dto(status))).into_response()
}

/// Re-read the schedule file
pub async fn reload_schedule(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/prayer-times/reload");

    match state.prayer_time_service.reload().await {
        Ok(outcome) => (StatusCode::OK, Json(PrayerTimesMapper::reload_to_dto(outcome))).into_response(),
        Err(e) => {
            let current_day_count = state.prayer_time_service.schedule().len();
            let body = PrayerTimesMapper::reload_failure_to_dto(&e, current_day_count);
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}

/// Download the schedule file the current data came from
pub async fn get_schedule_source(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/prayer-times/source");

    let Some(path) = state.prayer_time_service.source_path() else {
        let body = ErrorResponse {
            error: "no schedule file loaded".to_string(),
        };
        return (StatusCode::NOT_FOUND, Json(body)).into_response();
    };

    match tokio::fs::read_to_string(&path).await {
        Ok(text) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            text,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to read schedule file {}: {}", path.display(), e);
            let body = ErrorResponse {
                error: format!("schedule file {} is not readable", path.display()),
            };
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
    }
}
