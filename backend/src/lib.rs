//! # Prayer Times Backend
//!
//! HTTP service that answers "what are the prayer times on this date?" from a
//! flat schedule file.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST handlers, DTO mappers)
//!     ↓
//! Domain Layer (schedule, resolver, date handling, services)
//!     ↓
//! Storage Layer (schedule text file)
//! ```
//!
//! The schedule is loaded once in [`initialize_backend`] and handed to every
//! handler through [`AppState`]; nothing is kept in globals.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{CalendarService, PrayerTimeService};
use crate::storage::ScheduleFile;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub prayer_time_service: PrayerTimeService,
    pub calendar_service: CalendarService,
}

impl AppState {
    pub fn new(prayer_time_service: PrayerTimeService, calendar_service: CalendarService) -> Self {
        Self {
            prayer_time_service,
            calendar_service,
        }
    }
}

/// Initialize the backend with all required services.
///
/// A missing schedule file is not an error here; the service starts empty
/// and reports prayer times as unavailable.
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up prayer time schedule");
    let source = ScheduleFile::new(config.schedule_candidates());
    let prayer_time_service = PrayerTimeService::initialize(source).await;

    info!("Setting up calendar");
    let calendar_service = CalendarService::with_clock(config.clock()?);

    Ok(AppState::new(prayer_time_service, calendar_service))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Result<Router> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid CORS origin '{}'", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/prayer-times", get(io::get_prayer_times))
        .route("/prayer-times/daily", get(io::get_daily_prayer_times))
        .route("/prayer-times/status", get(io::get_schedule_status))
        .route("/prayer-times/reload", post(io::reload_schedule))
        .route("/prayer-times/source", get(io::get_schedule_source))
        .nest("/calendar", io::rest::calendar_apis::router());

    Ok(Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .with_state(app_state))
}
