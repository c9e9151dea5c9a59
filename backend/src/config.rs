//! Application configuration, read from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::FixedOffset;

use crate::domain::Clock;

pub const ENV_SCHEDULE_FILE: &str = "PRAYER_TIMES_FILE";
pub const ENV_STATIC_DIR: &str = "PRAYER_TIMES_STATIC_DIR";
pub const ENV_BIND: &str = "PRAYER_TIMES_BIND";
pub const ENV_CORS_ORIGIN: &str = "PRAYER_TIMES_CORS_ORIGIN";
pub const ENV_UTC_OFFSET_HOURS: &str = "PRAYER_TIMES_UTC_OFFSET_HOURS";

/// Name of the schedule file inside the static directory
pub const SCHEDULE_FILE_NAME: &str = "gb.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Explicit schedule path, tried before the defaults
    pub schedule_file: Option<PathBuf>,
    pub static_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub cors_origin: String,
    /// Fixed UTC offset for "today"; server-local time when unset
    pub utc_offset_hours: Option<i32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            schedule_file: None,
            static_dir: PathBuf::from("static"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cors_origin: "http://localhost:8080".to_string(),
            utc_offset_hours: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(path) = get(ENV_SCHEDULE_FILE) {
            config.schedule_file = Some(PathBuf::from(path));
        }
        if let Some(dir) = get(ENV_STATIC_DIR) {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(bind) = get(ENV_BIND) {
            config.bind_addr = bind
                .parse()
                .with_context(|| format!("{} must be a socket address, got '{}'", ENV_BIND, bind))?;
        }
        if let Some(origin) = get(ENV_CORS_ORIGIN) {
            config.cors_origin = origin;
        }
        if let Some(hours) = get(ENV_UTC_OFFSET_HOURS) {
            let hours: i32 = hours
                .parse()
                .with_context(|| format!("{} must be a whole number of hours, got '{}'", ENV_UTC_OFFSET_HOURS, hours))?;
            config.utc_offset_hours = Some(hours);
        }

        config.clock()?;
        Ok(config)
    }

    /// Where to look for the schedule file, in order
    pub fn schedule_candidates(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(path) = &self.schedule_file {
            candidates.push(path.clone());
        }
        candidates.push(self.static_dir.join(SCHEDULE_FILE_NAME));
        if let Some(exe_dir) = std::env::current_exe().ok().and_then(|exe| exe.parent().map(PathBuf::from)) {
            candidates.push(exe_dir.join("static").join(SCHEDULE_FILE_NAME));
        }
        candidates.push(PathBuf::from(SCHEDULE_FILE_NAME));
        candidates
    }

    pub fn clock(&self) -> Result<Clock> {
        match self.utc_offset_hours {
            None => Ok(Clock::Local),
            Some(hours) => hours
                .checked_mul(3600)
                .and_then(FixedOffset::east_opt)
                .map(Clock::Offset)
                .with_context(|| format!("UTC offset of {} hours is out of range", hours)),
        }
    }
}
