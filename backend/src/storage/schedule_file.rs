//! # Schedule File Storage
//!
//! Locates and reads the prayer time schedule text file. Several candidate
//! paths may be configured; the first one that exists is used. A missing or
//! unreadable file never aborts startup: the caller receives an empty
//! schedule together with the failure to log.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::domain::schedule::{LineError, Schedule};

/// The schedule source could not be read
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("schedule file not found (searched: {})", display_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },
    #[error("failed to read schedule file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no candidate paths configured".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of loading a schedule file
#[derive(Debug, Default)]
pub struct ScheduleLoad {
    pub schedule: Schedule,
    pub skipped: Vec<LineError>,
    /// The file the schedule was read from
    pub source_path: Option<PathBuf>,
    /// Set when no file could be read; `schedule` is then empty
    pub failure: Option<ScheduleError>,
}

/// Ordered list of places the schedule file may live
#[derive(Debug, Clone)]
pub struct ScheduleFile {
    candidates: Vec<PathBuf>,
}

impl ScheduleFile {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// A single known location
    pub fn at<P: AsRef<Path>>(path: P) -> Self {
        Self::new(vec![path.as_ref().to_path_buf()])
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// First candidate that exists as a file
    pub async fn locate(&self) -> Option<PathBuf> {
        for path in &self.candidates {
            match tokio::fs::metadata(path).await {
                Ok(metadata) if metadata.is_file() => return Some(path.clone()),
                _ => {}
            }
        }
        None
    }

    /// Read the raw text of the located file
    pub async fn read_to_string(&self) -> Result<(PathBuf, String), ScheduleError> {
        let path = self.locate().await.ok_or_else(|| ScheduleError::NotFound {
            searched: self.candidates.clone(),
        })?;

        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ScheduleError::Unreadable {
                path: path.clone(),
                source,
            })?;

        Ok((path, text))
    }

    /// Locate, read and parse the schedule
    pub async fn load(&self) -> ScheduleLoad {
        match self.read_to_string().await {
            Ok((path, text)) => {
                info!("Loading prayer times from {}", path.display());
                let parsed = Schedule::parse(&text);
                ScheduleLoad {
                    schedule: parsed.schedule,
                    skipped: parsed.skipped,
                    source_path: Some(path),
                    failure: None,
                }
            }
            Err(e) => {
                error!("Prayer times unavailable: {}", e);
                ScheduleLoad {
                    failure: Some(e),
                    ..Default::default()
                }
            }
        }
    }
}
