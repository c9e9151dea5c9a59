//! Date parameters supplied by callers.
//!
//! A date arrives either as one `YYYY-MM-DD` string or as separate
//! year/month/day components. [`DateRequest::parse`] is strict and reports what
//! went wrong; [`DateRequest::coerce`] falls back to today instead.

use chrono::NaiveDate;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateInputError {
    #[error("expected a date as YYYY-MM-DD, got '{0}'")]
    Format(String),
    #[error("invalid {component} '{value}'")]
    InvalidNumber { component: &'static str, value: String },
    #[error("missing {0}")]
    MissingComponent(&'static str),
    #[error("{year}-{month}-{day} is not a calendar date")]
    OutOfRange { year: i32, month: u32, day: u32 },
}

/// Years a caller may ask for
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Parse `Y-M-D` with integer components. Zero padding is optional and
/// anything after the third `-` separated part is ignored.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateInputError> {
    let parts: Vec<&str> = input.trim().split('-').collect();
    let [year, month, day, ..] = parts.as_slice() else {
        return Err(DateInputError::Format(input.to_string()));
    };

    date_from_parts(year, month, day)
}

/// Build a date from separately supplied components
pub fn date_from_parts(year: &str, month: &str, day: &str) -> Result<NaiveDate, DateInputError> {
    let year: i32 = parse_component("year", year)?;
    let month: u32 = parse_component("month", month)?;
    let day: u32 = parse_component("day", day)?;

    NaiveDate::from_ymd_opt(year, month, day)
        .filter(|_| YEAR_RANGE.contains(&year))
        .ok_or(DateInputError::OutOfRange { year, month, day })
}

fn parse_component<T: std::str::FromStr>(component: &'static str, value: &str) -> Result<T, DateInputError> {
    value.trim().parse().map_err(|_| DateInputError::InvalidNumber {
        component,
        value: value.to_string(),
    })
}

/// Date as requested by a caller, before interpretation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRequest {
    pub date: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
}

impl DateRequest {
    pub fn from_date_string(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            ..Default::default()
        }
    }

    pub fn from_components(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            date: None,
            year: Some(year.into()),
            month: Some(month.into()),
            day: Some(day.into()),
        }
    }

    /// Strict interpretation. `Ok(None)` when no date was supplied at all.
    ///
    /// A non-empty `date` string takes precedence over the components.
    pub fn parse(&self) -> Result<Option<NaiveDate>, DateInputError> {
        if let Some(date) = non_empty(&self.date) {
            return parse_date(date).map(Some);
        }

        let components = [non_empty(&self.year), non_empty(&self.month), non_empty(&self.day)];
        match components {
            [None, None, None] => Ok(None),
            [Some(year), Some(month), Some(day)] => date_from_parts(year, month, day).map(Some),
            [None, _, _] => Err(DateInputError::MissingComponent("year")),
            [_, None, _] => Err(DateInputError::MissingComponent("month")),
            [_, _, None] => Err(DateInputError::MissingComponent("day")),
        }
    }

    /// The requested date, or `today` when nothing usable was supplied
    pub fn coerce(&self, today: NaiveDate) -> NaiveDate {
        match self.parse() {
            Ok(Some(date)) => date,
            Ok(None) => today,
            Err(e) => {
                debug!("Falling back to {} for date request {:?}: {}", today, self, e);
                today
            }
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
