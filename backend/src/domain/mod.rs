//! # Domain Module
//!
//! Business logic of the prayer time service, independent of HTTP.
//!
//! ## Module Organization
//!
//! - **models**: `DayTimes`, the six prayer times of one date
//! - **schedule**: the date → times table and its text source format
//! - **resolver**: lookup with the fixed ±7 day fallback scan
//! - **date_input**: interpreting caller-supplied dates
//! - **calendar**: the server's notion of today
//! - **prayer_time_service**: owns the current schedule, reload and status

pub mod calendar;
pub mod date_input;
pub mod models;
pub mod prayer_time_service;
pub mod resolver;
pub mod schedule;

pub use calendar::*;
pub use date_input::*;
pub use prayer_time_service::*;
pub use resolver::{resolve, ResolveError, ResolvedTimes};
pub use schedule::{LineError, ParsedSchedule, Schedule};
