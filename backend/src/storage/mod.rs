//! # Storage Module
//!
//! Persistence for the prayer time service. The only backing store is the
//! flat schedule text file, read once at startup and again on explicit reload.

pub mod schedule_file;

pub use schedule_file::{ScheduleError, ScheduleFile, ScheduleLoad};
