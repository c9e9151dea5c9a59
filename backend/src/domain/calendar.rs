//! Calendar domain logic: what "today" means for the server.

use chrono::{Datelike, FixedOffset, Local, NaiveDate, Utc};
use shared::CurrentDateResponse;

/// Source of the current date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// Server-local time zone
    Local,
    /// A fixed offset from UTC
    Offset(FixedOffset),
    /// Always the same date
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::Local => Local::now().date_naive(),
            Clock::Offset(offset) => Utc::now().with_timezone(offset).date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Calendar service that answers date questions for the API
#[derive(Debug, Clone)]
pub struct CalendarService {
    clock: Clock,
}

impl CalendarService {
    /// Create a CalendarService using the server-local clock
    pub fn new() -> Self {
        Self::with_clock(Clock::Local)
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Get current date information
    pub fn get_current_date(&self) -> CurrentDateResponse {
        let today = self.today();
        let month = today.month();
        let year = today.year() as u32;
        let day = today.day();

        let formatted_date = format!("{} {}, {}", self.month_name(month), day, year);
        let iso_date = today.format("%Y-%m-%d").to_string();

        CurrentDateResponse {
            month,
            year,
            day,
            formatted_date,
            iso_date,
        }
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}
