pub mod day_times;

pub use day_times::DayTimes;
