pub mod prayer_times_mapper;

pub use prayer_times_mapper::PrayerTimesMapper;
