use shared::PLACEHOLDER_TIME;

/// The six prayer times of a single calendar date.
///
/// Values are kept exactly as they appear in the schedule source; they are
/// expected to look like `HH:MM` but are never parsed as times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTimes {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl DayTimes {
    /// Field names in source column order
    pub const FIELD_NAMES: [&'static str; 6] = ["fajr", "sunrise", "dhuhr", "asr", "maghrib", "isha"];

    /// Build from the six time columns of a source line, assigned positionally.
    /// Returns None when fewer than six tokens are given; extra tokens are ignored.
    pub fn from_columns(columns: &[&str]) -> Option<Self> {
        match columns {
            [fajr, sunrise, dhuhr, asr, maghrib, isha, ..] => Some(Self {
                fajr: (*fajr).to_string(),
                sunrise: (*sunrise).to_string(),
                dhuhr: (*dhuhr).to_string(),
                asr: (*asr).to_string(),
                maghrib: (*maghrib).to_string(),
                isha: (*isha).to_string(),
            }),
            _ => None,
        }
    }

    /// Display-safe stand-in used when no data exists for a date
    pub fn placeholder() -> Self {
        let dash = || PLACEHOLDER_TIME.to_string();
        Self {
            fajr: dash(),
            sunrise: dash(),
            dhuhr: dash(),
            asr: dash(),
            maghrib: dash(),
            isha: dash(),
        }
    }

    /// (name, value) pairs in source column order
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("fajr", self.fajr.as_str()),
            ("sunrise", self.sunrise.as_str()),
            ("dhuhr", self.dhuhr.as_str()),
            ("asr", self.asr.as_str()),
            ("maghrib", self.maghrib.as_str()),
            ("isha", self.isha.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns_assigns_positionally() {
        let times = DayTimes::from_columns(&["05:30", "06:00", "13:00", "17:00", "20:30", "22:00"]).unwrap();
        assert_eq!(times.fajr, "05:30");
        assert_eq!(times.sunrise, "06:00");
        assert_eq!(times.dhuhr, "13:00");
        assert_eq!(times.asr, "17:00");
        assert_eq!(times.maghrib, "20:30");
        assert_eq!(times.isha, "22:00");
    }

    #[test]
    fn test_from_columns_ignores_extra_and_rejects_short() {
        let times = DayTimes::from_columns(&["a", "b", "c", "d", "e", "f", "extra"]).unwrap();
        assert_eq!(times.isha, "f");
        assert!(DayTimes::from_columns(&["a", "b", "c", "d", "e"]).is_none());
    }

    #[test]
    fn test_placeholder_fills_every_field() {
        let placeholder = DayTimes::placeholder();
        for (name, value) in placeholder.entries() {
            assert_eq!(value, "--:--", "field {} should be a placeholder", name);
        }
        let names: Vec<&str> = placeholder.entries().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, DayTimes::FIELD_NAMES);
    }
}
