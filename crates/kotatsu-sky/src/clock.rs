use chrono::Timelike;
use kotatsu_core::constants::{BUCKET_MINUTES, HOURS_PER_DAY};

/// Wall-clock time of day at minute precision. Seconds are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Returns None unless `hour < 24` and `minute < 60`.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self {
                hour: hour as u8,
                minute: minute as u8,
            })
        } else {
            None
        }
    }

    /// Wrap fractional hours into a day and truncate to the minute.
    /// Non-finite input maps to midnight.
    pub fn from_hours(hours: f64) -> Self {
        if !hours.is_finite() {
            return Self::MIDNIGHT;
        }
        let minutes_per_day = (HOURS_PER_DAY * 60.0) as u32;
        let total_minutes =
            (hours.rem_euclid(HOURS_PER_DAY) * 60.0).floor() as u32 % minutes_per_day;
        Self {
            hour: (total_minutes / 60) as u8,
            minute: (total_minutes % 60) as u8,
        }
    }

    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    /// Host local time.
    pub fn now_local() -> Self {
        Self::from_timelike(&chrono::Local::now())
    }

    pub fn hour(self) -> u32 {
        self.hour as u32
    }

    pub fn minute(self) -> u32 {
        self.minute as u32
    }

    /// `hour + minute / 60`.
    pub fn as_hours(self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }

    pub fn bucket(self) -> TimeBucket {
        TimeBucket {
            hour: self.hour,
            minute: (self.minute as u32 / BUCKET_MINUTES * BUCKET_MINUTES) as u8,
        }
    }
}

/// A 15-minute slot of the day. Two times share a bucket iff they share
/// the hour and `floor(minute / 15)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeBucket {
    hour: u8,
    minute: u8,
}

impl TimeBucket {
    pub fn hour(self) -> u32 {
        self.hour as u32
    }

    /// Start minute of the slot: 0, 15, 30 or 45.
    pub fn minute(self) -> u32 {
        self.minute as u32
    }

    pub fn start(self) -> TimeOfDay {
        TimeOfDay {
            hour: self.hour,
            minute: self.minute,
        }
    }
}

impl std::fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_new_bounds() {
        assert!(TimeOfDay::new(23, 59).is_some());
        assert!(TimeOfDay::new(24, 0).is_none());
        assert!(TimeOfDay::new(12, 60).is_none());
    }

    #[test]
    fn test_as_hours() {
        let t = TimeOfDay::new(3, 30).expect("valid");
        assert_eq!(t.as_hours(), 3.5);
    }

    #[test]
    fn test_from_hours_wraps() {
        assert_eq!(TimeOfDay::from_hours(27.25), TimeOfDay::new(3, 15).expect("valid"));
        assert_eq!(TimeOfDay::from_hours(-0.5), TimeOfDay::new(23, 30).expect("valid"));
        assert_eq!(TimeOfDay::from_hours(f64::NAN), TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn test_from_timelike_drops_seconds() {
        let naive = NaiveTime::from_hms_opt(18, 44, 59).expect("valid");
        let t = TimeOfDay::from_timelike(&naive);
        assert_eq!((t.hour(), t.minute()), (18, 44));
    }

    #[test]
    fn test_bucket_floor_to_quarter() {
        let cases = [(0, 0), (14, 0), (15, 15), (29, 15), (30, 30), (44, 30), (45, 45), (59, 45)];
        for (minute, start) in cases {
            let t = TimeOfDay::new(9, minute).expect("valid");
            assert_eq!(t.bucket().minute(), start, "minute {minute}");
            assert_eq!(t.bucket().hour(), 9);
        }
    }

    #[test]
    fn test_bucket_includes_hour() {
        let a = TimeOfDay::new(9, 10).expect("valid").bucket();
        let b = TimeOfDay::new(10, 10).expect("valid").bucket();
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "09:00");
        assert_eq!(b.start(), TimeOfDay::new(10, 0).expect("valid"));
    }
}
