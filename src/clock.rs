use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Formatted fields of the clock page for one instant
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClockFace {
    pub hour: String,
    pub minute: String,
    pub weekday: String,
    pub day_month: String,
}

impl ClockFace {
    /// Hour is on a 12-hour dial without an AM/PM marker, so 01:00 and 13:00
    /// both read "01".
    pub fn at<Tz>(now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            hour: now.format("%I").to_string(),
            minute: now.format("%M").to_string(),
            weekday: now.format("%a").to_string(),
            day_month: now.format("%-d %b").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn afternoon_reads_on_twelve_hour_dial() {
        let face = ClockFace::at(&utc(2024, 3, 5, 13, 5));
        assert_eq!(face.hour, "01");
        assert_eq!(face.minute, "05");
    }

    #[test]
    fn one_am_and_one_pm_are_indistinguishable() {
        let am = ClockFace::at(&utc(2024, 3, 5, 1, 0));
        let pm = ClockFace::at(&utc(2024, 3, 5, 13, 0));
        assert_eq!(am.hour, pm.hour);
    }

    #[test]
    fn midnight_and_noon_read_twelve() {
        assert_eq!(ClockFace::at(&utc(2024, 3, 5, 0, 30)).hour, "12");
        assert_eq!(ClockFace::at(&utc(2024, 3, 5, 12, 30)).hour, "12");
    }

    #[test]
    fn weekday_and_date() {
        // 2024-03-05 was a Tuesday
        let face = ClockFace::at(&utc(2024, 3, 5, 9, 41));
        assert_eq!(face.weekday, "Tue");
        assert_eq!(face.day_month, "5 Mar");

        let face = ClockFace::at(&utc(2024, 12, 25, 9, 41));
        assert_eq!(face.weekday, "Wed");
        assert_eq!(face.day_month, "25 Dec");
    }

    #[test]
    fn uses_the_instant_local_offset() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = utc(2024, 3, 5, 23, 15).with_timezone(&tz);
        let face = ClockFace::at(&now);
        assert_eq!(face.hour, "08");
        assert_eq!(face.weekday, "Wed");
        assert_eq!(face.day_month, "6 Mar");
    }
}
