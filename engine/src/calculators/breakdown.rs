//! Duration Breakdown
//!
//! Splits a millisecond duration into years/months/days/hours/minutes/seconds
//! using fixed average month and year lengths. Not calendar-accurate.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const SECOND_MS: i64 = 1000;
pub const MINUTE_MS: i64 = 60 * SECOND_MS;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
pub const DAY_MS: i64 = 24 * HOUR_MS;
/// 30.44 days
pub const MONTH_MS: i64 = 3044 * DAY_MS / 100;
/// 365.25 days
pub const YEAR_MS: i64 = 36525 * DAY_MS / 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DurationBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl DurationBreakdown {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Milliseconds represented by the six fields, using the same unit lengths
    pub fn total_ms(&self) -> i64 {
        self.years as i64 * YEAR_MS
            + self.months as i64 * MONTH_MS
            + self.days as i64 * DAY_MS
            + self.hours as i64 * HOUR_MS
            + self.minutes as i64 * MINUTE_MS
            + self.seconds as i64 * SECOND_MS
    }
}

/// `YY:MM:DD:hh:mm:ss`, each field padded to at least two digits
impl fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}:{:02}:{:02}",
            self.years, self.months, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Break a duration down, cascading floor-and-remainder from years to seconds.
/// Zero or negative durations yield an all-zero breakdown.
pub fn breakdown(duration_ms: i64) -> DurationBreakdown {
    if duration_ms <= 0 {
        return DurationBreakdown::default();
    }

    let mut rest = duration_ms;
    let mut take = |unit: i64| {
        let count = rest / unit;
        rest %= unit;
        count as u32
    };

    DurationBreakdown {
        years: take(YEAR_MS),
        months: take(MONTH_MS),
        days: take(DAY_MS),
        hours: take(HOUR_MS),
        minutes: take(MINUTE_MS),
        seconds: take(SECOND_MS),
    }
}

/// Whole years in a duration, rounding toward negative infinity
pub fn whole_years(duration_ms: i64) -> i64 {
    duration_ms.div_euclid(YEAR_MS)
}
