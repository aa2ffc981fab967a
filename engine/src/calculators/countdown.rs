//! Countdown Calculator
//!
//! Time left until the profile's target age, plus the derived counters.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::breakdown::{breakdown, whole_years, DurationBreakdown, DAY_MS};
use crate::model::{ms_since, Profile};

/// Meals counted per remaining day
const MEALS_PER_DAY: u64 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Countdown {
    pub target_date: NaiveDate,
    pub remaining_ms: i64,
    pub breakdown: DurationBreakdown,
    /// Life progress in [0, 100]
    pub progress_percent: f64,
    /// Present only when the profile shows the sleep count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_remaining: Option<u64>,
    /// Present only when the profile shows the meal count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_remaining: Option<u64>,
}

impl Countdown {
    pub fn is_finished(&self) -> bool {
        self.remaining_ms <= 0
    }

    /// Progress rounded to the nearest whole percent
    pub fn progress_rounded(&self) -> u32 {
        self.progress_percent.round() as u32
    }
}

/// Compute the countdown for `profile` as seen at `now`
pub fn compute_countdown(now: DateTime<Utc>, profile: &Profile) -> Countdown {
    let target_date = profile.target_date();
    let remaining_ms = profile.remaining_ms(now);

    if remaining_ms <= 0 {
        return Countdown {
            target_date,
            remaining_ms,
            breakdown: DurationBreakdown::default(),
            progress_percent: 100.0,
            sleep_remaining: profile.show_sleep_count.then_some(0),
            meal_remaining: profile.show_meal_count.then_some(0),
        };
    }

    let remaining_days = u64::try_from(remaining_ms)
        .unwrap_or(0)
        .div_ceil(DAY_MS as u64);

    Countdown {
        target_date,
        remaining_ms,
        breakdown: breakdown(remaining_ms),
        progress_percent: progress_percent(now, profile),
        sleep_remaining: profile.show_sleep_count.then_some(remaining_days),
        meal_remaining: profile
            .show_meal_count
            .then_some(remaining_days * MEALS_PER_DAY),
    }
}

/// Completed whole years of life as a share of the target age
fn progress_percent(now: DateTime<Utc>, profile: &Profile) -> f64 {
    if profile.target_age == 0 {
        return 100.0;
    }
    let user_age = whole_years(ms_since(profile.birth_date, now));
    (user_age as f64 / profile.target_age as f64 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{start_of_day, Gender};
    use chrono::{Duration, TimeZone};

    fn profile(birth: NaiveDate, target_age: u32) -> Profile {
        Profile {
            birth_date: birth,
            gender: Gender::Male,
            target_age,
            show_sleep_count: true,
            show_meal_count: true,
            family: Vec::new(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_target_reached() {
        let p = profile(date(2000, 1, 1), 81);
        let c = compute_countdown(start_of_day(date(2081, 1, 1)), &p);
        assert!(c.is_finished());
        assert!(c.breakdown.is_zero());
        assert_eq!(c.progress_percent, 100.0);
        assert_eq!(c.sleep_remaining, Some(0));
        assert_eq!(c.meal_remaining, Some(0));
    }

    #[test]
    fn test_disabled_counters_are_omitted() {
        let mut p = profile(date(2000, 1, 1), 81);
        p.show_sleep_count = false;
        p.show_meal_count = false;

        let live = compute_countdown(start_of_day(date(2020, 1, 1)), &p);
        assert_eq!(live.sleep_remaining, None);
        assert_eq!(live.meal_remaining, None);

        let done = compute_countdown(start_of_day(date(2090, 1, 1)), &p);
        assert_eq!(done.sleep_remaining, None);

        let json = serde_json::to_value(&live).unwrap();
        assert!(json.get("sleepRemaining").is_none());
        assert!(json.get("mealRemaining").is_none());
    }

    #[test]
    fn test_last_day_counts() {
        let p = profile(date(2000, 1, 1), 81);

        // Exactly one day left
        let c = compute_countdown(start_of_day(date(2080, 12, 31)), &p);
        assert_eq!(c.sleep_remaining, Some(1));
        assert_eq!(c.meal_remaining, Some(3));
        assert_eq!(c.breakdown.days, 1);

        // Half a day left still counts as one whole day
        let noon = Utc.with_ymd_and_hms(2080, 12, 31, 12, 0, 0).unwrap();
        let c = compute_countdown(noon, &p);
        assert_eq!(c.sleep_remaining, Some(1));
        assert_eq!(c.meal_remaining, Some(3));
        assert_eq!(c.breakdown.hours, 12);
    }

    #[test]
    fn test_day_after_birth() {
        let p = profile(date(2000, 1, 1), 81);
        let now = start_of_day(date(2000, 1, 2));
        let c = compute_countdown(now, &p);

        let days = (start_of_day(date(2081, 1, 1)) - now).num_days() as u64;
        assert_eq!(c.sleep_remaining, Some(days));
        assert_eq!(c.meal_remaining, Some(days * 3));
        assert_eq!(c.progress_percent, 0.0);
        assert_eq!(c.breakdown.years, 80);
    }

    #[test]
    fn test_progress_uses_whole_years() {
        let p = profile(date(2000, 1, 1), 80);
        let now = start_of_day(date(2040, 6, 1));
        let c = compute_countdown(now, &p);
        assert_eq!(c.progress_percent, 50.0);
        assert_eq!(c.progress_rounded(), 50);
    }

    #[test]
    fn test_progress_clamped() {
        // Born in the future relative to now
        let p = profile(date(2000, 1, 1), 81);
        let c = compute_countdown(start_of_day(date(1999, 1, 1)), &p);
        assert_eq!(c.progress_percent, 0.0);

        let p = profile(date(2000, 1, 1), 1);
        let c = compute_countdown(start_of_day(date(2000, 12, 31)), &p);
        assert!((0.0..=100.0).contains(&c.progress_percent));
    }

    #[test]
    fn test_zero_target_age() {
        let p = profile(date(2000, 1, 1), 0);

        let after = compute_countdown(start_of_day(date(2020, 1, 1)), &p);
        assert_eq!(after.target_date, date(2000, 1, 1));
        assert!(after.is_finished());
        assert_eq!(after.progress_percent, 100.0);

        // Target date still ahead of now, yet nothing is left to complete
        let before = compute_countdown(start_of_day(date(1999, 1, 1)), &p);
        assert!(!before.is_finished());
        assert_eq!(before.remaining_ms, 365 * 24 * 60 * 60 * 1000);
        assert_eq!(before.sleep_remaining, Some(365));
        assert_eq!(before.progress_percent, 100.0);
    }

    #[test]
    fn test_idempotent() {
        let p = profile(date(1985, 7, 14), 90);
        let now = start_of_day(date(2026, 10, 19)) + Duration::milliseconds(12_345_678);
        assert_eq!(compute_countdown(now, &p), compute_countdown(now, &p));
    }

    #[test]
    fn test_leap_day_birth_target() {
        let p = profile(date(2000, 2, 29), 81);
        let c = compute_countdown(start_of_day(date(2081, 2, 28)), &p);
        assert_eq!(c.target_date, date(2081, 3, 1));
        assert_eq!(c.sleep_remaining, Some(1));
    }
}
