//! Tick - one full recomputation of everything shown on screen

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::calculators::{compute_countdown, compute_family_times, Countdown, FamilyTime};
use crate::model::Profile;

/// Output of a single tick
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickReport {
    pub now: DateTime<Utc>,
    pub countdown: Countdown,
    pub family: Vec<FamilyTime>,
}

/// Run the countdown once and the family calculator once per member
pub fn compute_tick(now: DateTime<Utc>, profile: &Profile) -> TickReport {
    TickReport {
        now,
        countdown: compute_countdown(now, profile),
        family: compute_family_times(now, profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{start_of_day, FamilyMember, Gender, Relationship};
    use chrono::NaiveDate;

    #[test]
    fn test_tick_covers_every_member() {
        let profile = Profile {
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            gender: Gender::Male,
            target_age: 81,
            show_sleep_count: true,
            show_meal_count: false,
            family: vec![
                FamilyMember {
                    name: "Sora".into(),
                    relationship: Relationship::Child,
                    gender: Gender::Male,
                    birth_date: NaiveDate::from_ymd_opt(2020, 4, 1).unwrap(),
                },
                FamilyMember {
                    name: "Yui".into(),
                    relationship: Relationship::Partner,
                    gender: Gender::Female,
                    birth_date: NaiveDate::from_ymd_opt(1991, 8, 8).unwrap(),
                },
            ],
        };
        let now = start_of_day(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());

        let report = compute_tick(now, &profile);
        assert_eq!(report.now, now);
        assert_eq!(report.family.len(), 2);
        assert_eq!(report.countdown, compute_countdown(now, &profile));
        assert_eq!(report, compute_tick(now, &profile));
    }
}
