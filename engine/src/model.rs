//! Profile data model
//!
//! Everything the calculators read lives here. A `Profile` is created once
//! from validated input and replaced wholesale, never edited in place.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ParseEnumError;

/// Age at which a child counts as an adult
pub const ADULTHOOD_AGE: u32 = 18;

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(ParseEnumError::Gender(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Parent,
    Partner,
    Child,
}

impl Relationship {
    /// Fixed display label
    pub fn label(&self) -> &'static str {
        match self {
            Relationship::Parent => "Parent",
            Relationship::Partner => "Partner",
            Relationship::Child => "Child",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Relationship {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "parent" => Ok(Relationship::Parent),
            "partner" => Ok(Relationship::Partner),
            "child" => Ok(Relationship::Child),
            _ => Err(ParseEnumError::Relationship(s.to_string())),
        }
    }
}

// ============================================================================
// Average lifespan table
// ============================================================================

/// Expected age in years by gender.
///
/// Used as the default target age when none is given, and as a family
/// member's own lifespan in shared-time calculations.
pub struct AverageLifespan;

impl AverageLifespan {
    pub const MALE: u32 = 81;
    pub const FEMALE: u32 = 87;

    pub fn for_gender(gender: Gender) -> u32 {
        match gender {
            Gender::Male => Self::MALE,
            Gender::Female => Self::FEMALE,
        }
    }
}

// ============================================================================
// Calendar helpers
// ============================================================================

/// Advance `date` by `years` calendar years, keeping month and day.
///
/// Feb 29 landing on a non-leap year rolls forward to Mar 1. Years beyond
/// chrono's range saturate to `NaiveDate::MAX`.
pub fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    let Some(year) = i32::try_from(years)
        .ok()
        .and_then(|years| date.year().checked_add(years))
    else {
        return NaiveDate::MAX;
    };

    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(NaiveDate::MAX)
}

/// Midnight UTC of a calendar date
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Milliseconds from `now` until midnight UTC of `date` (negative once passed)
pub fn ms_until(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    (start_of_day(date) - now).num_milliseconds()
}

/// Milliseconds elapsed since midnight UTC of `date` (negative if in the future)
pub fn ms_since(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    (now - start_of_day(date)).num_milliseconds()
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub name: String,
    pub relationship: Relationship,
    pub gender: Gender,
    #[serde(deserialize_with = "date_or_timestamp")]
    pub birth_date: NaiveDate,
}

impl FamilyMember {
    /// Date on which the member reaches their average lifespan
    pub fn lifespan_end(&self) -> NaiveDate {
        add_years(self.birth_date, AverageLifespan::for_gender(self.gender))
    }

    pub fn remaining_lifetime_ms(&self, now: DateTime<Utc>) -> i64 {
        ms_until(self.lifespan_end(), now)
    }

    pub fn adulthood_date(&self) -> NaiveDate {
        add_years(self.birth_date, ADULTHOOD_AGE)
    }
}

/// The user's life-expectancy input record.
///
/// `target_age` is always resolved (non-zero) by the time a profile exists;
/// see [`crate::input::ProfileDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(deserialize_with = "date_or_timestamp")]
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub target_age: u32,
    #[serde(default)]
    pub show_sleep_count: bool,
    #[serde(default)]
    pub show_meal_count: bool,
    #[serde(default)]
    pub family: Vec<FamilyMember>,
}

impl Profile {
    pub fn target_date(&self) -> NaiveDate {
        add_years(self.birth_date, self.target_age)
    }

    pub fn remaining_ms(&self, now: DateTime<Utc>) -> i64 {
        ms_until(self.target_date(), now)
    }
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (older saves stored the
/// birth date as an ISO timestamp).
fn date_or_timestamp<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.with_timezone(&Utc).date_naive())
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_years_keeps_month_and_day() {
        assert_eq!(add_years(date(2000, 1, 1), 81), date(2081, 1, 1));
        assert_eq!(add_years(date(1990, 12, 31), 18), date(2008, 12, 31));
    }

    #[test]
    fn test_add_years_leap_day_rolls_to_march_first() {
        assert_eq!(add_years(date(2000, 2, 29), 1), date(2001, 3, 1));
        assert_eq!(add_years(date(2000, 2, 29), 81), date(2081, 3, 1));
        // Leap target year keeps Feb 29
        assert_eq!(add_years(date(2000, 2, 29), 4), date(2004, 2, 29));
    }

    #[test]
    fn test_add_years_saturates() {
        assert_eq!(add_years(date(2000, 1, 1), u32::MAX), NaiveDate::MAX);
    }

    #[test]
    fn test_average_lifespan() {
        assert_eq!(AverageLifespan::for_gender(Gender::Male), 81);
        assert_eq!(AverageLifespan::for_gender(Gender::Female), 87);
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" partner ".parse::<Relationship>().unwrap(), Relationship::Partner);
        assert!("sibling".parse::<Relationship>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_profile_json_layout() {
        let json = r#"{
            "birthDate": "1990-05-01T00:00:00.000Z",
            "gender": "male",
            "targetAge": 81,
            "showSleepCount": true,
            "showMealCount": false,
            "family": [
                {
                    "name": "Aki",
                    "relationship": "child",
                    "gender": "female",
                    "birthDate": "2015-03-03"
                }
            ]
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.birth_date, date(1990, 5, 1));
        assert_eq!(profile.family[0].relationship, Relationship::Child);
        assert_eq!(profile.target_date(), date(2071, 5, 1));

        let out = serde_json::to_value(&profile).unwrap();
        assert_eq!(out["birthDate"], "1990-05-01");
        assert_eq!(out["family"][0]["gender"], "female");
    }

    #[test]
    fn test_ms_until_and_since() {
        let now = start_of_day(date(2020, 1, 1));
        assert_eq!(ms_until(date(2020, 1, 2), now), 86_400_000);
        assert_eq!(ms_since(date(2019, 12, 31), now), 86_400_000);
        assert!(ms_until(date(2019, 12, 31), now) < 0);
    }
}
