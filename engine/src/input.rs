//! Profile input validation
//!
//! Turns loosely filled form data into a `Profile`. This is where defaults
//! are applied; the calculators never see a partial profile.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::ProfileError;
use crate::model::{AverageLifespan, FamilyMember, Gender, Profile, Relationship};

/// Accepted explicit target ages
pub const TARGET_AGE_RANGE: std::ops::RangeInclusive<u32> = 1..=150;

/// A family member row as entered; any field may still be blank
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyMemberDraft {
    pub name: Option<String>,
    pub relationship: Option<Relationship>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
}

impl FamilyMemberDraft {
    /// Complete member, or `None` if any field is missing
    pub fn complete(self) -> Option<FamilyMember> {
        let name = self.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())?;
        Some(FamilyMember {
            name,
            relationship: self.relationship?,
            gender: self.gender?,
            birth_date: self.birth_date?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub target_age: Option<u32>,
    pub show_sleep_count: bool,
    pub show_meal_count: bool,
    pub family: Vec<FamilyMemberDraft>,
}

impl ProfileDraft {
    /// Validate against `today` and resolve defaults.
    ///
    /// Incomplete family rows are dropped rather than rejected.
    pub fn into_profile(self, today: NaiveDate) -> Result<Profile, ProfileError> {
        let (Some(birth_date), Some(gender)) = (self.birth_date, self.gender) else {
            return Err(ProfileError::MissingRequired);
        };

        if birth_date > today {
            return Err(ProfileError::BirthDateInFuture { birth_date });
        }

        let target_age = match self.target_age {
            Some(age) if !TARGET_AGE_RANGE.contains(&age) => {
                return Err(ProfileError::TargetAgeOutOfRange(age));
            }
            Some(age) => age,
            None => AverageLifespan::for_gender(gender),
        };

        let drafted = self.family.len();
        let family: Vec<FamilyMember> = self
            .family
            .into_iter()
            .filter_map(FamilyMemberDraft::complete)
            .collect();
        if family.len() < drafted {
            debug!("Dropped {} incomplete family member(s)", drafted - family.len());
        }

        Ok(Profile {
            birth_date,
            gender,
            target_age,
            show_sleep_count: self.show_sleep_count,
            show_meal_count: self.show_meal_count,
            family,
        })
    }
}
