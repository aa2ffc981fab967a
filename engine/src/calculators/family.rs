//! Family Relationship Calculator
//!
//! Children: time until they turn 18. Parents and partners: the time both
//! the user and the relative are still inside their projected lifespans.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::breakdown::{breakdown, whole_years, DurationBreakdown};
use crate::model::{ms_since, ms_until, FamilyMember, Profile, Relationship};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FamilyTimeKind {
    UntilAdulthood,
    SharedLifetime,
}

impl From<Relationship> for FamilyTimeKind {
    fn from(relationship: Relationship) -> Self {
        match relationship {
            Relationship::Child => FamilyTimeKind::UntilAdulthood,
            Relationship::Parent | Relationship::Partner => FamilyTimeKind::SharedLifetime,
        }
    }
}

/// Extra fields the presentation layer renders next to the breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum FamilyDetail {
    #[serde(rename_all = "camelCase")]
    UntilAdulthood { current_age: i64 },
    AlreadyAdult,
    #[serde(rename_all = "camelCase")]
    SharedLifetime {
        user_remaining_years: i64,
        member_remaining_years: i64,
    },
    NoSharedTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyTime {
    pub name: String,
    pub relationship: Relationship,
    pub kind: FamilyTimeKind,
    pub breakdown: DurationBreakdown,
    pub detail: FamilyDetail,
}

/// Time remaining with a single family member
pub fn compute_family_time(
    now: DateTime<Utc>,
    profile: &Profile,
    member: &FamilyMember,
) -> FamilyTime {
    let kind = FamilyTimeKind::from(member.relationship);

    let (remaining_ms, detail) = match kind {
        FamilyTimeKind::UntilAdulthood => {
            let remaining_ms = ms_until(member.adulthood_date(), now);
            let detail = if remaining_ms > 0 {
                FamilyDetail::UntilAdulthood {
                    current_age: whole_years(ms_since(member.birth_date, now)),
                }
            } else {
                FamilyDetail::AlreadyAdult
            };
            (remaining_ms, detail)
        }
        FamilyTimeKind::SharedLifetime => {
            let user_remaining_ms = profile.remaining_ms(now);
            let member_remaining_ms = member.remaining_lifetime_ms(now);
            let shared_ms = user_remaining_ms.min(member_remaining_ms);
            let detail = if shared_ms > 0 {
                FamilyDetail::SharedLifetime {
                    user_remaining_years: whole_years(user_remaining_ms),
                    member_remaining_years: whole_years(member_remaining_ms),
                }
            } else {
                FamilyDetail::NoSharedTime
            };
            (shared_ms, detail)
        }
    };

    FamilyTime {
        name: member.name.clone(),
        relationship: member.relationship,
        kind,
        breakdown: breakdown(remaining_ms),
        detail,
    }
}

/// Evaluate every family member independently, in profile order
pub fn compute_family_times(now: DateTime<Utc>, profile: &Profile) -> Vec<FamilyTime> {
    profile
        .family
        .iter()
        .map(|member| compute_family_time(now, profile, member))
        .collect()
}
