//! Calculators - pure functions of a timestamp and a profile
//!
//! Each tick runs the countdown once and the family calculator once per member.

pub mod breakdown;
pub mod countdown;
pub mod family;

pub use breakdown::{breakdown, DurationBreakdown};
pub use countdown::{compute_countdown, Countdown};
pub use family::{
    compute_family_time, compute_family_times, FamilyDetail, FamilyTime, FamilyTimeKind,
};
