//! Life Timer Engine
//!
//! Countdown to a life-expectancy target date, with derived statistics and
//! per-family-member "time remaining together" estimates. The calculators are
//! pure functions of a timestamp and a profile, recomputed once per tick.

pub mod calculators;
pub mod clock;
pub mod countdown_runner;
pub mod error;
pub mod input;
pub mod model;
pub mod persistence;
pub mod tick;

pub use calculators::*;
pub use clock::{Clock, FixedClock, SystemClock};
pub use countdown_runner::{CountdownRunner, DEFAULT_TICK_INTERVAL};
pub use error::{ParseEnumError, ProfileError, StoreError};
pub use input::{FamilyMemberDraft, ProfileDraft};
pub use model::*;
pub use persistence::ProfileStore;
pub use tick::{compute_tick, TickReport};
