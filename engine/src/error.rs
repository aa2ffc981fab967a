//! Error types for profile input and persistence.
//!
//! The calculators themselves never fail; these cover the caller-side
//! concerns around them.

use std::path::PathBuf;
use thiserror::Error;

/// Unrecognized enum value in user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    #[error("unknown gender '{0}' (expected male or female)")]
    Gender(String),

    #[error("unknown relationship '{0}' (expected parent, partner or child)")]
    Relationship(String),
}

/// Rejected profile input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("birth date and gender are required")]
    MissingRequired,

    #[error("birth date {birth_date} is in the future")]
    BirthDateInFuture { birth_date: chrono::NaiveDate },

    #[error("target age {0} is outside 1-150")]
    TargetAgeOutOfRange(u32),
}

/// Profile storage failures
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stored profile is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported profile version: {0}")]
    UnsupportedVersion(u8),
}
