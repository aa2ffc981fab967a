//! Persistence module for the saved profile
//!
//! Stores the whole profile as one JSON document and replaces it on every save.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::model::Profile;

/// Schema version written by this build
pub const PROFILE_VERSION: u8 = 1;

/// Conventional file name for the saved profile
pub const PROFILE_FILE_NAME: &str = "lifeTimerData.json";

// ============================================================================
// Stored Data Structures
// ============================================================================

#[derive(Serialize)]
struct StoredProfileRef<'a> {
    version: u8,
    #[serde(flatten)]
    profile: &'a Profile,
}

#[derive(Deserialize)]
struct StoredProfile {
    /// Saves from before versioning carry no version field
    #[serde(default = "default_version")]
    version: u8,
    #[serde(flatten)]
    profile: Profile,
}

fn default_version() -> u8 {
    PROFILE_VERSION
}

// ============================================================================
// Store
// ============================================================================

#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved profile, `None` if nothing has been saved yet
    pub fn load(&self) -> Result<Option<Profile>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let stored: StoredProfile = serde_json::from_str(&json)?;
        if stored.version != PROFILE_VERSION {
            return Err(StoreError::UnsupportedVersion(stored.version));
        }

        debug!("Loaded profile with {} family member(s)", stored.profile.family.len());
        Ok(Some(stored.profile))
    }

    /// Replace the saved profile
    pub fn save(&self, profile: &Profile) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(&StoredProfileRef {
            version: PROFILE_VERSION,
            profile,
        })?;

        // Write beside the target and rename so a crash never leaves half a file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        info!("Saved profile to {}", self.path.display());
        Ok(())
    }

    /// Delete the saved profile. Clearing an empty store is not an error.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared saved profile at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
