use std::sync::Arc;

use lifetimer::{Clock, Profile, ProfileStore, SystemClock};
use tracing::error;

use crate::config::AppConfig;

/// Shared application state handed to every command
pub struct AppState {
    pub config: AppConfig,
    pub store: ProfileStore,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let store = ProfileStore::new(config.data_file.clone());
        Self {
            config,
            store,
            clock: Arc::new(SystemClock),
        }
    }

    /// Saved profile, if any. Unreadable data is logged and treated as absent.
    pub fn load_profile(&self) -> Option<Profile> {
        match self.store.load() {
            Ok(profile) => profile,
            Err(e) => {
                error!("Failed to load saved profile: {}", e);
                None
            }
        }
    }
}
