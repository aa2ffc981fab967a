//! Resolved application configuration

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use lifetimer::persistence::PROFILE_FILE_NAME;
use serde::Serialize;

use crate::args::ConfigArgs;

/// Directory under the platform data dir
const APP_DIR_NAME: &str = "life-timer";

#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub tick_interval_ms: u64,
}

impl AppConfig {
    /// Flags win over environment variables, which win over defaults
    pub fn resolve(args: &ConfigArgs) -> anyhow::Result<Self> {
        if args.interval_ms == 0 {
            bail!("tick interval must be at least 1ms");
        }

        let data_file = match &args.data_file {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .context("no platform data directory; pass --data-file")?
                .join(APP_DIR_NAME)
                .join(PROFILE_FILE_NAME),
        };

        Ok(Self {
            data_file,
            tick_interval_ms: args.interval_ms,
        })
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_data_file() {
        let args = ConfigArgs {
            data_file: Some(PathBuf::from("/tmp/profile.json")),
            interval_ms: 250,
        };
        let config = AppConfig::resolve(&args).unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/profile.json"));
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let args = ConfigArgs {
            data_file: Some(PathBuf::from("profile.json")),
            interval_ms: 0,
        };
        assert!(AppConfig::resolve(&args).is_err());
    }
}
