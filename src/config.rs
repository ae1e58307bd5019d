//! Runtime configuration from the environment
//!
//! `.env` is loaded first (current directory, then the parent as during
//! `tauri dev`). Recognised variables:
//! - `NEXUS_DATA_DIR`: directory of the fallback settings file
//! - `NEXUS_REPLY_DELAY_MS`: delay before the simulated chat reply
//! - `NEXUS_SYNC_DURATION_MS`: how long a simulated sync stays busy

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_STORE_FILE: &str = "nexus.json";
const DEFAULT_REPLY_DELAY_MS: u64 = 1000;
const DEFAULT_SYNC_DURATION_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NexusConfig {
    pub data_dir: Option<PathBuf>,
    pub store_file: String,
    pub reply_delay: Duration,
    pub sync_duration: Duration,
}

impl Default for NexusConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::config_dir().map(|dir| dir.join("nexus")),
            store_file: DEFAULT_STORE_FILE.to_string(),
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
            sync_duration: Duration::from_millis(DEFAULT_SYNC_DURATION_MS),
        }
    }
}

impl NexusConfig {
    /// Load `.env` and build the config from the process environment
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            let _ = dotenvy::from_path("../.env");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_dir = lookup("NEXUS_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .or(defaults.data_dir);

        Self {
            data_dir,
            store_file: defaults.store_file,
            reply_delay: millis_var(&lookup, "NEXUS_REPLY_DELAY_MS", defaults.reply_delay),
            sync_duration: millis_var(&lookup, "NEXUS_SYNC_DURATION_MS", defaults.sync_duration),
        }
    }
}

fn millis_var<F>(lookup: &F, name: &str, default: Duration) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => default,
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(ms) => Duration::from_millis(ms),
            Err(_) => {
                tracing::warn!(var = name, value = %raw, "Invalid duration, using default");
                default
            }
        },
    }
}
