use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::pager::DEFAULT_SWIPE_THRESHOLD;

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_ACCENT_RGB: [u8; 3] = [123, 171, 243];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to write config to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub tick_interval_ms: u64,
    pub swipe_threshold: f64,
    /// Swipe units contributed by each terminal column of a mouse drag
    pub drag_units_per_column: f64,
    pub accent_rgb: [u8; 3],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            drag_units_per_column: 4.0,
            accent_rgb: DEFAULT_ACCENT_RGB,
        }
    }
}

impl Config {
    /// Replace swipe settings that would make paging unusable (NaN, infinite,
    /// zero or negative) with their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Config::default();
        if !is_positive_finite(self.swipe_threshold) {
            warn!(value = self.swipe_threshold, "invalid swipe_threshold, using default");
            self.swipe_threshold = defaults.swipe_threshold;
        }
        if !is_positive_finite(self.drag_units_per_column) {
            warn!(
                value = self.drag_units_per_column,
                "invalid drag_units_per_column, using default"
            );
            self.drag_units_per_column = defaults.drag_units_per_column;
        }
        self
    }
}

pub fn is_positive_finite(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<(), ConfigError>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "focusclock") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("focusclock_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };

        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg.sanitized(),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring malformed config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> Result<(), ConfigError> {
        let data = serde_json::to_vec_pretty(&cfg.clone().sanitized())?;
        let write = || -> std::io::Result<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, &data)
        };
        write().map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
