//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/arbor/arbor.toml`
//! 3. Environment variables: `ARBOR_*` prefix (e.g. `ARBOR_RANDOM_SIZE`)

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Timing harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BenchSettings {
    /// Tree sizes measured by the evaluation battery
    pub sizes: Vec<usize>,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            sizes: vec![10, 20, 30, 40, 50, 100, 200, 500, 1000],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Node count used by `random` when no size is given
    pub random_size: usize,
    pub bench: BenchSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            random_size: 13,
            bench: BenchSettings::default(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder =
            Config::builder().add_source(Config::try_from(&Settings::default())?);

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                builder = builder.add_source(File::from(path));
            }
        }

        builder = builder.add_source(Environment::with_prefix("ARBOR").separator("__"));
        builder.build()?.try_deserialize()
    }

    /// `$XDG_CONFIG_HOME/arbor/arbor.toml` (platform equivalent elsewhere).
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "arbor").map(|dirs| dirs.config_dir().join("arbor.toml"))
    }
}
