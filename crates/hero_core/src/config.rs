//! Runtime configuration resolved from the environment.

use crate::error::ConfigError;
use crate::models::RosterShape;
use std::env;
use std::path::PathBuf;

/// Env var overriding the hero document path.
pub const DATA_PATH_ENV: &str = "HERO_DATA_PATH";

/// Env var overriding where exported heroes are written.
pub const EXPORT_DIR_ENV: &str = "HERO_EXPORT_DIR";

/// Env var overriding the roster shape, e.g. `Tank=1,DPS=2,Support=2`.
pub const ROSTER_SHAPE_ENV: &str = "HERO_ROSTER_SHAPE";

/// Default relative path used when `HERO_DATA_PATH` is not set.
pub const DEFAULT_DATA_PATH: &str = "hero_data.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroConfig {
    pub data_path: PathBuf,
    pub export_dir: PathBuf,
    pub roster_shape: RosterShape,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            export_dir: PathBuf::from("."),
            roster_shape: RosterShape::standard(),
        }
    }
}

impl HeroConfig {
    /// Resolve from `HERO_DATA_PATH`, `HERO_EXPORT_DIR` and
    /// `HERO_ROSTER_SHAPE`. Unset or blank variables keep the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = value(DATA_PATH_ENV) {
            config.data_path = PathBuf::from(path);
        }
        if let Some(dir) = value(EXPORT_DIR_ENV) {
            config.export_dir = PathBuf::from(dir);
        }
        if let Some(shape) = value(ROSTER_SHAPE_ENV) {
            config.roster_shape = shape.parse()?;
        }
        Ok(config)
    }
}
