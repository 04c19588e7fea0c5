use std::path::{Path, PathBuf};

use bevy::log::warn;
use bevy::prelude::Resource;
use rope_core::{ConfigError, RopeConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::{RopeStyle, StyleError};

pub const DEFAULT_CONFIG_NAME: &str = "rope.toml";
pub const CONFIG_ENV: &str = "ROPE_CONFIG";

#[derive(Debug, Error)]
pub enum SceneConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Rope(#[from] ConfigError),
    #[error(transparent)]
    Style(#[from] StyleError),
}

/// Scene authoring data: where the hook sits, the rope layout and its prefabs.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub hook: [f32; 2],
    pub rope: RopeConfig,
    pub style: RopeStyle,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            hook: [0.0, 2.0],
            rope: RopeConfig::default(),
            style: RopeStyle::default(),
        }
    }
}

impl SceneConfig {
    /// Resolve the config file: explicit path, then `ROPE_CONFIG`, then `rope.toml`.
    ///
    /// An explicit path must exist. The implicit locations fall back to defaults
    /// when absent, but a file that exists and fails to parse is always an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SceneConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        let path = std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_NAME));
        if !path.exists() {
            warn!(
                "rope config {} not found; using built-in defaults",
                path.display()
            );
            let cfg = Self::default();
            cfg.validate()?;
            return Ok(cfg);
        }
        Self::from_path(&path)
    }

    pub fn from_path(path: &Path) -> Result<Self, SceneConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SceneConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: SceneConfig = toml::from_str(&raw).map_err(|source| SceneConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), SceneConfigError> {
        self.rope.validate()?;
        self.style.validate()?;
        Ok(())
    }

    pub fn hook_position(&self) -> bevy::math::Vec2 {
        bevy::math::Vec2::from(self.hook)
    }
}
