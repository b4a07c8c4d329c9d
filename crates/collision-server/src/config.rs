//! Server configuration, loaded from an optional TOML file.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("base path must start and end with '/': {0:?}")]
    BasePath(String),

    #[error("invalid module mount name: {0:?}")]
    MountName(String),

    #[error("invalid CORS origin: {0:?}")]
    CorsOrigin(String),

    #[error("render size {width}x{height} is below the minimum {min_width}x{min_height}")]
    RenderSize {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
}

/// Responder mounted under the base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModuleKind {
    /// Collision outcomes
    Coll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: plot::DEFAULT_WIDTH,
            height: plot::DEFAULT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub base_path: String,
    /// `*` or explicit origins allowed to read responses cross-site
    pub cors_origins: Vec<String>,
    /// Mount name to module
    pub modules: BTreeMap<String, ModuleKind>,
    pub render: RenderConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 9099)),
            base_path: "/data/".to_string(),
            cors_origins: Vec::new(),
            modules: BTreeMap::from([("coll".to_string(), ModuleKind::Coll)]),
            render: RenderConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_path.starts_with('/') || !self.base_path.ends_with('/') {
            return Err(ConfigError::BasePath(self.base_path.clone()));
        }

        if let Some(name) = self
            .modules
            .keys()
            .find(|name| name.is_empty() || name.contains('/'))
        {
            return Err(ConfigError::MountName(name.clone()));
        }

        if let Some(origin) = self
            .cors_origins
            .iter()
            .find(|origin| *origin != "*" && HeaderValue::from_str(origin).is_err())
        {
            return Err(ConfigError::CorsOrigin(origin.clone()));
        }

        let RenderConfig { width, height } = self.render;
        if width < plot::layout::MIN_WIDTH || height < plot::layout::MIN_HEIGHT {
            return Err(ConfigError::RenderSize {
                width,
                height,
                min_width: plot::layout::MIN_WIDTH,
                min_height: plot::layout::MIN_HEIGHT,
            });
        }

        Ok(())
    }
}
