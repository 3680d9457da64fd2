//! Client configuration for native use.
//!
//! Precedence, lowest first: built-in defaults, TOML file, environment,
//! explicit overrides from the command line.

use crate::error::Result;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Address of a locally running index server.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_SITE_ROOT: &str = "/";

pub const BASE_URL_ENV: &str = "M4DOC_BASE_URL";
pub const SITE_ROOT_ENV: &str = "M4DOC_SITE_ROOT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Where the index backend listens.
    pub base_url: String,
    /// Prefix for rendered links.
    pub site_root: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            site_root: DEFAULT_SITE_ROOT.to_string(),
        }
    }
}

/// On-disk form; every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    base_url: Option<String>,
    site_root: Option<String>,
}

impl ClientConfig {
    /// `<config dir>/m4doc/client.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("m4doc").join("client.toml"))
    }

    /// Load from `path` (which must exist) or from the default path (if it exists),
    /// then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text)?;
        let mut config = Self::default();
        if let Some(base_url) = file.base_url {
            config.base_url = base_url;
        }
        if let Some(site_root) = file.site_root {
            config.site_root = site_root;
        }
        Ok(config)
    }

    /// Apply `M4DOC_*` overrides using `lookup` to read variables.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            self.base_url = base_url;
        }
        if let Some(site_root) = lookup(SITE_ROOT_ENV).filter(|v| !v.is_empty()) {
            self.site_root = site_root;
        }
    }

    /// Apply explicit overrides; `None` leaves the current value.
    pub fn apply_overrides(&mut self, base_url: Option<String>, site_root: Option<String>) {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(site_root) = site_root {
            self.site_root = site_root;
        }
    }
}
