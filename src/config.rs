//! Configuration file for codementor.
//!
//! Settings live in `codementor.yaml`. Every field is optional and a missing
//! file means defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::Catalog;
use crate::error::{MentorError, Result};
use crate::session::{Picker, SelectorPolicy};

/// Default config file names to search for.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["codementor.yaml", ".codementor.yaml"];

/// Starter config written by `codementor init`.
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.yaml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Report unknown difficulty/topic keys as errors instead of ignoring them.
    #[serde(default)]
    pub strict_selectors: Option<bool>,
    /// Fixed seed for exercise selection.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Custom catalog file, relative to the config file's directory.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Directory the config was loaded from; used to resolve `catalog`.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| MentorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml(&content).map_err(|e| MentorError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document deserializes as null
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load the config at `path`, or discover one in `dir`, or use defaults.
    pub fn load(path: Option<&Path>, dir: &Path) -> Result<Self> {
        match path {
            Some(p) => Self::parse_file(p),
            None => match discover(dir) {
                Some(p) => Self::parse_file(p),
                None => Ok(Self::default()),
            },
        }
    }

    /// Returns whether strict selector validation is enabled (defaults to false).
    pub fn is_strict(&self) -> bool {
        self.strict_selectors.unwrap_or(false)
    }

    pub fn selector_policy(&self) -> SelectorPolicy {
        SelectorPolicy::from_strict(self.is_strict())
    }

    /// Picker for this config, seeded when a seed is set.
    pub fn picker(&self) -> Picker {
        Picker::new(self.seed)
    }

    /// Resolved path of the custom catalog, if one is configured.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let catalog = self.catalog.as_ref()?;
        match &self.base_dir {
            Some(base) if catalog.is_relative() => Some(base.join(catalog)),
            _ => Some(catalog.clone()),
        }
    }

    /// Load the configured catalog, falling back to the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match self.catalog_path() {
            Some(p) => Catalog::parse_file(p),
            None => Catalog::builtin(),
        }
    }
}

/// Find a config file in `dir`.
pub fn discover(dir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}

/// Validate a config for correctness.
pub fn validate(config: &Config) -> Result<()> {
    if let Some(path) = config.catalog_path() {
        if !path.is_file() {
            return Err(MentorError::Config {
                path: path.clone(),
                message: "catalog file does not exist".to_string(),
            });
        }
    }
    Ok(())
}
