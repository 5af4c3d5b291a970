//! View configuration: defaults, YAML file loading, environment variable
//! overrides and validation.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const CONTENT_VIEW_AUTO: &str = "Auto";
pub const CONTENT_VIEW_EDIT: &str = "Edit";
pub const DEFAULT_TAB: &str = "request";
pub const DEFAULT_MAX_CONTENT_LINES: usize = 80;

pub const ENV_MAX_CONTENT_LINES: &str = "FLOWVIEW_MAX_CONTENT_LINES";
pub const ENV_DEFAULT_CONTENT_VIEW: &str = "FLOWVIEW_DEFAULT_CONTENT_VIEW";
pub const ENV_DEFAULT_TAB: &str = "FLOWVIEW_DEFAULT_TAB";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings for the flow view state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Bodies longer than this are truncated until expanded.
    pub max_content_lines: usize,
    pub default_content_view: String,
    pub default_tab: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            max_content_lines: DEFAULT_MAX_CONTENT_LINES,
            default_content_view: CONTENT_VIEW_AUTO.to_owned(),
            default_tab: DEFAULT_TAB.to_owned(),
        }
    }
}

impl ViewConfig {
    /// Parse YAML text. Missing keys keep their defaults.
    pub fn from_yaml_str(raw: &str, origin: &Path) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read and parse a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&raw, path)
    }

    /// Load from `path` (or the first discovered config file), apply
    /// process environment overrides, then validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut cfg = match path.map(Path::to_path_buf).or_else(find_config_file) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        cfg.apply_env_overrides(|key| std::env::var(key).ok())?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply `FLOWVIEW_*` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_MAX_CONTENT_LINES) {
            self.max_content_lines = raw.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!(
                    "{ENV_MAX_CONTENT_LINES} must be a non-negative integer (got {raw:?})"
                ))
            })?;
        }
        if let Some(raw) = lookup(ENV_DEFAULT_CONTENT_VIEW) {
            self.default_content_view = raw.trim().to_owned();
        }
        if let Some(raw) = lookup(ENV_DEFAULT_TAB) {
            self.default_tab = raw.trim().to_owned();
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_content_lines < 1 {
            return Err(ConfigError::Invalid(
                "max_content_lines must be at least 1".into(),
            ));
        }
        if self.default_content_view.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_content_view is required".into(),
            ));
        }
        if self.default_content_view == CONTENT_VIEW_EDIT {
            return Err(ConfigError::Invalid(format!(
                "default_content_view cannot be {CONTENT_VIEW_EDIT:?}; it is reserved for edit sessions"
            )));
        }
        if self.default_tab.trim().is_empty() {
            return Err(ConfigError::Invalid("default_tab is required".into()));
        }
        Ok(())
    }
}

/// Search the standard locations for `flowview/config.yaml`.
pub fn find_config_file() -> Option<PathBuf> {
    config_search_paths()
        .into_iter()
        .map(|dir| dir.join("config.yaml"))
        .find(|candidate| candidate.is_file())
}

fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.trim().is_empty() {
            paths.push(Path::new(&xdg).join("flowview"));
        }
    }
    if let Ok(home) = std::env::var("HOME") {
        if !home.trim().is_empty() {
            paths.push(Path::new(&home).join(".config/flowview"));
        }
    }
    paths
}
