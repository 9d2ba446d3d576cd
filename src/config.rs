use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "holical.toml";

/// Top-level holical configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolicalConfig {
    /// Holiday API settings.
    #[serde(default)]
    pub api: ApiToml,

    /// Default selection.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Text output settings.
    #[serde(default)]
    pub display: DisplayToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiToml {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; absent means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ApiToml {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

fn default_base_url() -> String {
    holical_client::DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_country")]
    pub country: String,
    /// Year to show; absent means the current year.
    #[serde(default)]
    pub year: Option<i32>,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            country: default_country(),
            year: None,
        }
    }
}

fn default_country() -> String {
    "US".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default = "default_true")]
    pub show_list: bool,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            show_list: true,
        }
    }
}

fn default_columns() -> usize {
    3
}
fn default_true() -> bool {
    true
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
/// read if present and defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<HolicalConfig> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };
    if !required && !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(HolicalConfig::default());
    }
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: HolicalConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}
