//! `AppConfig` struct and TOML read/write.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cinefind_api::session::DEFAULT_TOP_RATED;
use serde::{Deserialize, Serialize};
use url::Url;

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Per-application directory under the user's config base.
const APP_DIR: &str = "cinefind";

/// Placeholder shipped in sample configs; treated as "no key".
const PLACEHOLDER_API_KEY: &str = "YOUR_OMDB_API_KEY";

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// OMDb API settings.
    #[serde(default)]
    pub omdb: OmdbConfig,
    /// Top-rated catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// OMDb API configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OmdbConfig {
    /// API key. Absent, empty or the placeholder selects the offline dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Top-rated catalog configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    /// IMDb identifiers in display order. Empty uses the built-in list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_rated: Vec<String>,
}

impl AppConfig {
    /// Returns the config file location.
    ///
    /// `dir` (the `--dir` flag) wins. Otherwise the file lives in
    /// `$XDG_CONFIG_HOME/cinefind/`, falling back to `~/.config/cinefind/`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` is `None` and neither `XDG_CONFIG_HOME`
    /// nor `HOME` is set.
    pub fn path(dir: Option<&Path>) -> Result<PathBuf> {
        Self::path_from(dir, |key| std::env::var_os(key))
    }

    /// [`Self::path`] with the environment lookup supplied by the caller.
    fn path_from(dir: Option<&Path>, env: impl Fn(&str) -> Option<OsString>) -> Result<PathBuf> {
        if let Some(dir) = dir {
            return Ok(dir.join(CONFIG_FILE));
        }

        let base = env("XDG_CONFIG_HOME")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| env("HOME").map(|home| PathBuf::from(home).join(".config")))
            .context("neither XDG_CONFIG_HOME nor HOME is set")?;
        Ok(base.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Returns the usable API key, preferring `env_key` over the file.
    ///
    /// Empty and placeholder values count as unset.
    #[must_use]
    pub fn api_key(&self, env_key: Option<String>) -> Option<String> {
        env_key
            .or_else(|| self.omdb.api_key.clone())
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY)
    }

    /// Parses the configured base URL, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if `omdb.base_url` is not a valid URL.
    pub fn base_url(&self) -> Result<Option<Url>> {
        self.omdb
            .base_url
            .as_deref()
            .map(|raw| Url::parse(raw).with_context(|| format!("invalid omdb.base_url: {raw}")))
            .transpose()
    }

    /// Returns the configured catalog, or the built-in list when empty.
    #[must_use]
    pub fn top_rated(&self) -> Vec<String> {
        if self.catalog.top_rated.is_empty() {
            DEFAULT_TOP_RATED.iter().map(|id| String::from(*id)).collect()
        } else {
            self.catalog.top_rated.clone()
        }
    }
}
