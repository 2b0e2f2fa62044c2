//! Configuration file support.
//!
//! Loads defaults from `facetnav.toml` (or `facetnav.json`) in the working
//! directory, or from the file named by `--config`. Navigation settings live
//! under the `[navigation]` section.
//!
//! ## Precedence (highest to lowest)
//!
//! 1. CLI arguments
//! 2. Environment variables (`FACETNAV_SNAPSHOT`, `FACETNAV_FORMAT`)
//! 3. Config file (`[navigation]`)
//! 4. Hardcoded defaults

use crate::cli::{OutputFormat, StatisticsMode};
use facetnav_core::EmptyNodeBehaviour;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file names probed in the working directory, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["facetnav.toml", "facetnav.json"];

// ---------------------------------------------------------------------------
// File config serde types (all Option, absence means "not set in file")
// ---------------------------------------------------------------------------

/// Top-level config file structure.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FileConfig {
    /// `[navigation]`
    #[serde(default)]
    pub navigation: Option<NavigationFileConfig>,
}

/// The `[navigation]` section.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct NavigationFileConfig {
    /// Snapshot path; relative paths resolve against the config file's directory
    pub snapshot: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub statistics: Option<StatisticsMode>,
    pub empty: Option<EmptyNodeBehaviour>,
    pub sort_by_label: Option<bool>,
}

/// A loaded config file and where it came from.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub path: Option<PathBuf>,
    pub file: FileConfig,
}

impl LoadedConfig {
    pub fn navigation(&self) -> Option<&NavigationFileConfig> {
        self.file.navigation.as_ref()
    }

    /// Directory relative file paths are resolved against.
    pub fn base_dir(&self) -> Option<&Path> {
        self.path.as_deref().and_then(Path::parent)
    }
}

// ---------------------------------------------------------------------------
// Config file loading
// ---------------------------------------------------------------------------

/// Load a config file from the given path. Detects format by extension:
/// `.json` → JSON, everything else → TOML.
pub fn load_config(path: &Path) -> Result<FileConfig, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if content.trim().is_empty() {
        return Ok(FileConfig::default());
    }

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).map_err(|e| ConfigFileError::Parse {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    } else {
        toml::from_str(&content).map_err(|e| ConfigFileError::Parse {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    }
}

/// Resolve the config file path.
///
/// An explicit `--config` path is used as given and must exist. Otherwise
/// `dir` is probed for [`CONFIG_FILE_NAMES`]. Returns `Ok(None)` when no
/// config file is found.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    dir: &Path,
) -> Result<Option<PathBuf>, ConfigFileError> {
    if let Some(p) = explicit {
        if p.is_file() {
            return Ok(Some(p.to_path_buf()));
        }
        return Err(ConfigFileError::NotFound {
            path: p.to_path_buf(),
        });
    }

    Ok(CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file()))
}

/// Find and load the config file, if there is one.
pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<LoadedConfig, ConfigFileError> {
    let Some(path) = resolve_config_path(explicit, dir)? else {
        debug!(dir = %dir.display(), "no config file found");
        return Ok(LoadedConfig::default());
    };

    let file = load_config(&path)?;
    debug!(path = %path.display(), "loaded config file");
    Ok(LoadedConfig {
        path: Some(path),
        file,
    })
}

/// Errors from config file loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {detail}")]
    Parse { path: PathBuf, detail: String },
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },
}
