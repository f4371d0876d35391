//! Optional `.keyprops.toml` settings.
//!
//! Lets a repository pin where `key.properties` and the app module live when
//! they do not follow the standard Flutter layout:
//!
//! ```toml
//! [paths]
//! project = "mobile/android"
//! properties = "secrets/key.properties"
//! base_dir = "mobile/android/app"
//! ```
//!
//! Relative paths are resolved from the directory holding the settings file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{Result, SettingsError};

/// Parsed settings file
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub paths: Paths,
}

/// `[paths]` table
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Paths {
    /// Android project root (the directory holding `key.properties`)
    pub project: Option<PathBuf>,
    /// Explicit properties file
    pub properties: Option<PathBuf>,
    /// Directory the keystore path is resolved from
    pub base_dir: Option<PathBuf>,
}

impl Settings {
    /// Path to the settings file in `dir`
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(constants::SETTINGS_FILE)
    }

    /// Load settings from `dir`, or defaults if there is no settings file.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the file exists but cannot be read or parsed.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = Self::path_in(dir);
        if !path.exists() {
            debug!(path = %path.display(), "no settings file");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading settings");
        let contents = std::fs::read_to_string(&path).map_err(|source| SettingsError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let mut settings: Self = toml::from_str(&contents)
            .map_err(|source| SettingsError::Parse { path, source })?;

        settings.paths.anchor(dir);
        Ok(settings)
    }
}

impl Paths {
    fn anchor(&mut self, dir: &Path) {
        for path in [&mut self.project, &mut self.properties, &mut self.base_dir]
            .into_iter()
            .flatten()
        {
            *path = dir.join(&*path);
        }
    }
}
