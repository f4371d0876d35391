//! Android project layout.
//!
//! `key.properties` sits at the Android project root while the keystore path
//! inside it is relative to the `app` module. This module works out both
//! paths from a project directory plus any explicit overrides.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::settings::Settings;

/// Where to read `key.properties` and what to resolve `storeFile` against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub properties: PathBuf,
    pub base_dir: PathBuf,
}

/// Explicit paths from the command line or environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub project: Option<PathBuf>,
    pub properties: Option<PathBuf>,
    pub base_dir: Option<PathBuf>,
}

impl Layout {
    /// Standard layout for an Android project root.
    pub fn android(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            properties: root.join(constants::PROPERTIES_FILE),
            base_dir: root.join(constants::APP_MODULE_DIR),
        }
    }

    /// Layout for `dir`, which may be a Flutter project (with an `android/`
    /// child) or the Android project itself.
    pub fn discover(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let android = dir.join(constants::ANDROID_DIR);
        if android.is_dir() {
            Self::android(android)
        } else {
            Self::android(dir)
        }
    }

    /// Combine overrides, settings, and discovery.
    ///
    /// Each path is taken from the first source that sets it: overrides,
    /// then settings, then the layout discovered from the project directory.
    /// Relative overrides are resolved from `cwd`.
    pub fn resolve(cwd: &Path, overrides: &Overrides, settings: &Settings) -> Self {
        let from_cwd = |p: &PathBuf| cwd.join(p);

        let project = overrides
            .project
            .as_ref()
            .map(from_cwd)
            .or_else(|| settings.paths.project.clone())
            .unwrap_or_else(|| cwd.to_path_buf());
        let discovered = Self::discover(&project);

        let layout = Self {
            properties: overrides
                .properties
                .as_ref()
                .map(from_cwd)
                .or_else(|| settings.paths.properties.clone())
                .unwrap_or(discovered.properties),
            base_dir: overrides
                .base_dir
                .as_ref()
                .map(from_cwd)
                .or_else(|| settings.paths.base_dir.clone())
                .unwrap_or(discovered.base_dir),
        };

        debug!(
            properties = %layout.properties.display(),
            base_dir = %layout.base_dir.display(),
            "resolved layout"
        );
        layout
    }
}
