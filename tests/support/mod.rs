//! Test support utilities for keyprops integration tests.
//!
//! Provides an isolated Android project layout and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment rooted in a temporary Flutter-style project.
///
/// The project has an `android/` directory with an `app/` module. Child
/// processes use `.current_dir()` so tests can run in parallel.
pub struct Test {
    /// Temporary project directory (the Flutter root)
    pub dir: TempDir,
}

impl Test {
    /// Create an empty project with `android/app/`.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("android").join("app"))
            .expect("failed to create android/app");
        Self { dir }
    }

    /// Create a project with a complete `key.properties` and keystore.
    pub fn valid() -> Self {
        let t = Self::new();
        t.write_properties(VALID_PROPERTIES);
        t.write_keystore("release.jks", JKS_BYTES);
        t
    }

    /// `android/` directory
    pub fn android(&self) -> PathBuf {
        self.dir.path().join("android")
    }

    /// `android/app/` directory
    pub fn app(&self) -> PathBuf {
        self.android().join("app")
    }

    /// `android/key.properties`
    pub fn properties_path(&self) -> PathBuf {
        self.android().join("key.properties")
    }

    /// Write `android/key.properties`.
    pub fn write_properties(&self, content: &str) {
        std::fs::write(self.properties_path(), content).expect("failed to write key.properties");
    }

    /// Write a keystore file relative to `android/app/`.
    pub fn write_keystore(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.app().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create keystore dir");
        }
        std::fs::write(&path, bytes).expect("failed to write keystore");
        path
    }
}
