//! Error types for keyprops.
//!
//! Each concern has its own enum; [`Error`] aggregates them so the CLI can
//! match on the variant and attach a hint.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::signing::Field;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while loading the signing configuration.
///
/// All of these stop the build. None are retried or defaulted.
#[derive(Error, Debug)]
pub enum SigningError {
    #[error("key.properties not found at {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {} (line {line}): {reason}", path.display())]
    ConfigParse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("missing {} in {}", FieldList(fields), path.display())]
    MissingField { path: PathBuf, fields: Vec<Field> },

    #[error("keystore file not found at: {}", path.display())]
    KeystoreFileNotFound { path: PathBuf },
}

/// Failures reading `.keyprops.toml`.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

struct FieldList<'a>(&'a [Field]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(field.key())?;
        }
        Ok(())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
