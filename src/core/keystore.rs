//! Keystore file inspection.
//!
//! Identifies the container format from the leading magic bytes and
//! fingerprints the file. The keystore is never opened with its password.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;

use crate::error::Result;

const JKS_MAGIC: [u8; 4] = [0xFE, 0xED, 0xFE, 0xED];
const JCEKS_MAGIC: [u8; 4] = [0xCE, 0xCE, 0xCE, 0xCE];
const DER_SEQUENCE: u8 = 0x30;

/// Keystore container format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeystoreFormat {
    Jks,
    Jceks,
    Pkcs12,
    Unknown,
}

impl KeystoreFormat {
    /// Classify from the first bytes of the file
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(&JKS_MAGIC) {
            Self::Jks
        } else if bytes.starts_with(&JCEKS_MAGIC) {
            Self::Jceks
        } else if bytes.first() == Some(&DER_SEQUENCE) {
            Self::Pkcs12
        } else {
            Self::Unknown
        }
    }

    /// Display name for user-facing messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Jks => "JKS",
            Self::Jceks => "JCEKS",
            Self::Pkcs12 => "PKCS#12",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for KeystoreFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Summary of a keystore file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeystoreInfo {
    pub format: KeystoreFormat,
    /// Lowercase hex SHA-256 of the file contents
    pub sha256: String,
    /// Size in bytes
    pub size: u64,
}

impl KeystoreInfo {
    /// Read the keystore and summarize it.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn inspect(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Summarize keystore contents already in memory
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let digest = Sha256::digest(bytes);
        let sha256 = digest.iter().map(|b| format!("{:02x}", b)).collect();

        Self {
            format: KeystoreFormat::detect(bytes),
            sha256,
            size: bytes.len() as u64,
        }
    }
}
