//! Release signing configuration.
//!
//! Loads `key.properties`, checks the four required fields, and resolves the
//! keystore path. The result is either a complete [`SigningDescriptor`] or an
//! error that stops the build.

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::properties::Properties;
use crate::error::{Result, SigningError};

/// A required `key.properties` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    KeyAlias,
    KeyPassword,
    StorePassword,
    StoreFile,
}

impl Field {
    /// All required fields in the order they are checked and reported.
    pub const ALL: [Field; 4] = [
        Field::KeyAlias,
        Field::KeyPassword,
        Field::StorePassword,
        Field::StoreFile,
    ];

    /// Key name as written in the properties file
    pub fn key(&self) -> &'static str {
        match self {
            Self::KeyAlias => "keyAlias",
            Self::KeyPassword => "keyPassword",
            Self::StorePassword => "storePassword",
            Self::StoreFile => "storeFile",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Validated signing credentials and keystore location.
///
/// Every field is non-empty and `store_file` pointed at an existing file when
/// the descriptor was built. Passwords are wiped from memory on drop.
#[derive(Clone)]
pub struct SigningDescriptor {
    key_alias: String,
    key_password: Zeroizing<String>,
    store_password: Zeroizing<String>,
    store_file: PathBuf,
}

impl SigningDescriptor {
    /// Validate parsed properties into a descriptor.
    ///
    /// `source` is the properties file the values came from and only appears
    /// in error messages. A relative `storeFile` is resolved against
    /// `base_dir`; an absolute one is used as-is.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` listing every absent or empty field, or
    /// `KeystoreFileNotFound` if the resolved keystore is not a file.
    pub fn from_properties(props: &Properties, source: &Path, base_dir: &Path) -> Result<Self> {
        let missing: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| props.get(field.key()).map_or(true, str::is_empty))
            .collect();

        if !missing.is_empty() {
            return Err(SigningError::MissingField {
                path: source.to_path_buf(),
                fields: missing,
            }
            .into());
        }

        // Presence checked above.
        let value = |field: Field| props.get(field.key()).unwrap_or_default();

        let store_file = resolve_store_file(value(Field::StoreFile), base_dir);
        debug!(path = %store_file.display(), "resolved keystore");

        if !store_file.is_file() {
            return Err(SigningError::KeystoreFileNotFound { path: store_file }.into());
        }

        Ok(Self {
            key_alias: value(Field::KeyAlias).to_string(),
            key_password: Zeroizing::new(value(Field::KeyPassword).to_string()),
            store_password: Zeroizing::new(value(Field::StorePassword).to_string()),
            store_file,
        })
    }

    /// Signing key alias
    pub fn key_alias(&self) -> &str {
        &self.key_alias
    }

    /// Password for the signing key
    pub fn key_password(&self) -> &str {
        &self.key_password
    }

    /// Password for the keystore
    pub fn store_password(&self) -> &str {
        &self.store_password
    }

    /// Resolved keystore path
    pub fn store_file(&self) -> &Path {
        &self.store_file
    }
}

impl PartialEq for SigningDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.key_alias == other.key_alias
            && self.key_password.as_str() == other.key_password.as_str()
            && self.store_password.as_str() == other.store_password.as_str()
            && self.store_file == other.store_file
    }
}

impl Eq for SigningDescriptor {}

impl fmt::Debug for SigningDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningDescriptor")
            .field("key_alias", &self.key_alias)
            .field("key_password", &"<redacted>")
            .field("store_password", &"<redacted>")
            .field("store_file", &self.store_file)
            .finish()
    }
}

/// Load and validate the signing configuration.
///
/// Checks, in order: the properties file exists, it parses, all four fields
/// are present and non-empty, and the keystore exists under `base_dir`.
/// Only reads the filesystem.
///
/// # Errors
///
/// Returns the first failing check as a [`SigningError`].
pub fn load_signing_config(
    properties_path: impl AsRef<Path>,
    base_dir: impl AsRef<Path>,
) -> Result<SigningDescriptor> {
    let properties_path = properties_path.as_ref();
    let base_dir = base_dir.as_ref();

    let props = Properties::load(properties_path)?;
    let descriptor = SigningDescriptor::from_properties(&props, properties_path, base_dir)?;

    debug!(alias = %descriptor.key_alias(), "signing config loaded");
    Ok(descriptor)
}

fn resolve_store_file(value: &str, base_dir: &Path) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
