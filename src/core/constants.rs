//! Constants used throughout keyprops.
//!
//! Centralizes file names and environment variable names.

/// Properties file name, relative to the Android project root.
pub const PROPERTIES_FILE: &str = "key.properties";

/// Android project directory inside a Flutter project.
pub const ANDROID_DIR: &str = "android";

/// App module directory inside the Android project. Keystore paths are
/// resolved from here.
pub const APP_MODULE_DIR: &str = "app";

/// Optional settings file in the working directory.
pub const SETTINGS_FILE: &str = ".keyprops.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "KEYPROPS_LOG";

/// Placeholder printed instead of a password.
pub const MASK: &str = "********";
