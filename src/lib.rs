//! keyprops - fail-fast loader for Android release signing configuration.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── check         # Validate and exit
//! │   ├── show          # Print the validated descriptor
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal styling helpers
//! └── core/             # Core library components
//!     ├── properties    # key.properties parser
//!     ├── signing       # SigningDescriptor and load_signing_config
//!     ├── layout        # Android project path resolution
//!     ├── settings      # .keyprops.toml
//!     └── keystore      # Keystore format detection and fingerprint
//! ```
//!
//! # Example
//!
//! ```no_run
//! let descriptor = keyprops::load_signing_config("android/key.properties", "android/app")?;
//! println!("signing with alias {}", descriptor.key_alias());
//! # Ok::<(), keyprops::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::layout::Layout;
pub use crate::core::properties::Properties;
pub use crate::core::signing::{load_signing_config, Field, SigningDescriptor};
