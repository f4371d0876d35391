//! Core library components.
//!
//! Properties parsing, signing config validation, and project layout
//! resolution. Nothing here writes to disk.

pub mod constants;
pub mod keystore;
pub mod layout;
pub mod properties;
pub mod settings;
pub mod signing;
