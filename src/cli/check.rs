//! Check command.
//!
//! Validates the signing configuration and exits. Meant to run in CI or a
//! build script right before the release packaging step.

use crate::cli::output;
use crate::cli::PathArgs;
use crate::core::signing::load_signing_config;
use crate::error::Result;

/// Validate key.properties and its keystore.
pub fn execute(paths: &PathArgs) -> Result<()> {
    let layout = paths.layout()?;
    let descriptor = load_signing_config(&layout.properties, &layout.base_dir)?;

    output::success(&format!(
        "signing config valid (alias {}, keystore {})",
        descriptor.key_alias(),
        output::path(descriptor.store_file())
    ));
    Ok(())
}
