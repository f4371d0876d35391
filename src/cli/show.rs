//! Show command.
//!
//! Prints the validated descriptor, either as a table or as JSON for other
//! build tooling. Passwords are masked unless `--reveal` is given.

use serde::Serialize;

use crate::cli::output;
use crate::cli::PathArgs;
use crate::core::constants::MASK;
use crate::core::keystore::KeystoreInfo;
use crate::core::signing::{load_signing_config, SigningDescriptor};
use crate::error::Result;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DescriptorView<'a> {
    key_alias: &'a str,
    key_password: &'a str,
    store_password: &'a str,
    store_file: String,
    keystore: KeystoreInfo,
}

impl<'a> DescriptorView<'a> {
    fn new(descriptor: &'a SigningDescriptor, keystore: KeystoreInfo, reveal: bool) -> Self {
        let secret = |value: &'a str| if reveal { value } else { MASK };
        Self {
            key_alias: descriptor.key_alias(),
            key_password: secret(descriptor.key_password()),
            store_password: secret(descriptor.store_password()),
            store_file: descriptor.store_file().display().to_string(),
            keystore,
        }
    }
}

/// Print the signing configuration.
pub fn execute(paths: &PathArgs, json: bool, reveal: bool) -> Result<()> {
    let layout = paths.layout()?;
    let descriptor = load_signing_config(&layout.properties, &layout.base_dir)?;
    let keystore = KeystoreInfo::inspect(descriptor.store_file())?;
    let view = DescriptorView::new(&descriptor, keystore, reveal);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    output::header("Signing config");
    output::kv("properties", output::path(&layout.properties));
    output::kv("keyAlias", view.key_alias);
    output::kv("keyPassword", view.key_password);
    output::kv("storePassword", view.store_password);
    output::kv("storeFile", output::path(descriptor.store_file()));
    output::kv("format", view.keystore.format);
    output::kv("sha256", &view.keystore.sha256);
    output::kv("size", format!("{} bytes", view.keystore.size));

    Ok(())
}
