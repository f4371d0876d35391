//! keyprops - validate Android release signing configuration.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keyprops::cli::output;
use keyprops::cli::{execute, Cli};
use keyprops::core::constants::LOG_ENV;
use keyprops::error::{Error, SigningError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keyprops=debug")
        } else {
            EnvFilter::new("keyprops=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

fn suggestion(e: &Error) -> Option<&'static str> {
    match e {
        Error::Signing(SigningError::ConfigNotFound { .. }) => {
            Some("create key.properties in the android project root, or pass --properties")
        }
        Error::Signing(SigningError::ConfigParse { .. }) => {
            Some("backslashes in values must be doubled, e.g. C:\\\\keys\\\\release.jks")
        }
        Error::Signing(SigningError::MissingField { .. }) => {
            Some("required keys: keyAlias, keyPassword, storePassword, storeFile")
        }
        Error::Signing(SigningError::KeystoreFileNotFound { .. }) => {
            Some("storeFile is resolved from the app module dir; pass --base-dir to change it")
        }
        Error::Settings(_) => Some("fix or remove .keyprops.toml"),
        _ => None,
    }
}
