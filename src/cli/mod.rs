//! Command-line interface.

pub mod check;
pub mod completions;
pub mod output;
pub mod show;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::layout::{Layout, Overrides};
use crate::core::settings::Settings;
use crate::error::Result;

/// keyprops - validate Android release signing configuration.
#[derive(Parser)]
#[command(
    name = "keyprops",
    about = "Validate Android release signing configuration before packaging",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Validate key.properties and the keystore it names
    Check {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Print the validated signing configuration
    Show {
        #[command(flatten)]
        paths: PathArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Print passwords instead of masking them
        #[arg(long)]
        reveal: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Path options shared by `check` and `show`.
#[derive(Args, Debug, Default, Clone)]
pub struct PathArgs {
    /// Android (or Flutter) project directory
    #[arg(long, env = "KEYPROPS_PROJECT")]
    pub project: Option<PathBuf>,

    /// Path to key.properties
    #[arg(long, env = "KEYPROPS_PROPERTIES")]
    pub properties: Option<PathBuf>,

    /// Directory storeFile is resolved from
    #[arg(long, env = "KEYPROPS_BASE_DIR")]
    pub base_dir: Option<PathBuf>,
}

impl PathArgs {
    /// Resolve the layout from these flags, `.keyprops.toml`, and discovery
    /// from the working directory.
    pub fn layout(&self) -> Result<Layout> {
        let cwd = std::env::current_dir()?;
        let settings = Settings::load_from(&cwd)?;
        let overrides = Overrides {
            project: self.project.clone(),
            properties: self.properties.clone(),
            base_dir: self.base_dir.clone(),
        };
        Ok(Layout::resolve(&cwd, &overrides, &settings))
    }
}

/// Execute a command.
pub fn execute(command: Command) -> Result<()> {
    use Command::*;

    match command {
        Check { paths } => check::execute(&paths),
        Show {
            paths,
            json,
            reveal,
        } => show::execute(&paths, json, reveal),
        Completions { shell } => completions::execute(shell),
    }
}
