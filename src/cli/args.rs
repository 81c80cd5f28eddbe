//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::registry::DEFAULT_REGISTRY_URL;

/// Ruby implementations listed in `USE_RUBY` unless overridden.
pub const DEFAULT_RUBY_TARGETS: &str = "ruby20 ruby21 ruby22 ruby23";

/// ruby-ebuildgen - Generate ebuild prototypes for rubygems.
///
/// `--version` selects the gem version, so there is no version flag for
/// the tool itself.
#[derive(Debug, Clone, Parser)]
#[command(name = "ruby-ebuildgen")]
#[command(author, about, long_about = None)]
pub struct Cli {
    /// Package name
    #[arg(short, long)]
    pub package: String,

    /// Package version (defaults to the latest release)
    #[arg(short, long)]
    pub version: Option<String>,

    /// Ruby targets to be included in USE_RUBY
    #[arg(short, long, default_value = DEFAULT_RUBY_TARGETS)]
    pub targets: String,

    /// Write to stdout instead of creating a file
    #[arg(short = 'o', long = "stdout")]
    pub stdout: bool,

    /// Registry API root
    #[arg(long, default_value = DEFAULT_REGISTRY_URL)]
    pub registry_url: String,

    /// Ebuild template to use instead of the built-in one
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
