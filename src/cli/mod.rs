//! Command-line interface for ruby-ebuildgen.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`generate`] - The fetch, normalize and render pipeline

pub mod args;
pub mod generate;

pub use args::{Cli, DEFAULT_RUBY_TARGETS};
pub use generate::GenerateCommand;
