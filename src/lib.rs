//! ruby-ebuildgen - Generate Gentoo ebuild prototypes for rubygems.
//!
//! The tool looks a gem up on the registry, merges what it finds into one
//! metadata record and renders that record into a `ruby-fakegem` ebuild.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the generate pipeline
//! - [`error`] - Error types and result aliases
//! - [`metadata`] - Record merging and dependency translation
//! - [`registry`] - Registry API client and raw records
//! - [`render`] - Template interpolation and ebuild output
//!
//! # Example
//!
//! ```
//! use ruby_ebuildgen::metadata::{translate_requirement, Requirement};
//!
//! let req = Requirement::parse("rack", "~> 2.2.4").unwrap();
//! let atoms = translate_requirement("rack", &req).unwrap();
//! assert_eq!(atoms, vec![">=dev-ruby/rack-2.2.4", "<dev-ruby/rack-2.3"]);
//! ```
//!
//! For the full pipeline against a mock registry, see the integration tests.

pub mod cli;
pub mod error;
pub mod metadata;
pub mod registry;
pub mod render;

pub use error::{EbuildgenError, Result};
