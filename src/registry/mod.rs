//! Gem registry access.
//!
//! This module fetches the raw records a recipe is built from:
//! - The "all versions" listing, scanned for the requested version
//! - The "latest version" resource, when no version was requested
//! - The search results, scanned for the exact package name
//!
//! # Example
//!
//! ```no_run
//! use ruby_ebuildgen::registry::{RegistryClient, DEFAULT_REGISTRY_URL};
//!
//! let client = RegistryClient::new(DEFAULT_REGISTRY_URL).unwrap();
//! let (search, version) = client.lookup("rack", Some("3.0.0")).unwrap();
//! println!("{} {:?}", search.name, version.version);
//! ```

pub mod client;
pub mod records;

// Re-exports
pub use client::{find_search_entry, find_version_entry, RegistryClient, DEFAULT_REGISTRY_URL};
pub use records::{Dependencies, Dependency, LatestRecord, SearchRecord, VersionRecord};
