//! Error types for ebuild generation.
//!
//! This module defines [`EbuildgenError`], the error type used throughout
//! the pipeline, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure is terminal: the binary reports it and exits non-zero
//! - Use `EbuildgenError` for conditions the user can act on
//! - Use `anyhow::Error` (via `EbuildgenError::Other`) for annotated I/O at the CLI layer

use thiserror::Error;

/// Core error type for ebuild generation.
#[derive(Debug, Error)]
pub enum EbuildgenError {
    /// The registry answered with a non-success status.
    #[error("Could not find requested package {package} on the registry, HTTP Status: {status}")]
    HttpStatus { package: String, status: u16 },

    /// The request never produced a response.
    #[error("Failed to fetch {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape we expect.
    #[error("Failed to decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// No search result carried the requested name.
    #[error("{package} not found in API search response")]
    NotInSearch { package: String },

    /// The version listing has no entry for the resolved version.
    #[error("{package} not found in API all response")]
    NotInVersions { package: String, version: String },

    /// A field the recipe cannot do without is absent.
    #[error("No {field} given")]
    MissingField { field: String },

    /// A dependency requirement is not of the form `<operator> <version>`.
    #[error("Malformed requirement '{requirement}' for dependency '{dependency}': {reason}")]
    MalformedRequirement {
        dependency: String,
        requirement: String,
        reason: String,
    },

    /// The template references a variable the metadata does not provide.
    #[error("Unknown template variable: {name}")]
    UnknownVariable { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ebuild generation.
pub type Result<T> = std::result::Result<T, EbuildgenError>;
