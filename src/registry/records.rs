//! Raw registry records.
//!
//! These mirror the JSON the registry returns. Every field the pipeline
//! can live without is an `Option`, so an absent field reads as "no value"
//! instead of failing deserialization. Unknown fields are ignored.

use serde::Deserialize;

/// One entry from the "all versions" listing of a package.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VersionRecord {
    /// Version string (the live API calls this `number`)
    #[serde(alias = "number")]
    pub version: Option<String>,

    /// Declared licenses; the registry may send `null` entries
    pub licenses: Option<Vec<Option<String>>>,

    /// Long description
    pub description: Option<String>,

    /// Project homepage
    pub homepage_uri: Option<String>,

    /// Registry project page
    pub project_uri: Option<String>,

    /// Source repository
    pub source_code_uri: Option<String>,

    /// Runtime and development dependencies
    #[serde(default)]
    pub dependencies: Dependencies,
}

/// The entry for a package in the registry's search results.
///
/// Homepage URIs are taken from the version record, so they are not read here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchRecord {
    /// Package name
    pub name: String,

    /// Declared licenses; the registry may send `null` entries
    pub licenses: Option<Vec<Option<String>>>,

    /// Long description (the live API calls this `info`)
    #[serde(alias = "info")]
    pub description: Option<String>,

    /// One-line summary
    pub summary: Option<String>,
}

/// The "latest version" resource of a package.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LatestRecord {
    /// Latest published version
    pub version: Option<String>,
}

/// Dependency lists, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Dependencies {
    /// Needed when the package runs
    #[serde(default)]
    pub runtime: Vec<Dependency>,

    /// Needed to build and test the package
    #[serde(default)]
    pub development: Vec<Dependency>,
}

/// A single dependency on another package.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dependency {
    /// Name of the depended-on package
    pub name: String,

    /// Comma-separated requirements, e.g. `"~> 1.2, >= 1.2.3"`
    #[serde(default)]
    pub requirements: String,
}

impl Dependency {
    /// Create a dependency from a name and its requirement string.
    pub fn new(name: impl Into<String>, requirements: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirements: requirements.into(),
        }
    }

    /// Iterate over the individual requirements, skipping empty pieces.
    pub fn requirements(&self) -> impl Iterator<Item = &str> {
        self.requirements
            .split(',')
            .map(str::trim)
            .filter(|req| !req.is_empty())
    }
}
