//! Merging raw registry records into recipe metadata.

use serde::Serialize;
use tracing::debug;

use super::deps::{bdepend_clause, rdepend_clause};
use crate::error::{EbuildgenError, Result};
use crate::registry::{SearchRecord, VersionRecord};

/// Everything the recipe template is rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalMetadata {
    /// Package name
    pub name: String,
    /// Resolved package version
    pub version: String,
    /// Space-separated, deduplicated licenses
    pub licenses: String,
    /// Package description
    pub description: String,
    /// Space-separated, deduplicated URIs
    pub homepage: String,
    /// `ruby_add_rdepend "..."` or empty
    pub runtime_dependency_clause: String,
    /// `ruby_add_bdepend "..."` or empty
    pub build_dependency_clause: String,
    /// Value for `USE_RUBY`
    pub ruby_targets: String,
    /// Copyright year
    pub year: i32,
}

impl CanonicalMetadata {
    /// Look up a template variable by name.
    pub fn resolve(&self, variable: &str) -> Option<String> {
        let value = match variable {
            "name" => self.name.clone(),
            "version" => self.version.clone(),
            "licenses" => self.licenses.clone(),
            "description" => self.description.clone(),
            "homepage" => self.homepage.clone(),
            "rdepend" => self.runtime_dependency_clause.clone(),
            "bdepend" => self.build_dependency_clause.clone(),
            "ruby_targets" => self.ruby_targets.clone(),
            "year" => self.year.to_string(),
            _ => return None,
        };
        Some(value)
    }
}

/// Append the non-empty values of `items` to `set`, keeping first-seen order.
fn extend_unique<'a>(set: &mut Vec<String>, items: impl IntoIterator<Item = Option<&'a str>>) {
    for item in items.into_iter().flatten() {
        if !item.is_empty() && !set.iter().any(|existing| existing == item) {
            set.push(item.to_string());
        }
    }
}

fn licenses_of(licenses: &Option<Vec<Option<String>>>) -> impl Iterator<Item = Option<&str>> {
    licenses.iter().flatten().map(|license| license.as_deref())
}

/// Pick the description.
///
/// The version record's description replaces whatever the search record
/// offered, and the summary only fills in when nothing else did.
fn select_description(search: &SearchRecord, version: &VersionRecord) -> String {
    let mut description = search.description.clone().unwrap_or_default();

    if description.is_empty() {
        if let Some(summary) = &search.summary {
            description = summary.clone();
        }
    }
    if let Some(long) = &version.description {
        description = long.clone();
    }
    if description.is_empty() {
        if let Some(summary) = &search.summary {
            description = summary.clone();
        }
    }

    description
}

/// Merge the search and version records into recipe metadata.
///
/// # Errors
///
/// Returns `MissingField` when the version record carries no version, and
/// `MalformedRequirement` when a dependency cannot be translated.
pub fn normalize(
    search: &SearchRecord,
    version: &VersionRecord,
    ruby_targets: &str,
    year: i32,
) -> Result<CanonicalMetadata> {
    let resolved = version
        .version
        .clone()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| EbuildgenError::MissingField {
            field: "version".to_string(),
        })?;

    let mut licenses = Vec::new();
    extend_unique(&mut licenses, licenses_of(&search.licenses));
    extend_unique(&mut licenses, licenses_of(&version.licenses));

    let mut homepage = Vec::new();
    extend_unique(
        &mut homepage,
        [
            version.homepage_uri.as_deref(),
            version.project_uri.as_deref(),
            version.source_code_uri.as_deref(),
        ],
    );

    let metadata = CanonicalMetadata {
        name: search.name.clone(),
        version: resolved,
        licenses: licenses.join(" "),
        description: select_description(search, version),
        homepage: homepage.join(" "),
        runtime_dependency_clause: rdepend_clause(&version.dependencies.runtime)?,
        build_dependency_clause: bdepend_clause(&version.dependencies.development)?,
        ruby_targets: ruby_targets.to_string(),
        year,
    };
    debug!("Normalized metadata: {:?}", metadata);

    Ok(metadata)
}
