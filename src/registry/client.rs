//! HTTP client for the gem registry API.
//!
//! Three read-only endpoints are used, all relative to the base URL:
//!
//! - `versions/<name>.json` - every published version
//! - `versions/<name>/latest.json` - the newest version
//! - `search.json?query=<name>` - one page of search results
//!
//! Each call is attempted once. Any non-success status is fatal.

use serde::de::DeserializeOwned;
use tracing::debug;

use super::records::{LatestRecord, SearchRecord, VersionRecord};
use crate::error::{EbuildgenError, Result};

/// Default registry API root.
pub const DEFAULT_REGISTRY_URL: &str = "https://rubygems.org/api/v1";

/// Fetches package records from the registry.
///
/// # Example
///
/// ```no_run
/// use ruby_ebuildgen::registry::RegistryClient;
///
/// let client = RegistryClient::new("https://rubygems.org/api/v1").unwrap();
/// let (search, version) = client.lookup("rack", None).unwrap();
/// assert_eq!(search.name, "rack");
/// assert!(version.version.is_some());
/// ```
pub struct RegistryClient {
    /// API root without a trailing slash.
    base_url: String,
    /// HTTP client.
    client: reqwest::blocking::Client,
}

impl RegistryClient {
    /// Create a client for the registry rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("ruby-ebuildgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| EbuildgenError::Transport {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Get the API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every published version of `package`.
    pub fn fetch_versions(&self, package: &str) -> Result<Vec<VersionRecord>> {
        let url = format!("{}/versions/{}.json", self.base_url, package);
        self.get_json(package, &url, &[])
    }

    /// Fetch the newest version string of `package`.
    pub fn fetch_latest(&self, package: &str) -> Result<String> {
        let url = format!("{}/versions/{}/latest.json", self.base_url, package);
        let latest: LatestRecord = self.get_json(package, &url, &[])?;
        latest.version.ok_or_else(|| EbuildgenError::MissingField {
            field: "version".to_string(),
        })
    }

    /// Fetch the search results for `package`.
    pub fn search(&self, package: &str) -> Result<Vec<SearchRecord>> {
        let url = format!("{}/search.json", self.base_url);
        self.get_json(package, &url, &[("query", package)])
    }

    /// Resolve the search entry and version entry for `package`.
    ///
    /// When `version` is `None` the registry's latest version is used.
    pub fn lookup(
        &self,
        package: &str,
        version: Option<&str>,
    ) -> Result<(SearchRecord, VersionRecord)> {
        let versions = self.fetch_versions(package)?;

        let target = match version {
            Some(v) => v.to_string(),
            None => self.fetch_latest(package)?,
        };
        debug!("Resolved {} to version {}", package, target);

        let search = find_search_entry(self.search(package)?, package)?;
        let version = find_version_entry(versions, package, &target)?;

        Ok((search, version))
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        package: &str,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|source| EbuildgenError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EbuildgenError::HttpStatus {
                package: package.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().map_err(|source| {
            let url = url.to_string();
            if source.is_decode() {
                EbuildgenError::Decode { url, source }
            } else {
                EbuildgenError::Transport { url, source }
            }
        })
    }
}

/// Pick the search result whose name is exactly `package`.
pub fn find_search_entry(results: Vec<SearchRecord>, package: &str) -> Result<SearchRecord> {
    results
        .into_iter()
        .find(|entry| entry.name == package)
        .ok_or_else(|| EbuildgenError::NotInSearch {
            package: package.to_string(),
        })
}

/// Pick the version listing entry whose version is exactly `target`.
pub fn find_version_entry(
    versions: Vec<VersionRecord>,
    package: &str,
    target: &str,
) -> Result<VersionRecord> {
    versions
        .into_iter()
        .find(|entry| entry.version.as_deref() == Some(target))
        .ok_or_else(|| EbuildgenError::NotInVersions {
            package: package.to_string(),
            version: target.to_string(),
        })
}
