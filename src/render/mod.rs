//! Recipe rendering.
//!
//! A [`Recipe`] binds [`CanonicalMetadata`] into an ebuild template and
//! either returns the text or writes `<package>-<version>.ebuild`.
//!
//! The default template is embedded in the binary; a template file on
//! disk can replace it.
//!
//! - [`template`] - `${variable}` interpolation

pub mod template;

use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{include_dir, Dir};
use tracing::info;

use crate::error::{EbuildgenError, Result};
use crate::metadata::CanonicalMetadata;

static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// File name of the embedded ebuild template.
pub const DEFAULT_TEMPLATE: &str = "ruby.ebuild.tpl";

/// Get the embedded ebuild template.
pub fn default_template() -> Result<&'static str> {
    TEMPLATES_DIR
        .get_file(DEFAULT_TEMPLATE)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| {
            EbuildgenError::Other(anyhow::anyhow!(
                "Embedded template {} is missing",
                DEFAULT_TEMPLATE
            ))
        })
}

/// Load a template from disk.
pub fn load_template(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// An ebuild ready to be rendered.
pub struct Recipe<'a> {
    template: &'a str,
    metadata: &'a CanonicalMetadata,
}

impl<'a> Recipe<'a> {
    /// Create a recipe from a template and metadata.
    pub fn new(template: &'a str, metadata: &'a CanonicalMetadata) -> Self {
        Self { template, metadata }
    }

    /// The ebuild file name, `<package>-<version>.ebuild`.
    pub fn file_name(&self) -> String {
        format!("{}-{}.ebuild", self.metadata.name, self.metadata.version)
    }

    /// Render the template.
    pub fn render(&self) -> Result<String> {
        template::resolve_string(self.template, |name| self.metadata.resolve(name))
    }

    /// Render and write the ebuild into `dir`, replacing any existing file.
    ///
    /// Returns the path written.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let rendered = self.render()?;
        let path = dir.join(self.file_name());
        fs::write(&path, rendered)?;
        info!("Wrote {}", path.display());
        Ok(path)
    }
}
