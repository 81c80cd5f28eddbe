//! The generate command.
//!
//! Runs the whole pipeline once: registry lookup, normalization, rendering.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Datelike;
use tracing::debug;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::metadata::normalize;
use crate::registry::RegistryClient;
use crate::render::{default_template, load_template, Recipe};

/// The generate command implementation.
pub struct GenerateCommand {
    args: Cli,
    output_dir: PathBuf,
}

impl GenerateCommand {
    /// Create a command that writes ebuilds into `output_dir`.
    pub fn new(args: Cli, output_dir: &Path) -> Self {
        Self {
            args,
            output_dir: output_dir.to_path_buf(),
        }
    }

    /// Execute the command.
    ///
    /// With `-o` the ebuild goes to `out` and no file is created.
    /// Otherwise the file is written and `out` is left untouched.
    ///
    /// Returns the path of the written file, if any.
    pub fn execute(&self, out: &mut dyn Write) -> Result<Option<PathBuf>> {
        let client = RegistryClient::new(&self.args.registry_url)?;
        let (search, version) = client.lookup(&self.args.package, self.args.version.as_deref())?;

        let year = chrono::Local::now().year();
        let metadata = normalize(&search, &version, &self.args.targets, year)?;

        let template = match &self.args.template {
            Some(path) => load_template(path)
                .with_context(|| format!("Failed to read template {}", path.display()))?,
            None => default_template()?.to_string(),
        };
        let recipe = Recipe::new(&template, &metadata);

        if self.args.stdout {
            let rendered = recipe.render()?;
            out.write_all(rendered.as_bytes())?;
            out.flush()?;
            debug!("Printed {}", recipe.file_name());
            return Ok(None);
        }

        let path = recipe.write_to(&self.output_dir)?;
        Ok(Some(path))
    }
}
