//! Documentation generator driving the traversal of the type model.

use crate::config::GeneratorConfig;
use crate::emitter::{write_json_body, write_signature};
use crate::error::{GeneratorError, Result};
use crate::markers;
use crate::model::{TypeEntry, TypeModel};
use log::{debug, info};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};

const HEADER_BAR: &str = "******************************";

/// Writes the REST documentation of every resource type in a model.
pub struct DocGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> DocGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Appends the documentation of `model` to the configured document file.
    ///
    /// The output directory is created if needed and the file is opened in append
    /// mode. The file is closed on every exit path, but after an error its
    /// contents are incomplete and should be discarded.
    ///
    /// # Returns
    ///
    /// The documented types, in model order.
    ///
    /// # Errors
    ///
    /// Fails on the first I/O error or model inconsistency; no later type is
    /// processed.
    pub fn generate<'m>(&self, model: &'m TypeModel) -> Result<Vec<&'m TypeEntry>> {
        let path = self.config.doc_path();
        debug!("Writing documentation to {}", path.display());

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| GeneratorError::io(&self.config.output_dir, e))?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| GeneratorError::io(&path, e))?;
        let mut writer = BufWriter::new(file);

        let documented = self
            .render(model, &mut writer)
            .and_then(|documented| {
                writer.flush()?;
                Ok(documented)
            })
            .map_err(|e| match e {
                GeneratorError::Write(source) => GeneratorError::io(&path, source),
                other => other,
            })?;

        info!(
            "Documented {} of {} types in {}",
            documented.len(),
            model.len(),
            path.display()
        );
        Ok(documented)
    }

    /// Renders the documentation of `model` into any writer.
    pub fn render<'m, W: Write>(
        &self,
        model: &'m TypeModel,
        w: &mut W,
    ) -> Result<Vec<&'m TypeEntry>> {
        let mut documented = Vec::new();

        for entry in model.types() {
            if self.config.is_excluded(&entry.full_name) {
                debug!("Skipping excluded type {}", entry.full_name);
                continue;
            }
            if !markers::has_route_marker(&entry.markers) {
                continue;
            }

            self.render_type(entry, model, w)?;
            documented.push(entry);
        }

        Ok(documented)
    }

    fn render_type<W: Write>(&self, entry: &TypeEntry, model: &TypeModel, w: &mut W) -> Result<()> {
        debug!("Documenting resource {}", entry.full_name);
        writeln!(w, "{} {} {}", HEADER_BAR, entry.name, HEADER_BAR)?;

        let path_prefix = markers::route_marker(&entry.markers)
            .and_then(|m| m.value.as_deref())
            .unwrap_or("");

        for method in &entry.methods {
            let Some((verb, _)) = markers::http_verb_marker(&method.markers) else {
                continue;
            };
            debug!("  {} {}.{}", verb, entry.name, method.name);

            write_signature(w, method, path_prefix, verb)?;
            write_json_body(w, method, model, verb)?;
        }

        Ok(())
    }
}
