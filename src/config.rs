use crate::error::{GeneratorError, Result};
use log::debug;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the generated document inside the output directory.
pub const DOC_FILE_NAME: &str = "jersey.doc";

/// Settings for one documentation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory receiving [`DOC_FILE_NAME`]
    pub output_dir: PathBuf,
    /// Fully-qualified names of types never documented
    pub excludes: BTreeSet<String>,
}

impl GeneratorConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            excludes: BTreeSet::new(),
        }
    }

    /// Adds fully-qualified names to the exclusion set.
    pub fn with_excludes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds the names listed in an exclusion file.
    ///
    /// One fully-qualified name per line. Blank lines and lines starting with `#`
    /// are ignored.
    pub fn with_exclude_file(self, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GeneratorError::io(path, e))?;
        let names = parse_exclusions(&content);
        debug!("Loaded {} exclusions from {}", names.len(), path.display());
        Ok(self.with_excludes(names))
    }

    pub fn is_excluded(&self, full_name: &str) -> bool {
        self.excludes.contains(full_name)
    }

    /// Path of the document this configuration writes to.
    pub fn doc_path(&self) -> PathBuf {
        self.output_dir.join(DOC_FILE_NAME)
    }
}

fn parse_exclusions(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
