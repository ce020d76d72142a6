use anyhow::{Context, Result};
use log::{debug, warn};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions recognized as serialized model files.
pub const MODEL_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Scanner collecting model files from input locations.
///
/// Each input is either a model file or a directory walked recursively. Hidden
/// directories (starting with `.`) and `target` are skipped. A file reached
/// through more than one input is listed once, at its first position.
///
/// # Example
///
/// ```no_run
/// use jersey_doc::scanner::ModelScanner;
/// use std::path::PathBuf;
///
/// let scanner = ModelScanner::new(vec![PathBuf::from("./model")]);
/// let result = scanner.scan().unwrap();
/// println!("Found {} model files", result.model_files.len());
/// ```
pub struct ModelScanner {
    inputs: Vec<PathBuf>,
}

/// Result of a scan.
pub struct ScanResult {
    /// Model files in a stable order: inputs in the order given, directory
    /// contents sorted by path
    pub model_files: Vec<PathBuf>,
    /// Warning messages for skipped inputs and entries that could not be accessed
    pub warnings: Vec<String>,
}

impl ModelScanner {
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self { inputs }
    }

    /// Collects every model file reachable from the inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if an input does not exist.
    pub fn scan(&self) -> Result<ScanResult> {
        let mut model_files = Vec::new();
        let mut warnings = Vec::new();

        for input in &self.inputs {
            let metadata = input
                .metadata()
                .with_context(|| format!("Failed to access input: {}", input.display()))?;

            if metadata.is_file() {
                if is_model_file(input) {
                    model_files.push(input.clone());
                } else {
                    let warning = format!("Skipping input with unknown model format: {}", input.display());
                    warn!("{}", warning);
                    warnings.push(warning);
                }
                continue;
            }

            self.scan_dir(input, &mut model_files, &mut warnings);
        }

        Ok(ScanResult {
            model_files: dedup_paths(model_files),
            warnings,
        })
    }

    fn scan_dir(&self, root: &Path, model_files: &mut Vec<PathBuf>, warnings: &mut Vec<String>) {
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                if e.path() == root {
                    return true;
                }

                let file_name = e.file_name().to_string_lossy();
                !file_name.starts_with('.') && file_name != "target"
            });

        for entry in walker {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && is_model_file(path) {
                        model_files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }
    }
}

/// Drops files already listed, comparing canonical paths so `model/api.json`
/// and `model/./api.json` count as one.
fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|path| {
            let key = fs::canonicalize(path).unwrap_or_else(|_| path.clone());
            let first = seen.insert(key);
            if !first {
                debug!("Skipping duplicate model file: {}", path.display());
            }
            first
        })
        .collect()
}

fn is_model_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| MODEL_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn file_names(result: &ScanResult) -> Vec<String> {
        result
            .model_files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_scan_collects_model_files_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir(root.join("api")).unwrap();
        fs::write(root.join("b.yaml"), "types: []").unwrap();
        fs::write(root.join("a.json"), "[]").unwrap();
        fs::write(root.join("api/c.yml"), "[]").unwrap();
        fs::write(root.join("readme.md"), "# README").unwrap();

        let result = ModelScanner::new(vec![root.to_path_buf()]).scan().unwrap();

        // Directories are descended in name order, so api/c.yml sits between a and b
        assert_eq!(file_names(&result), vec!["a.json", "c.yml", "b.yaml"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_scan_skips_hidden_and_target() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir(root.join(".cache")).unwrap();
        fs::create_dir(root.join("target")).unwrap();
        fs::write(root.join(".cache/model.json"), "[]").unwrap();
        fs::write(root.join("target/model.json"), "[]").unwrap();
        fs::write(root.join("model.json"), "[]").unwrap();

        let result = ModelScanner::new(vec![root.to_path_buf()]).scan().unwrap();
        assert_eq!(file_names(&result), vec!["model.json"]);
    }

    #[test]
    fn test_scan_accepts_explicit_model_files() {
        let temp_dir = TempDir::new().unwrap();
        let model = temp_dir.path().join("model.yml");
        let notes = temp_dir.path().join("notes.txt");
        fs::write(&model, "[]").unwrap();
        fs::write(&notes, "[]").unwrap();

        let result = ModelScanner::new(vec![notes, model.clone()]).scan().unwrap();
        assert_eq!(result.model_files, vec![model]);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("notes.txt"));
    }

    #[test]
    fn test_scan_lists_overlapping_inputs_once() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.json"), "[]").unwrap();
        fs::write(root.join("b.json"), "[]").unwrap();

        let result = ModelScanner::new(vec![
            root.join("b.json"),
            root.to_path_buf(),
            root.join(".").join("a.json"),
        ])
        .scan()
        .unwrap();

        assert_eq!(file_names(&result), vec!["b.json", "a.json"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_scan_missing_input() {
        let result = ModelScanner::new(vec![PathBuf::from("/nonexistent/model")]).scan();
        assert!(result.is_err());
        assert!(result.err().unwrap().to_string().contains("Failed to access input"));
    }
}
