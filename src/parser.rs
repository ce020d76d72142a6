use crate::error::{GeneratorError, Result};
use crate::model::{TypeEntry, TypeModel};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Parser for serialized type models.
///
/// A model file is JSON (`.json`) or YAML (`.yaml`, `.yml`) and holds either a
/// document with a `types` list or a bare list of types.
///
/// # Example
///
/// ```no_run
/// use jersey_doc::parser::ModelParser;
/// use std::path::Path;
///
/// let types = ModelParser::parse_file(Path::new("model/api.json")).unwrap();
/// println!("Parsed {} types", types.len());
/// ```
pub struct ModelParser;

#[derive(Deserialize)]
#[serde(untagged)]
enum ModelDocument {
    Document { types: Vec<TypeEntry> },
    List(Vec<TypeEntry>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModelFormat {
    Json,
    Yaml,
}

impl ModelDocument {
    fn into_types(self) -> Vec<TypeEntry> {
        match self {
            ModelDocument::Document { types } => types,
            ModelDocument::List(types) => types,
        }
    }
}

impl ModelParser {
    /// Parses one model file into its types, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file extension is not a known model format
    /// - The file cannot be read
    /// - The content does not decode as a model
    pub fn parse_file(path: &Path) -> Result<Vec<TypeEntry>> {
        debug!("Parsing model file: {}", path.display());

        let format = Self::detect_format(path)?;
        let content = fs::read_to_string(path).map_err(|e| GeneratorError::io(path, e))?;
        let types = Self::parse_str(&content, format).map_err(|message| {
            GeneratorError::ModelParse {
                file: path.to_path_buf(),
                message,
            }
        })?;

        debug!("Parsed {} types from {}", types.len(), path.display());
        Ok(types)
    }

    /// Parses every file and builds a single model, types ordered by file then
    /// by declaration.
    ///
    /// # Errors
    ///
    /// Fails on the first file that cannot be parsed.
    pub fn load_model(paths: &[PathBuf]) -> Result<TypeModel> {
        debug!("Loading model from {} files", paths.len());

        let mut types = Vec::new();
        for path in paths {
            types.extend(Self::parse_file(path)?);
        }

        Ok(TypeModel::new(types))
    }

    fn detect_format(path: &Path) -> Result<ModelFormat> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Ok(ModelFormat::Json),
            Some("yaml") | Some("yml") => Ok(ModelFormat::Yaml),
            _ => Err(GeneratorError::UnsupportedFormat {
                file: path.to_path_buf(),
            }),
        }
    }

    fn parse_str(content: &str, format: ModelFormat) -> std::result::Result<Vec<TypeEntry>, String> {
        let document: ModelDocument = match format {
            ModelFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
            ModelFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string())?,
        };
        Ok(document.into_types())
    }
}
