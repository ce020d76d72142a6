use std::path::PathBuf;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Errors raised while loading a model or generating documentation.
///
/// Every variant is fatal: a generation run stops at the first one and the
/// partially written output file should not be trusted.
#[derive(thiserror::Error, Debug)]
pub enum GeneratorError {
    #[error("Failed to generate documentation: {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to generate documentation: {0}")]
    Write(#[from] std::io::Error),

    #[error("Cannot find class, enum or interface {full_name}")]
    TypeNotFound { full_name: String },

    #[error("Could not find a constructor for {type_name} with a JsonCreator marker")]
    BodyConstructorNotFound { type_name: String },

    #[error("Could not find a JsonProperty marker for object {type_name} and field {field}")]
    PropertyNameMissing { type_name: String, field: String },

    #[error("Failed to parse model file {}: {message}", file.display())]
    ModelParse { file: PathBuf, message: String },

    #[error("Unsupported model file format: {}", file.display())]
    UnsupportedFormat { file: PathBuf },
}

impl GeneratorError {
    /// Wraps an I/O failure on `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }
}
