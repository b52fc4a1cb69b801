//! Error types for secenv-core

use std::path::PathBuf;

/// Result type for secenv-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in secenv-core operations
///
/// A failed resolution ("nothing is mapped here") is not an error; it is
/// reported as `None` by the resolver and the engine. These variants cover
/// genuinely broken inputs, and on the prompt hot path every one of them is
/// absorbed into an empty rendering rather than propagated.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Mapping document could not be parsed
    #[error("Failed to parse {format} mappings at {path}: {message}")]
    MappingParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    /// Mapping entry is structurally valid but semantically unusable
    #[error("Invalid mapping for {directory}: {message}")]
    MappingInvalid { directory: String, message: String },

    /// Mapping file extension is not a supported format
    #[error("Unsupported mapping format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Invalid user-supplied configuration value
    #[error("Invalid value for {name}: {message}")]
    Config { name: String, message: String },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
