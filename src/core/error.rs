//! Error types for data loading and scene changes.

use thiserror::Error;

/// Errors that can occur when loading a data file.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },
}

/// Errors reported by the scene loader.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneLoadError {
    /// No screen is registered under the requested name.
    #[error("Unknown scene '{0}'")]
    UnknownScene(String),
}
