//! Error types for create-example

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for create-example operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Main error type for create-example
///
/// Every variant here is fatal: it aborts the run and ends up on stderr
/// with exit status 1. Generator failures are not part of this enum because
/// they are reported and swallowed.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File staging errors
    #[error("Staging error: {0}")]
    Stage(#[from] StageError),

    /// README template errors
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Repository discovery and configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find repository root (searched: {0})")]
    RepoNotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read '{path}': {error}")]
    Read { path: PathBuf, error: String },

    #[error("Failed to load environment file '{path}': {error}")]
    EnvFile { path: PathBuf, error: String },
}

/// Errors raised while preparing the example directory
#[derive(Error, Debug)]
pub enum StageError {
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to copy '{from}' to '{to}': {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("Invalid file pattern '{pattern}': {error}")]
    Pattern { pattern: String, error: String },
}

/// README rendering errors
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(PathBuf),

    #[error("Failed to read template '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to render '{path}': {error}")]
    Render { path: PathBuf, error: String },
}

/// External generator errors (recoverable)
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Failed to start '{program}': {error}")]
    Spawn { program: String, error: String },

    #[error("'{program}' failed with exit code {code:?}")]
    Failed { program: String, code: Option<i32> },
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for staging operations
pub type StageResult<T> = std::result::Result<T, StageError>;

/// Specialized result type for template operations
pub type TemplateResult<T> = std::result::Result<T, TemplateError>;

/// Specialized result type for generator operations
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;
