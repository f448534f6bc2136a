//! create-example - scaffold example directories for a code generator
//!
//! Stages input files into `examples/<name>/<language>`, synthesizes a
//! default IDL file when none is supplied, renders a README from a
//! language-specific template and finally runs the external generator.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod scaffold;

// Re-export commonly used types
pub use error::{Result, ScaffoldError};

/// Current version of create-example
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
