//! CLI interface and argument parsing
//!
//! This module builds the command line, resolves the repository and hands
//! the parsed example over to the scaffold steps.

pub mod app;

// Re-export main types
pub use app::*;
