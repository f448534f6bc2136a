//! Configuration parsing and validation
//!
//! This module handles repository root discovery, parsing of the optional
//! create_example.yml file and validation of its contents.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
