//! Core configuration types
//!
//! This module defines the data structures that represent a
//! create_example.yml configuration file.

use serde::Deserialize;
use std::collections::HashMap;

/// Default generator executable name
pub const DEFAULT_GENERATOR: &str = "rtiddsgen";

/// Display architecture for Windows builds (works for all languages)
pub const DEFAULT_ARCH_WINDOWS: &str = "x64Win64VS2013";

/// Display architecture for Linux builds (works for all languages)
pub const DEFAULT_ARCH_LINUX: &str = "x64Linux3gcc4.8.2";

/// Repository-level configuration
///
/// Every key is optional; an absent file behaves like `Config::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Generator executable (name on PATH or a path)
    #[serde(default)]
    pub generator: Option<String>,

    /// Directory holding the examples, relative to the repository root
    #[serde(default = "default_examples_dir")]
    pub examples_dir: String,

    /// Directory holding the README templates, relative to the repository root
    #[serde(default = "default_resources_dir")]
    pub resources_dir: String,

    /// Windows architecture shown in READMEs
    #[serde(default = "default_arch_windows")]
    pub arch_windows: String,

    /// Linux architecture shown in READMEs
    #[serde(default = "default_arch_linux")]
    pub arch_linux: String,

    /// Extra language -> template style mappings
    #[serde(default)]
    pub template_aliases: HashMap<String, String>,
}

fn default_examples_dir() -> String {
    "examples".to_string()
}

fn default_resources_dir() -> String {
    "resources".to_string()
}

fn default_arch_windows() -> String {
    DEFAULT_ARCH_WINDOWS.to_string()
}

fn default_arch_linux() -> String {
    DEFAULT_ARCH_LINUX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            generator: None,
            examples_dir: default_examples_dir(),
            resources_dir: default_resources_dir(),
            arch_windows: default_arch_windows(),
            arch_linux: default_arch_linux(),
            template_aliases: HashMap::new(),
        }
    }
}
