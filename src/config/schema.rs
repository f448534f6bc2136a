//! Configuration validation

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult};
use std::path::{Component, Path};

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if let Some(generator) = &config.generator {
        if generator.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "generator must not be empty".to_string(),
            ));
        }
    }

    validate_relative_dir("examples_dir", &config.examples_dir)?;
    validate_relative_dir("resources_dir", &config.resources_dir)?;

    for (language, style) in &config.template_aliases {
        if style.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "template alias for '{}' must not be empty",
                language
            )));
        }
    }

    Ok(())
}

/// Directories must stay inside the repository
fn validate_relative_dir(key: &str, dir: &str) -> ConfigResult<()> {
    if dir.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{} must not be empty", key)));
    }

    let path = Path::new(dir);
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(ConfigError::Invalid(format!(
            "{} must be a relative path inside the repository: {}",
            key, dir
        )));
    }

    Ok(())
}
