//! Repository discovery and configuration file parsing

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult, ScaffoldError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file names looked up at the repository root
pub const CONFIG_FILE_NAMES: &[&str] = &["create_example.yml", "create_example.yaml"];

/// Directory holding the README templates that mark a repository root
const RESOURCES_MARKER: &str = "resources";

/// Environment file loaded from the repository root
const ENV_FILE_NAME: &str = ".env";

/// Find the repository root
///
/// The working directory is searched first, then the directory of the
/// running executable, so the tool also works when started from outside
/// the repository.
pub fn find_repo_root() -> ConfigResult<PathBuf> {
    let working_dir = env::current_dir().ok();
    find_repo_root_in(working_dir.as_deref(), &executable_dir())
}

/// Search the ancestors of `working_dir`, then those of `script_dir`
pub fn find_repo_root_in(working_dir: Option<&Path>, script_dir: &Path) -> ConfigResult<PathBuf> {
    let mut searched = Vec::new();

    for start in working_dir.into_iter().chain(Some(script_dir)) {
        match find_repo_root_from(start.to_path_buf()) {
            Ok(root) => return Ok(root),
            Err(ConfigError::RepoNotFound(paths)) => searched.push(paths),
            Err(e) => return Err(e),
        }
    }

    Err(ConfigError::RepoNotFound(searched.join(", ")))
}

/// Find the repository root starting from a specific directory
///
/// The first ancestor (the start directory included) accepted by
/// `is_repo_root` wins.
pub fn find_repo_root_from(start_dir: PathBuf) -> ConfigResult<PathBuf> {
    let mut current_dir = start_dir;
    let mut searched_paths = Vec::new();

    loop {
        if is_repo_root(&current_dir) {
            return Ok(current_dir);
        }
        searched_paths.push(current_dir.display().to_string());

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Err(ConfigError::RepoNotFound(searched_paths.join(", "))),
        }
    }
}

/// A repository root holds a config file or `resources/readme_*_style.md`
pub fn is_repo_root(dir: &Path) -> bool {
    find_config_file(dir).is_some() || has_readme_templates(&dir.join(RESOURCES_MARKER))
}

fn has_readme_templates(resources_dir: &Path) -> bool {
    let Ok(entries) = fs::read_dir(resources_dir) else {
        return false;
    };

    entries.filter_map(|entry| entry.ok()).any(|entry| {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        name.starts_with("readme_") && name.ends_with("_style.md") && entry.path().is_file()
    })
}

/// Directory of the running executable (symlinks resolved)
pub fn executable_dir() -> PathBuf {
    env::current_exe()
        .map(|exe| fs::canonicalize(&exe).unwrap_or(exe))
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Locate the config file directly inside `repo_root`
pub fn find_config_file(repo_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| repo_root.join(name))
        .find(|path| path.is_file())
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> Result<Config, ScaffoldError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_config(&contents)
}

/// Parse configuration from a string
///
/// An empty document yields the defaults.
pub fn parse_config(yaml: &str) -> Result<Config, ScaffoldError> {
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load the repository configuration, falling back to defaults
pub fn load_config(repo_root: &Path) -> Result<Config, ScaffoldError> {
    match find_config_file(repo_root) {
        Some(path) => parse_config_file(&path),
        None => Ok(Config::default()),
    }
}

/// Load `<repo_root>/.env` into the process environment if present
///
/// Variables already set in the environment are left untouched. Returns the
/// loaded file path, if any.
pub fn load_env_file(repo_root: &Path) -> ConfigResult<Option<PathBuf>> {
    let path = repo_root.join(ENV_FILE_NAME);
    if !path.is_file() {
        return Ok(None);
    }

    dotenvy::from_path(&path).map_err(|e| ConfigError::EnvFile {
        path: path.clone(),
        error: e.to_string(),
    })?;

    Ok(Some(path))
}
