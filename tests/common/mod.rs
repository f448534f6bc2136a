//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Template used for every style in test repositories
pub const TEST_TEMPLATE: &str = "# {{ fullname }}\nidl={{ idlname }} lang={{ language }} arch={{ arch }}\n";

/// Create a temporary repository with `c` and `java` README templates
pub fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let resources = temp_dir.path().join("resources");
    fs::create_dir(&resources).unwrap();
    fs::write(resources.join("readme_c_style.md"), TEST_TEMPLATE).unwrap();
    fs::write(resources.join("readme_java_style.md"), TEST_TEMPLATE).unwrap();
    temp_dir
}

/// Create a test repository with a create_example.yml
pub fn create_test_repo_with_config(content: &str) -> TempDir {
    let temp_dir = create_test_repo();
    fs::write(temp_dir.path().join("create_example.yml"), content).unwrap();
    temp_dir
}

/// Write an input file outside the examples tree
pub fn write_input(repo: &Path, name: &str, content: &str) -> PathBuf {
    let inputs = repo.join("inputs");
    fs::create_dir_all(&inputs).unwrap();
    let path = inputs.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// `<repo>/examples/<name>/<language>`
pub fn example_dir(repo: &Path, name: &str, language: &str) -> PathBuf {
    repo.join("examples").join(name).join(language)
}
