//! Per-invocation example record
//!
//! `ExampleInfo` is built once from the command line and the repository
//! configuration. Staging fills in the IDL fields; the whole record is then
//! handed to the README template.

use crate::config::{executable_dir, Config};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Values supplied on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleArgs {
    /// Example short name (folder name)
    pub name: String,

    /// Example long name
    pub fullname: String,

    /// Programming language, passed verbatim to the generator
    pub language: String,

    /// Architecture passed to the generator
    pub arch: String,

    /// Explicit IDL base name (`--idlname`)
    pub idlname: Option<String>,

    /// Extra files to copy into the example
    pub files: Vec<PathBuf>,
}

/// Everything known about the example being created
#[derive(Debug, Clone, Serialize)]
pub struct ExampleInfo {
    pub name: String,
    pub fullname: String,
    pub language: String,
    pub arch: String,
    pub files: Vec<PathBuf>,

    /// IDL base name; resolved during staging when not given
    pub idlname: Option<String>,

    /// IDL path; the canonical `<expath>/<idlname>.idl` after staging
    pub idlfile: Option<PathBuf>,

    /// Directory of the running executable
    pub scriptpath: PathBuf,

    /// Repository root
    pub repopath: PathBuf,

    /// Destination example directory
    pub expath: PathBuf,

    pub archwindows: String,
    pub archlinux: String,
}

impl ExampleInfo {
    /// Build the record for `args` inside `repo_root`
    pub fn new(args: ExampleArgs, repo_root: &Path, config: &Config) -> Self {
        let expath = example_path(repo_root, &config.examples_dir, &args.name, &args.language);

        ExampleInfo {
            name: args.name,
            fullname: args.fullname,
            language: args.language,
            arch: args.arch,
            files: args.files,
            idlname: args.idlname,
            idlfile: None,
            scriptpath: executable_dir(),
            repopath: repo_root.to_path_buf(),
            expath,
            archwindows: config.arch_windows.clone(),
            archlinux: config.arch_linux.clone(),
        }
    }
}

/// `<repo_root>/<examples_dir>/<name>/<language>`
pub fn example_path(repo_root: &Path, examples_dir: &str, name: &str, language: &str) -> PathBuf {
    repo_root.join(examples_dir).join(name).join(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ExampleArgs {
        ExampleArgs {
            name: "hello".to_string(),
            fullname: "Hello World".to_string(),
            language: "c++11".to_string(),
            arch: "x64Linux3gcc4.8.2".to_string(),
            idlname: None,
            files: vec![PathBuf::from("Hello.idl")],
        }
    }

    #[test]
    fn test_example_path() {
        let path = example_path(Path::new("/repo"), "examples", "hello", "java");
        assert_eq!(path, PathBuf::from("/repo/examples/hello/java"));
    }

    #[test]
    fn test_new_uses_config() {
        let mut config = Config::default();
        config.examples_dir = "samples".to_string();
        config.arch_windows = "x64Win64VS2017".to_string();

        let info = ExampleInfo::new(args(), Path::new("/repo"), &config);
        assert_eq!(info.expath, PathBuf::from("/repo/samples/hello/c++11"));
        assert_eq!(info.archwindows, "x64Win64VS2017");
        assert_eq!(info.archlinux, "x64Linux3gcc4.8.2");
        assert_eq!(info.repopath, PathBuf::from("/repo"));
        assert!(info.idlfile.is_none());
    }
}
