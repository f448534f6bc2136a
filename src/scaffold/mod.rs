//! Example scaffolding
//!
//! This module runs the scaffold steps in order: destination preparation,
//! file staging, README rendering and the generator call.

pub mod context;
pub mod generator;
pub mod info;
pub mod readme;
pub mod stage;

// Re-export main types
pub use context::*;
pub use generator::*;
pub use info::*;
pub use readme::*;
pub use stage::*;

use crate::config::Config;
use crate::error::Result;
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// What a scaffold run produced
#[derive(Debug)]
pub struct Outcome {
    /// The completed example record
    pub info: ExampleInfo,

    /// Path of the rendered README
    pub readme: PathBuf,

    /// Whether the generator ran successfully
    pub generated: bool,
}

/// Create one example
///
/// Fatal errors abort the run. A generator failure is reported and leaves
/// `Outcome::generated` false.
pub fn create_example(
    args: ExampleArgs,
    repo_root: &Path,
    config: &Config,
    reporter: &Reporter,
) -> Result<Outcome> {
    let mut info = ExampleInfo::new(args, repo_root, config);

    reporter.print_info(&format!("Creating example in {}", info.expath.display()));
    prepare_destination(&info.expath)?;

    let idlfile = stage_files(&mut info, reporter)?;

    let resources_dir = repo_root.join(&config.resources_dir);
    let readme = create_readme(&info, &resources_dir, &config.template_aliases, reporter)?;

    let generator = generator_path(config, repo_root);
    reporter.print_info(&format!("Running {}", generator.display()));

    let result = run_generator(&generator, &info.language, &info.arch, &idlfile, &info.expath);
    let generated = match result {
        Ok(()) => true,
        Err(e) => {
            reporter.print_error(&format!("Error calling {}", generator.display()));
            reporter.print_debug(&e.to_string());
            false
        }
    };

    Ok(Outcome {
        info,
        readme,
        generated,
    })
}

/// Resolve the generator from the config and `NDDSHOME`
fn generator_path(config: &Config, repo_root: &Path) -> PathBuf {
    generator_path_with(config, repo_root, env::var_os(NDDSHOME_VAR).as_deref())
}

/// Relative configured paths with a directory part are repo-relative;
/// `NDDSHOME` is used as given
fn generator_path_with(config: &Config, repo_root: &Path, nddshome: Option<&OsStr>) -> PathBuf {
    let generator = resolve_generator(config.generator.as_deref(), nddshome);

    let configured = config.generator.is_some();
    if configured && generator.is_relative() && generator.components().count() > 1 {
        repo_root.join(generator)
    } else {
        generator
    }
}
