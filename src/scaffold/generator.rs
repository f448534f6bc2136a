//! External generator invocation

use crate::config::DEFAULT_GENERATOR;
use crate::error::{GeneratorError, GeneratorResult};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Environment variable pointing at the generator installation
pub const NDDSHOME_VAR: &str = "NDDSHOME";

/// Pick the generator executable
///
/// Order: configured value, `$NDDSHOME/bin/rtiddsgen`, then plain
/// `rtiddsgen` resolved through PATH.
pub fn resolve_generator(configured: Option<&str>, nddshome: Option<&OsStr>) -> PathBuf {
    if let Some(generator) = configured {
        return PathBuf::from(generator);
    }

    match nddshome {
        Some(home) if !home.is_empty() => Path::new(home).join("bin").join(DEFAULT_GENERATOR),
        _ => PathBuf::from(DEFAULT_GENERATOR),
    }
}

/// Build the generator command line for an example
pub fn generator_command(
    generator: &Path,
    language: &str,
    arch: &str,
    idlfile: &Path,
    working_dir: &Path,
) -> Command {
    let mut command = Command::new(generator);
    command
        .arg("-language")
        .arg(language)
        .arg("-example")
        .arg(arch)
        .arg(idlfile)
        .current_dir(working_dir);

    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    command
}

/// Run the generator and wait for it
pub fn run_generator(
    generator: &Path,
    language: &str,
    arch: &str,
    idlfile: &Path,
    working_dir: &Path,
) -> GeneratorResult<()> {
    let program = generator.display().to_string();
    let mut command = generator_command(generator, language, arch, idlfile, working_dir);

    let status = command.status().map_err(|e| GeneratorError::Spawn {
        program: program.clone(),
        error: e.to_string(),
    })?;

    if !status.success() {
        return Err(GeneratorError::Failed {
            program,
            code: status.code(),
        });
    }

    Ok(())
}
