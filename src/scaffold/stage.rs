//! Destination preparation and file staging

use crate::error::{StageError, StageResult};
use crate::scaffold::{ExampleInfo, Reporter};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// IDL written when the example does not ship its own
pub const DEFAULT_IDL: &str = "/* Foo IDL generated by create-example. */
struct Foo {
    long a;
};
";

/// Extension of interface-definition files
pub const IDL_EXTENSION: &str = "idl";

fn idl_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\.idl$").expect("valid IDL pattern"))
}

/// Expand file arguments containing glob metacharacters
///
/// Literal paths, including existing files whose names contain
/// metacharacters, pass through. A pattern that matches nothing is kept as
/// given so the later copy reports the missing file.
pub fn expand_file_args(args: &[String]) -> StageResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for arg in args {
        if !arg.contains(['*', '?', '[']) || Path::new(arg).exists() {
            files.push(PathBuf::from(arg));
            continue;
        }

        let entries = glob::glob(arg).map_err(|e| StageError::Pattern {
            pattern: arg.clone(),
            error: e.to_string(),
        })?;

        let mut matched: Vec<PathBuf> = entries.filter_map(|entry| entry.ok()).collect();
        if matched.is_empty() {
            files.push(PathBuf::from(arg));
        } else {
            matched.sort();
            files.append(&mut matched);
        }
    }

    Ok(files)
}

/// Create the example directory (and parents) if missing
pub fn prepare_destination(expath: &Path) -> StageResult<()> {
    fs::create_dir_all(expath).map_err(|source| StageError::CreateDir {
        path: expath.to_path_buf(),
        source,
    })
}

/// First path ending in `.idl` (case-sensitive)
pub fn find_idl_file(files: &[PathBuf]) -> Option<&PathBuf> {
    files
        .iter()
        .find(|file| idl_pattern().is_match(&file.to_string_lossy()))
}

/// Resolve the IDL base name: explicit override, matched file stem, or the
/// example short name
pub fn derive_idl_name(explicit: Option<&str>, idl_file: Option<&Path>, name: &str) -> String {
    if let Some(idlname) = explicit {
        return idlname.to_string();
    }

    idl_file
        .and_then(|file| file.file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}

/// Copy `src` to `dst` unless the target already exists
///
/// When `dst` is a directory the source file name is appended. Returns the
/// resolved target and whether a copy happened.
pub fn copy_file(src: &Path, dst: &Path) -> StageResult<(PathBuf, bool)> {
    let target = if dst.is_dir() {
        match src.file_name() {
            Some(file_name) => dst.join(file_name),
            None => dst.to_path_buf(),
        }
    } else {
        dst.to_path_buf()
    };

    if target.exists() {
        return Ok((target, false));
    }

    fs::copy(src, &target).map_err(|source| StageError::Copy {
        from: src.to_path_buf(),
        to: target.clone(),
        source,
    })?;

    Ok((target, true))
}

/// Stage the supplied files and make sure the example has an IDL file
///
/// Returns the canonical IDL path, also stored in `info.idlfile`.
pub fn stage_files(info: &mut ExampleInfo, reporter: &Reporter) -> StageResult<PathBuf> {
    info.idlfile = find_idl_file(&info.files).cloned();
    let idlname = derive_idl_name(info.idlname.as_deref(), info.idlfile.as_deref(), &info.name);
    reporter.print_debug(&format!("IDL name: {}", idlname));
    info.idlname = Some(idlname.clone());

    for file in &info.files {
        let (target, copied) = copy_file(file, &info.expath)?;
        if copied {
            reporter.print_info(&format!("Copied {}", target.display()));
        } else {
            reporter.print_skip(&file.display().to_string(), "destination already exists");
        }
    }

    let idlfile = info
        .expath
        .join(format!("{}.{}", idlname, IDL_EXTENSION));
    if !idlfile.exists() {
        fs::write(&idlfile, DEFAULT_IDL).map_err(|source| StageError::Write {
            path: idlfile.clone(),
            source,
        })?;
        reporter.print_info(&format!("Generated default IDL {}", idlfile.display()));
    }
    info.idlfile = Some(idlfile.clone());

    Ok(idlfile)
}
