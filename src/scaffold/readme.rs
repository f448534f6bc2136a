//! README rendering
//!
//! Templates live in `<repo>/<resources_dir>/readme_<style>_style.md` and
//! use jinja-style placeholders (`{{ fullname }}`, `{{ archlinux }}`, ...)
//! filled from the `ExampleInfo` record.

use crate::error::{TemplateError, TemplateResult};
use crate::scaffold::{ExampleInfo, Reporter};
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

/// Name of the rendered file inside the example directory
pub const README_FILE_NAME: &str = "README.md";

/// Style shared by every C++ flavour
const C_STYLE: &str = "c";

/// Template style for a language
///
/// Configured aliases win. Otherwise any C++ variant (`c++`, `C++03`,
/// `c++11`, ...) maps to the shared C style and every other language keeps
/// its own name.
pub fn template_style(language: &str, aliases: &HashMap<String, String>) -> String {
    if let Some(style) = aliases.get(language) {
        return style.clone();
    }

    if language.to_ascii_lowercase().starts_with("c++") {
        C_STYLE.to_string()
    } else {
        language.to_string()
    }
}

/// `<resources_dir>/readme_<style>_style.md`
pub fn template_path(resources_dir: &Path, style: &str) -> PathBuf {
    resources_dir.join(format!("readme_{}_style.md", style))
}

/// Render `template` against every field of `info`
pub fn render_template(template: &str, info: &ExampleInfo, path: &Path) -> TemplateResult<String> {
    let render_error = |e: tera::Error| TemplateError::Render {
        path: path.to_path_buf(),
        error: error_chain(&e),
    };

    let context = Context::from_serialize(info).map_err(render_error)?;
    Tera::one_off(template, &context, false).map_err(render_error)
}

/// Load the style template, render it and write `README.md`
pub fn create_readme(
    info: &ExampleInfo,
    resources_dir: &Path,
    aliases: &HashMap<String, String>,
    reporter: &Reporter,
) -> TemplateResult<PathBuf> {
    let style = template_style(&info.language, aliases);
    let path = template_path(resources_dir, &style);
    reporter.print_debug(&format!("Using template {}", path.display()));

    let template = fs::read_to_string(&path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => TemplateError::NotFound(path.clone()),
        _ => TemplateError::Read {
            path: path.clone(),
            source,
        },
    })?;
    let rendered = render_template(&template, info, &path)?;

    let readme = info.expath.join(README_FILE_NAME);
    fs::write(&readme, rendered).map_err(|source| TemplateError::Write {
        path: readme.clone(),
        source,
    })?;
    reporter.print_info(&format!("Rendered {}", readme.display()));

    Ok(readme)
}

/// Tera hides the interesting part of an error in its source chain
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
