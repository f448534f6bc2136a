//! Main CLI application

use crate::config::{find_repo_root, load_config, load_env_file, validate_config};
use crate::error::ScaffoldError;
use crate::scaffold::{create_example, expand_file_args, ExampleArgs, Reporter, Verbosity};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("create-example")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Create structure for new examples")
        .arg(
            Arg::new("name")
                .required(true)
                .help("Example short name. This is the name of the folder that contains it"),
        )
        .arg(
            Arg::new("fullname")
                .required(true)
                .help("Example long name"),
        )
        .arg(
            Arg::new("language")
                .required(true)
                .help("Programming language"),
        )
        .arg(
            Arg::new("arch")
                .required(true)
                .help("Architecture to compile example"),
        )
        .arg(
            Arg::new("files")
                .num_args(0..)
                .value_name("FILES")
                .help("Extra files to copy like IDL. A Foo IDL file is created if none is passed"),
        )
        .arg(
            Arg::new("idlname")
                .long("idlname")
                .value_name("IDLNAME")
                .help("The name of the IDL file. If not specified, \"name\" is used"),
        )
        .arg(
            Arg::new("repo")
                .short('r')
                .long("repo")
                .value_name("DIR")
                .help("Repository root (default: discovered from the current directory)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Collect the example arguments from matches
fn parse_example_args(matches: &ArgMatches) -> Result<ExampleArgs, ScaffoldError> {
    let value = |id: &str| matches.get_one::<String>(id).cloned().unwrap_or_default();

    let raw_files: Vec<String> = matches
        .get_many::<String>("files")
        .map(|files| files.cloned().collect())
        .unwrap_or_default();

    Ok(ExampleArgs {
        name: value("name"),
        fullname: value("fullname"),
        language: value("language"),
        arch: value("arch"),
        idlname: matches.get_one::<String>("idlname").cloned(),
        files: expand_file_args(&raw_files)?,
    })
}

/// Repository root from `--repo` (made absolute) or discovery
fn repo_root(matches: &ArgMatches) -> Result<PathBuf, ScaffoldError> {
    match matches.get_one::<String>("repo") {
        Some(dir) => {
            let dir = PathBuf::from(dir);
            if dir.is_absolute() {
                Ok(dir)
            } else {
                Ok(env::current_dir()?.join(dir))
            }
        }
        None => Ok(find_repo_root()?),
    }
}

/// Run the CLI application with provided arguments
pub fn run_from<I, T>(args: I) -> Result<(), ScaffoldError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_command().get_matches_from(args);

    if matches.get_flag("no-color") {
        colored::control::set_override(false);
    }
    let reporter = Reporter::new().with_verbosity(get_verbosity(&matches));

    let root = repo_root(&matches)?;
    reporter.print_debug(&format!("Repository root: {}", root.display()));

    if let Some(env_file) = load_env_file(&root)? {
        reporter.print_debug(&format!("Loaded {}", env_file.display()));
    }
    let config = load_config(&root)?;
    validate_config(&config)?;

    let example = parse_example_args(&matches)?;
    let outcome = create_example(example, &root, &config, &reporter)?;

    if outcome.generated {
        reporter.print_info(&format!("Example ready in {}", outcome.info.expath.display()));
    }

    Ok(())
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<(), ScaffoldError> {
    run_from(env::args_os())
}
