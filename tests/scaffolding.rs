//! Integration tests for example scaffolding

mod common;

use common::{create_test_repo, example_dir, write_input};
use create_example::config::Config;
use create_example::scaffold::{create_example, ExampleArgs, Reporter, Verbosity, DEFAULT_IDL};
use std::fs;
use std::path::{Path, PathBuf};

fn silent() -> Reporter {
    Reporter::new().with_verbosity(Verbosity::Silent)
}

/// Config pointing at a generator that does not exist
fn config_without_generator(repo: &Path) -> Config {
    let mut config = Config::default();
    config.generator = Some(repo.join("no-generator").display().to_string());
    config
}

fn args(name: &str, language: &str, files: Vec<PathBuf>) -> ExampleArgs {
    ExampleArgs {
        name: name.to_string(),
        fullname: format!("{} example", name),
        language: language.to_string(),
        arch: "x64Linux3gcc4.8.2".to_string(),
        idlname: None,
        files,
    }
}

#[test]
fn test_empty_file_list_produces_defaults() {
    let repo = create_test_repo();
    let config = config_without_generator(repo.path());

    let outcome =
        create_example(args("hello", "java", Vec::new()), repo.path(), &config, &silent()).unwrap();

    let expath = example_dir(repo.path(), "hello", "java");
    assert_eq!(outcome.info.expath, expath);
    assert!(expath.is_dir());
    assert_eq!(
        fs::read_to_string(expath.join("hello.idl")).unwrap(),
        DEFAULT_IDL
    );
    assert!(DEFAULT_IDL.contains("struct Foo {\n    long a;\n};"));

    let readme = fs::read_to_string(expath.join("README.md")).unwrap();
    assert!(readme.contains("# hello example"));
    assert!(readme.contains("idl=hello lang=java arch=x64Linux3gcc4.8.2"));
}

#[test]
fn test_supplied_idl_names_the_example_idl() {
    let repo = create_test_repo();
    let config = config_without_generator(repo.path());
    let idl = write_input(repo.path(), "Shapes.idl", "struct Shape { long x; };\n");
    let notes = write_input(repo.path(), "notes.txt", "notes");

    let outcome = create_example(
        args("shapes", "c++11", vec![notes, idl]),
        repo.path(),
        &config,
        &silent(),
    )
    .unwrap();

    let expath = example_dir(repo.path(), "shapes", "c++11");
    assert_eq!(outcome.info.idlname.as_deref(), Some("Shapes"));
    assert_eq!(outcome.info.idlfile, Some(expath.join("Shapes.idl")));
    assert_eq!(
        fs::read_to_string(expath.join("Shapes.idl")).unwrap(),
        "struct Shape { long x; };\n"
    );
    assert!(expath.join("notes.txt").exists());
    assert!(!expath.join("shapes.idl").exists());

    // c++11 renders the shared C template
    let readme = fs::read_to_string(expath.join("README.md")).unwrap();
    assert!(readme.contains("idl=Shapes lang=c++11"));
}

#[test]
fn test_rerun_never_overwrites_staged_files() {
    let repo = create_test_repo();
    let config = config_without_generator(repo.path());
    let input = write_input(repo.path(), "data.txt", "first");

    create_example(
        args("rerun", "java", vec![input.clone()]),
        repo.path(),
        &config,
        &silent(),
    )
    .unwrap();

    let expath = example_dir(repo.path(), "rerun", "java");
    fs::write(expath.join("rerun.idl"), "edited idl").unwrap();
    fs::write(&input, "second").unwrap();

    create_example(args("rerun", "java", vec![input]), repo.path(), &config, &silent()).unwrap();

    assert_eq!(fs::read_to_string(expath.join("data.txt")).unwrap(), "first");
    assert_eq!(
        fs::read_to_string(expath.join("rerun.idl")).unwrap(),
        "edited idl"
    );
}

#[test]
fn test_missing_template_is_fatal() {
    let repo = create_test_repo();
    let config = config_without_generator(repo.path());

    let result = create_example(args("hello", "ada", Vec::new()), repo.path(), &config, &silent());

    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("readme_ada_style.md"));
    // Staging already happened before rendering failed
    assert!(example_dir(repo.path(), "hello", "ada")
        .join("hello.idl")
        .exists());
}

#[test]
fn test_missing_input_file_is_fatal() {
    let repo = create_test_repo();
    let config = config_without_generator(repo.path());

    let result = create_example(
        args("hello", "java", vec![repo.path().join("nope.idl")]),
        repo.path(),
        &config,
        &silent(),
    );

    assert!(result.is_err());
}

#[test]
fn test_template_aliases_from_config() {
    let repo = create_test_repo();
    let mut config = config_without_generator(repo.path());
    config
        .template_aliases
        .insert("ada".to_string(), "c".to_string());

    let outcome =
        create_example(args("hello", "ada", Vec::new()), repo.path(), &config, &silent()).unwrap();

    assert!(outcome.readme.exists());
}

#[cfg(unix)]
#[test]
fn test_generator_failure_keeps_outputs() {
    let repo = create_test_repo();
    let mut config = Config::default();
    config.generator = Some("false".to_string());

    let outcome =
        create_example(args("hello", "java", Vec::new()), repo.path(), &config, &silent()).unwrap();

    assert!(!outcome.generated);
    assert!(outcome.readme.exists());
    assert!(outcome.info.expath.join("hello.idl").exists());
}

#[cfg(unix)]
#[test]
fn test_generator_receives_arguments() {
    use std::os::unix::fs::PermissionsExt;

    let repo = create_test_repo();
    let script = repo.path().join("fake-gen.sh");
    fs::write(&script, "#!/bin/sh\necho \"$@\" > generator-args.txt\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let mut config = Config::default();
    config.generator = Some(script.display().to_string());

    let outcome =
        create_example(args("hello", "c++", Vec::new()), repo.path(), &config, &silent()).unwrap();
    assert!(outcome.generated);

    let expath = example_dir(repo.path(), "hello", "c++");
    let recorded = fs::read_to_string(expath.join("generator-args.txt")).unwrap();
    assert_eq!(
        recorded.trim(),
        format!(
            "-language c++ -example x64Linux3gcc4.8.2 {}",
            expath.join("hello.idl").display()
        )
    );
}
