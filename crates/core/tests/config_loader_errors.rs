use pyreport_core::config::loader::{ConfigError, ConfigLoader};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn missing_file_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("nope/config.toml");
    let err = ConfigLoader::load(Some(&cfg_path)).unwrap_err();
    match err {
        ConfigError::NotFound(_) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn bad_version_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 2\n");

    let err = ConfigLoader::load(Some(&cfg_path)).unwrap_err();
    match err {
        ConfigError::BadVersion(2) => {}
        other => panic!("expected BadVersion(2), got {other:?}"),
    }
}

#[test]
fn missing_version_fails_to_parse() {
    let err = ConfigLoader::from_toml_str("[tables]\ndirective = \"@t\"\n", Path::new("inline"))
        .unwrap_err();
    match err {
        ConfigError::ParseError(origin, _) if origin == "inline" => {}
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn empty_directive_fails() {
    let err = ConfigLoader::from_toml_str("version = 1\n[tables]\ndirective = \"  \"\n", Path::new("x"))
        .unwrap_err();
    match err {
        ConfigError::EmptyDirective => {}
        other => panic!("expected EmptyDirective, got {other:?}"),
    }
}

#[test]
fn wrong_field_type_fails() {
    let err = ConfigLoader::from_toml_str("version = 1\n[output]\nwrite_vars = \"yes\"\n", Path::new("x"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(..)));
}
