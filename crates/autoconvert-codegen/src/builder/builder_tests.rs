#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;

fn write_models(dir: &std::path::Path, source: &str) -> PathBuf {
    let src = dir.join("src");
    fs::create_dir_all(&src).unwrap();
    let path = src.join("models.rs");
    fs::write(&path, source).unwrap();
    path
}

#[test]
fn Builder___generate___writes_artifacts_to_out_dir() {
    let temp = TempDir::new().unwrap();
    let models = write_models(
        temp.path(),
        "#[auto_convert(capabilities(Serialize, Greet))] pub struct Restaurant { pub price: f32 }",
    );
    let out = temp.path().join("out");

    let report = Builder::new()
        .source(&models)
        .out_dir(&out)
        .runtime_crate("::autoconvert")
        .rerun_directives(false)
        .generate()
        .unwrap();

    assert_eq!(report.written.len(), 1);
    let content = fs::read_to_string(out.join("RestaurantAutoConvert.rs")).unwrap();
    assert!(content.contains("// Type: crate::models::Restaurant"));
    assert!(content.contains("impl ::autoconvert::ToMap for Restaurant"));
}

#[test]
fn Builder___faulting_type___returns_error() {
    let temp = TempDir::new().unwrap();
    let models = write_models(
        temp.path(),
        "#[auto_convert(capabilities(Serialize))] pub struct Price(f32);",
    );

    let result = Builder::new()
        .source(&models)
        .out_dir(temp.path().join("out"))
        .rerun_directives(false)
        .generate();

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("crate::models::Price"));
}

#[test]
fn Builder___overrides___applied_over_config_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("autoconvert.toml");
    fs::write(&config_path, "indent_width = 8\ndefault_suffix = \"Map\"\n").unwrap();

    let config = Builder::new()
        .config_file(&config_path)
        .indent_width(2)
        .read_only(false)
        .resolved_config()
        .unwrap();

    assert_eq!(config.indent_width, 2);
    assert_eq!(config.default_suffix, "Map");
    assert!(!config.read_only);
}

#[test]
fn Builder___invalid_override___rejected() {
    let result = Builder::new().indent_width(0).resolved_config();

    assert!(result.is_err());
}
