//! Tests for config

use super::*;
use crate::analyze::ExportFormat;
use std::io::Write;
use tempfile::TempDir;

fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.display.color, ColorMode::Auto);
    assert_eq!(config.analyze.format, ExportFormat::Json);
}

#[test]
fn test_parse_full_config() {
    let toml = r#"
[display]
color = "never"

[analyze]
format = "md"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.display.color, ColorMode::Never);
    assert_eq!(config.analyze.format, ExportFormat::Md);
}

#[test]
fn test_missing_sections_use_defaults() {
    let config: Config = toml::from_str("[display]\n").unwrap();
    assert_eq!(config.display.color, ColorMode::Auto);
    assert_eq!(config.analyze.format, ExportFormat::Json);
}

#[test]
fn test_missing_file_returns_defaults_without_warning() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_config_from(&temp_dir.path().join("absent.toml"));

    assert!(result.warning.is_none());
    assert_eq!(result.config.analyze.format, ExportFormat::Json);
}

#[test]
fn test_valid_file_is_loaded() {
    let (_temp_dir, path) = write_config("[analyze]\nformat = \"txt\"\n");
    let result = load_config_from(&path);

    assert!(result.warning.is_none());
    assert_eq!(result.config.analyze.format, ExportFormat::Txt);
}

#[test]
fn test_malformed_file_returns_defaults_with_warning() {
    let (_temp_dir, path) = write_config("[display\ncolor = \"never\"");
    let result = load_config_from(&path);

    let warning = result.warning.expect("malformed config should warn");
    assert!(warning.starts_with("Invalid config"));
    assert_eq!(result.config.display.color, ColorMode::Auto);
}

#[test]
fn test_config_path_consistency() {
    let path1 = get_config_path();
    let path2 = get_config_path();

    assert_eq!(path1, path2, "Config path should be consistent");

    let path_str = path1.to_string_lossy();
    assert!(
        path_str.ends_with("prompt-tweaks/config.toml")
            || path_str.ends_with("prompt-tweaks\\config.toml"),
        "Config path should end with prompt-tweaks/config.toml, got: {}",
        path_str
    );
}
