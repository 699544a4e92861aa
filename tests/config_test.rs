// tests/config_test.rs
use dotver::config::{load_config, Config, OutputFormat, CONFIG_FILE_NAME};
use dotver::{DotverError, Version};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
pattern = "v{version}"

[constraint]
gt = "1.0.0"
lte = "v2"

[output]
format = "json"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.pattern, "v{version}");
    assert_eq!(config.constraint.gt, Some(Version::new(1, 0, 0)));
    assert_eq!(
        config.constraint.lte.as_ref().map(|v| v.to_string()),
        Some("v2".to_string())
    );
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(!config.output.reverse);
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = load_config(Some(missing.to_str().unwrap())).unwrap_err();
    assert!(matches!(err, DotverError::Io(_)));
}

#[test]
fn test_load_invalid_version_in_file_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[constraint]\ngte = \"v.01\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(err, DotverError::Toml(_)));
    assert!(err.to_string().contains("invalid version"));
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[output]\nreverse = true\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    let config = config.expect("local config should load");
    assert!(config.output.reverse);
    assert_eq!(config.pattern, Config::default().pattern);
}
