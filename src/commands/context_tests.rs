use std::path::PathBuf;

use tempfile::TempDir;

use super::*;

#[test]
fn no_config_returns_defaults() {
    let result = load_config(Some(&PathBuf::from("/does/not/exist.toml")), true).unwrap();
    assert!(result.source.is_none());
    assert_eq!(result.config, crate::config::Config::default());
}

#[test]
fn missing_explicit_config_is_config_error() {
    let err = load_config(Some(&PathBuf::from("/does/not/exist.toml")), false).unwrap_err();
    assert!(err.is_config_error());
    assert_eq!(exit_code_for(&err), EXIT_CONFIG_ERROR);
}

#[test]
fn explicit_config_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[chart]\ntable = true\n").unwrap();

    let result = load_config(Some(&path), false).unwrap();

    assert!(result.config.chart.table);
    assert_eq!(result.source, Some(path));
}

#[test]
fn write_output_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    write_output(Some(&path), "hello").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
}

#[test]
fn input_errors_map_to_input_exit_code() {
    let err = BoxChartError::InvalidInput("dataset is empty".to_string());
    assert_eq!(exit_code_for(&err), EXIT_INPUT_ERROR);
    let err = BoxChartError::RenderTargetNotFound {
        node_id: "x".to_string(),
    };
    assert_eq!(exit_code_for(&err), EXIT_INPUT_ERROR);
}

#[test]
fn config_errors_map_to_config_exit_code() {
    let err = BoxChartError::Config("bad".to_string());
    assert_eq!(exit_code_for(&err), EXIT_CONFIG_ERROR);
}
