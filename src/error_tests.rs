use std::path::PathBuf;

use super::*;

#[test]
fn error_display_invalid_input() {
    let err = BoxChartError::InvalidInput("dataset is empty".to_string());
    assert_eq!(err.to_string(), "Invalid input: dataset is empty");
}

#[test]
fn error_display_render_target_not_found() {
    let err = BoxChartError::RenderTargetNotFound {
        node_id: "chart".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Render target not found: no element with id 'chart'"
    );
}

#[test]
fn error_display_parse_number() {
    let err = BoxChartError::ParseNumber {
        line: 3,
        token: "abc".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid number 'abc' on line 3");
}

#[test]
fn error_display_config() {
    let err = BoxChartError::Config("width must be positive".to_string());
    assert_eq!(err.to_string(), "Configuration error: width must be positive");
}

#[test]
fn error_display_file_read() {
    let err = BoxChartError::FileRead {
        path: PathBuf::from("data.txt"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("data.txt"));
}

#[test]
fn error_type_returns_variant_name() {
    assert_eq!(
        BoxChartError::InvalidInput("x".to_string()).error_type(),
        "InvalidInput"
    );
    assert_eq!(
        BoxChartError::RenderTargetNotFound {
            node_id: "x".to_string()
        }
        .error_type(),
        "RenderTargetNotFound"
    );
    assert_eq!(BoxChartError::Config("x".to_string()).error_type(), "Config");
}

#[test]
fn config_errors_are_classified() {
    assert!(BoxChartError::Config("x".to_string()).is_config_error());
    assert!(!BoxChartError::InvalidInput("x".to_string()).is_config_error());
    assert!(
        !BoxChartError::RenderTargetNotFound {
            node_id: "x".to_string()
        }
        .is_config_error()
    );
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::other("disk full");
    let err: BoxChartError = io.into();
    assert_eq!(err.error_type(), "Io");
}
