use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate_config_semantics(&Config::default()).is_ok());
}

#[test]
fn rejects_unknown_version() {
    let config = Config {
        version: Some("2".to_string()),
        ..Config::default()
    };
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("Unsupported config version '2'"));
}

#[test]
fn accepts_current_version() {
    let config = Config {
        version: Some(CONFIG_VERSION.to_string()),
        ..Config::default()
    };
    assert!(validate_version(&config).is_ok());
}

#[test]
fn rejects_empty_node_id() {
    let mut config = Config::default();
    config.chart.node_id = String::new();
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.is_config_error());
    assert!(err.to_string().contains("node_id"));
}

#[test]
fn rejects_node_id_with_whitespace() {
    assert!(validate_node_id("my chart").is_err());
    assert!(validate_node_id("my-chart").is_ok());
}

#[test]
fn rejects_malformed_color() {
    let mut config = Config::default();
    config.style.point_color = "teal".to_string();
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("style.point_color"));
}

#[test]
fn rejects_box_taller_than_plot() {
    let mut config = Config::default();
    config.chart.box_height = 500.0;
    assert!(validate_config_semantics(&config).is_err());
}

#[test]
fn rejects_opacity_out_of_range() {
    let mut config = Config::default();
    config.style.point_opacity = -0.1;
    assert!(validate_config_semantics(&config).is_err());
}
