use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;
use crate::config::{Config, FileConfigLoader, RealFileSystem, validate_config_semantics};

fn cli_for(path: &str, force: bool) -> Cli {
    let mut argv = vec!["boxchart", "-q", "init", "-o", path];
    if force {
        argv.push("--force");
    }
    Cli::parse_from(argv)
}

fn init_args(cli: &Cli) -> &InitArgs {
    match &cli.command {
        Commands::Init(args) => args,
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn template_parses_to_default_config() {
    let config =
        FileConfigLoader::<RealFileSystem>::parse_config(generate_config_template()).unwrap();
    assert_eq!(
        config,
        Config {
            version: Some("1".to_string()),
            ..Config::default()
        }
    );
    assert!(validate_config_semantics(&config).is_ok());
}

#[test]
fn creates_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".boxchart.toml");
    let path_arg = path.to_string_lossy().into_owned();
    let cli = cli_for(&path_arg, false);

    run_init_impl(init_args(&cli), &cli).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[chart]"));
    assert!(content.contains("[style]"));
}

#[test]
fn refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".boxchart.toml");
    fs::write(&path, "# mine\n").unwrap();
    let path_arg = path.to_string_lossy().into_owned();
    let cli = cli_for(&path_arg, false);

    let err = run_init_impl(init_args(&cli), &cli).unwrap_err();

    assert!(err.is_config_error());
    assert!(err.to_string().contains("--force"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");
}

#[test]
fn overwrites_with_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".boxchart.toml");
    fs::write(&path, "# mine\n").unwrap();
    let path_arg = path.to_string_lossy().into_owned();
    let cli = cli_for(&path_arg, true);

    run_init_impl(init_args(&cli), &cli).unwrap();

    assert!(fs::read_to_string(&path).unwrap().contains("node_id"));
}
