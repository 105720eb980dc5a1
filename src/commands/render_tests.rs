use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["boxchart", "render"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

fn render_args(cli: &Cli) -> &RenderArgs {
    match &cli.command {
        Commands::Render(args) => args,
        _ => panic!("Expected Render command"),
    }
}

fn write_dataset(dir: &Path) -> String {
    let path = dir.join("data.txt");
    fs::write(&path, "1 2 3 4 5 6 7 8 9\n").unwrap();
    path.to_string_lossy().into_owned()
}

fn one_to_nine() -> Dataset {
    Dataset::from_values((1..=9).map(f64::from).collect()).unwrap()
}

#[test]
fn overrides_replace_config_values() {
    let cli = parse(&[
        "--node-id", "target", "--title", "T", "--width", "640", "--table",
    ]);
    let mut config = Config::default();
    apply_cli_overrides(&mut config, render_args(&cli));

    assert_eq!(config.chart.node_id, "target");
    assert_eq!(config.chart.title.as_deref(), Some("T"));
    assert_eq!(config.chart.width, 640.0);
    assert_eq!(config.chart.height, 320.0);
    assert!(config.chart.table);
    assert!(!config.chart.constrain);
}

#[test]
fn flags_do_not_clear_config_toggles() {
    let cli = parse(&[]);
    let mut config = Config::default();
    config.chart.constrain = true;
    apply_cli_overrides(&mut config, render_args(&cli));
    assert!(config.chart.constrain);
}

#[test]
fn render_chart_draws_every_point() {
    let rendered = render_chart(&one_to_nine(), &Config::default()).unwrap();
    assert_eq!(rendered.svg.matches("<circle").count(), 9);
    assert!(rendered.table.is_none());
    assert!(rendered.heading.is_none());
}

#[test]
fn render_chart_with_table_and_title() {
    let mut config = Config::default();
    config.chart.table = true;
    config.chart.title = Some("Latency".to_string());
    let rendered = render_chart(&one_to_nine(), &config).unwrap();
    assert!(rendered.table.unwrap().contains("Upper Fence:"));
    assert_eq!(rendered.heading.as_deref(), Some("Latency"));
}

#[test]
fn render_chart_with_tooltips() {
    let mut config = Config::default();
    config.chart.tooltips = true;
    let rendered = render_chart(&one_to_nine(), &config).unwrap();
    assert_eq!(rendered.svg.matches("<circle").count(), 9);
    assert!(rendered.svg.contains("<title>9</title>"));
}

#[test]
fn writes_standalone_html() {
    let dir = TempDir::new().unwrap();
    let input = write_dataset(dir.path());
    let out = dir.path().join("chart.html");
    let out_arg = out.to_string_lossy().into_owned();
    let cli = parse(&[&input, "--no-config", "-o", &out_arg, "--title", "Sample"]);

    run_render_impl(render_args(&cli), &cli).unwrap();

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Sample</h1>"));
    assert!(html.contains("<div id=\"box-chart\">"));
    assert!(html.contains("<svg"));
}

#[test]
fn writes_bare_svg() {
    let dir = TempDir::new().unwrap();
    let input = write_dataset(dir.path());
    let out = dir.path().join("chart.svg");
    let out_arg = out.to_string_lossy().into_owned();
    let cli = parse(&[&input, "--no-config", "--format", "svg", "-o", &out_arg]);

    run_render_impl(render_args(&cli), &cli).unwrap();

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn injects_into_existing_page() {
    let dir = TempDir::new().unwrap();
    let input = write_dataset(dir.path());
    let page = dir.path().join("page.html");
    fs::write(&page, "<html><body><div id=\"plot\"></div></body></html>").unwrap();
    let page_arg = page.to_string_lossy().into_owned();
    let out = dir.path().join("out.html");
    let out_arg = out.to_string_lossy().into_owned();
    let cli = parse(&[
        &input, "--no-config", "--into", &page_arg, "--node-id", "plot", "-o", &out_arg,
    ]);

    run_render_impl(render_args(&cli), &cli).unwrap();

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<html><body><div id=\"plot\">\n"));
    assert!(html.contains("<svg"));
    assert!(html.trim_end().ends_with("</div></body></html>"));
}

#[test]
fn missing_target_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = write_dataset(dir.path());
    let page = dir.path().join("page.html");
    fs::write(&page, "<div id=\"other\"></div>").unwrap();
    let page_arg = page.to_string_lossy().into_owned();
    let cli = parse(&[&input, "--no-config", "--into", &page_arg]);

    let err = run_render_impl(render_args(&cli), &cli).unwrap_err();

    assert!(matches!(err, BoxChartError::RenderTargetNotFound { .. }));
}

#[test]
fn invalid_dimensions_are_config_errors() {
    let dir = TempDir::new().unwrap();
    let input = write_dataset(dir.path());
    let cli = parse(&[&input, "--no-config", "--height", "50"]);

    let err = run_render_impl(render_args(&cli), &cli).unwrap_err();

    assert!(err.is_config_error());
}
