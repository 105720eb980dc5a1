use std::fs;
use std::path::Path;

use crate::cli::{Cli, RenderArgs};
use crate::config::{Config, validate_config_semantics};
use crate::dataset::{Dataset, DatasetSource};
use crate::output::{ChartFormat, DocumentOptions, inject_into, standalone_document};
use crate::render::{BoxChart, RenderedChart, SvgPort};
use crate::stats::analyze;
use crate::{BoxChartError, EXIT_SUCCESS, Result};

use super::context::{load_config, report_error, write_output};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Renders the dataset and writes the chart.
///
/// # Errors
/// Returns an error if the configuration is invalid, the dataset cannot be
/// loaded, or the `--into` page has no element with the node id.
pub fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<()> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?.config;
    apply_cli_overrides(&mut config, args);
    validate_config_semantics(&config)?;

    let page = args.into.as_deref().map(read_page).transpose()?;
    let dataset = DatasetSource::from_arg(&args.input).load()?;

    let format = if page.is_some() {
        ChartFormat::Html
    } else {
        args.format
    };
    if format == ChartFormat::Svg && config.chart.table {
        tracing::warn!("the summary table is not part of SVG output");
    }

    let rendered = render_chart(&dataset, &config)?;
    let output = match (format, page) {
        (ChartFormat::Svg, _) => format!("{}\n", rendered.svg),
        (ChartFormat::Html, Some(page)) => {
            inject_into(&page, &config.chart.node_id, &rendered.to_html_fragment())?
        }
        (ChartFormat::Html, None) => standalone_document(
            &rendered.to_html_fragment(),
            &DocumentOptions {
                page_title: config
                    .chart
                    .title
                    .clone()
                    .unwrap_or_else(|| DocumentOptions::default().page_title),
                node_id: config.chart.node_id.clone(),
            },
        ),
    };

    write_output(args.output.as_deref(), &output)
}

/// Analyzes the dataset and draws the chart described by `config`.
///
/// # Errors
/// Returns `Config` if the chart options are invalid.
pub fn render_chart(dataset: &Dataset, config: &Config) -> Result<RenderedChart> {
    let options = config.chart_options();
    let analysis = analyze(dataset.values(), options.constrain)?;
    log_outliers(&analysis.summary);

    let chart = BoxChart::new(options)?;
    let mut port = SvgPort::new().with_tooltips(config.chart.tooltips);
    chart.draw(&analysis, &mut port);
    Ok(port.finish())
}

pub(crate) fn log_outliers(summary: &crate::stats::Summary) {
    let outliers = summary.outlier_count();
    if summary.constrained && outliers > 0 {
        tracing::info!(
            outliers,
            lower_fence = summary.stats.lower_fence,
            upper_fence = summary.stats.upper_fence,
            "excluded values outside the fences"
        );
    }
    tracing::info!(
        count = summary.count,
        q1 = summary.stats.q1,
        median = summary.stats.q2,
        q3 = summary.stats.q3,
        "computed summary"
    );
}

fn read_page(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| BoxChartError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Applies command-line flags on top of the loaded configuration.
pub fn apply_cli_overrides(config: &mut Config, args: &RenderArgs) {
    if let Some(node_id) = &args.node_id {
        config.chart.node_id.clone_from(node_id);
    }
    if let Some(title) = &args.title {
        config.chart.title = Some(title.clone());
    }
    if let Some(width) = args.width {
        config.chart.width = width;
    }
    if let Some(height) = args.height {
        config.chart.height = height;
    }
    if let Some(box_height) = args.box_height {
        config.chart.box_height = box_height;
    }
    config.chart.constrain |= args.constrain;
    config.chart.table |= args.table;
    config.chart.tooltips |= args.tooltips;
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
