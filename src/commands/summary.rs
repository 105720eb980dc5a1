use crate::cli::{Cli, SummaryArgs};
use crate::dataset::DatasetSource;
use crate::output::{
    OutputFormat, SummaryFormatter, SummaryJsonFormatter, SummaryMarkdownFormatter,
    SummaryTextFormatter,
};
use crate::stats::analyze;
use crate::{EXIT_SUCCESS, Result};

use super::context::{load_config, report_error, write_output};
use super::render::log_outliers;

#[must_use]
pub fn run_summary(args: &SummaryArgs, cli: &Cli) -> i32 {
    match run_summary_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Computes and prints the statistical summary of the dataset.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or the dataset is invalid.
pub fn run_summary_impl(args: &SummaryArgs, cli: &Cli) -> Result<()> {
    let config = load_config(args.config.as_deref(), cli.no_config)?.config;
    let constrain = args.constrain || config.chart.constrain;

    let dataset = DatasetSource::from_arg(&args.input).load()?;
    let analysis = analyze(dataset.values(), constrain)?;
    log_outliers(&analysis.summary);

    let output = formatter(args).format(&analysis)?;
    write_output(args.output.as_deref(), &output)
}

fn formatter(args: &SummaryArgs) -> Box<dyn SummaryFormatter> {
    if args.values && args.format != OutputFormat::Json {
        tracing::warn!("--values only applies to JSON output");
    }
    match args.format {
        OutputFormat::Text => {
            Box::new(SummaryTextFormatter::new().with_histogram(!args.no_histogram))
        }
        OutputFormat::Json => {
            if args.no_histogram {
                tracing::warn!("JSON output always includes the histogram");
            }
            Box::new(SummaryJsonFormatter::new().with_values(args.values))
        }
        OutputFormat::Markdown => {
            Box::new(SummaryMarkdownFormatter::new().with_histogram(!args.no_histogram))
        }
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
