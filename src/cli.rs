use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::{ChartFormat, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "boxchart")]
#[command(author, version, about = "Box-and-whisker charts with histogram overlays")]
#[command(long_about = "Render a box-and-whisker chart (quartiles, fences, data points and a \
    histogram curve) for a numeric dataset, or print its statistical summary.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Invalid input or render target not found\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a box chart as HTML or SVG
    Render(RenderArgs),

    /// Print the statistical summary without drawing
    Summary(SummaryArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct RenderArgs {
    /// Dataset file, `-` for standard input
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Id of the element the chart is rendered into (overrides config)
    #[arg(long)]
    pub node_id: Option<String>,

    /// Heading shown above the chart (overrides config)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Chart width in pixels (overrides config)
    #[arg(long)]
    pub width: Option<f64>,

    /// Chart height in pixels (overrides config)
    #[arg(long)]
    pub height: Option<f64>,

    /// Box height in pixels (overrides config)
    #[arg(long)]
    pub box_height: Option<f64>,

    /// Exclude values outside the fences from statistics and points
    #[arg(long)]
    pub constrain: bool,

    /// Show the fence and quartile table
    #[arg(long)]
    pub table: bool,

    /// Attach each point's value as a hover tooltip
    #[arg(long)]
    pub tooltips: bool,

    /// Output format [possible values: html, svg]
    #[arg(short, long, default_value = "html")]
    pub format: ChartFormat,

    /// Insert the chart into the element with `--node-id` in this HTML file
    #[arg(long, conflicts_with = "format")]
    pub into: Option<PathBuf>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Dataset file, `-` for standard input
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exclude values outside the fences from statistics
    #[arg(long)]
    pub constrain: bool,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Omit the histogram bins
    #[arg(long)]
    pub no_histogram: bool,

    /// Include the filtered and plotted values (JSON only)
    #[arg(long)]
    pub values: bool,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".boxchart.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".boxchart.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
