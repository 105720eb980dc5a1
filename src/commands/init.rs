use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::{BoxChartError, EXIT_SUCCESS, Result};

use super::context::report_error;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs, cli: &Cli) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(BoxChartError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    if !cli.quiet {
        println!("Created configuration file: {}", output_path.display());
    }
    Ok(())
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r##"# boxchart configuration file
version = "1"

[chart]
# Outer chart size in pixels (defaults: 1300 x 320)
width = 1300
height = 320

# Height of the box in pixels (default: 35)
box_height = 35

# Restrict statistics and plotted points to the values inside the fences
constrain = false

# Show the fence and quartile table under the chart
table = false

# Attach each point's value as a hover tooltip
tooltips = false

# Heading shown above the chart
# title = "Response times"

# Id of the element the chart is rendered into (used with --into)
node_id = "box-chart"

[style]
# Colors as #rgb or #rrggbb
histogram_color = "#3498db"
point_color = "#1abc9c"
box_color = "#8e44ad"
axis_color = "#7f8c8d"

point_radius = 5
# 0.0 (transparent) to 1.0 (opaque)
point_opacity = 0.4
"##
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
