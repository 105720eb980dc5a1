use clap::Parser;
use tracing_subscriber::EnvFilter;

use boxchart::cli::{Cli, Commands};
use boxchart::commands::{run_config, run_init, run_render, run_summary};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Summary(args) => run_summary(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}

/// Default log level for the verbosity flags; `RUST_LOG` takes precedence.
const fn default_level(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("boxchart={}", default_level(verbose, quiet))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
