pub mod config;
mod context;
pub mod init;
pub mod render;
pub mod summary;

pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use context::{exit_code_for, load_config, write_output};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use render::{apply_cli_overrides, render_chart, run_render, run_render_impl};
pub use summary::{run_summary, run_summary_impl};
