pub mod config;
mod context;
pub mod init;
pub mod inspect;
pub mod render;

pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use context::{load_config, load_config_with, write_output};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use inspect::{run_inspect, run_inspect_impl};
pub use render::{apply_overrides, render_chart, render_document, run_render, run_render_impl};
