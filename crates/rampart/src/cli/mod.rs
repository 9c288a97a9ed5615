//! Command-line interface module.

mod commands;
mod config;
mod run;

pub use commands::{Cli, Commands};
pub use config::{load_config, show_config};
pub use run::run_bot;
