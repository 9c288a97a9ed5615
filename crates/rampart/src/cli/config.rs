//! Configuration loading for CLI commands.

use rampart_error::RampartResult;
use rampart_guard::GuardConfig;
use std::path::Path;
use tracing::info;

/// Load the guard configuration from `path`, or from the layered defaults.
pub fn load_config(path: Option<&Path>) -> RampartResult<GuardConfig> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration file");
            GuardConfig::from_file(path)
        }
        None => GuardConfig::load(),
    }
}

/// Print the effective configuration as pretty JSON.
pub fn show_config(path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
