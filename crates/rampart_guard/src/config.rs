//! Guard configuration.
//!
//! Values are layered with the `config` crate:
//! - Bundled defaults (`include_str!` of `rampart.toml`)
//! - `~/.config/rampart/rampart.toml` (optional)
//! - `./rampart.toml` (optional)
//! - `RAMPART_*` environment variables (highest precedence)

use crate::ExemptionSet;
use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use rampart_core::ActorId;
use rampart_error::{ConfigError, ConfigErrorKind, RampartError, RampartResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, instrument};

/// Detection thresholds and exemptions.
///
/// # Example
///
/// ```toml
/// action_threshold = 5
/// time_window_secs = 10
/// exempt_ids = [80351110224678912]
/// sweep_interval_secs = 60
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct GuardConfig {
    /// Same-kind actions inside one window that trigger containment
    #[serde(default = "default_action_threshold")]
    action_threshold: u32,

    /// Window length in seconds
    #[serde(default = "default_time_window_secs")]
    time_window_secs: u64,

    /// Operator ids that are never counted
    #[serde(default)]
    exempt_ids: BTreeSet<ActorId>,

    /// How often stale counter records are dropped, in seconds
    #[serde(default = "default_sweep_interval_secs")]
    sweep_interval_secs: u64,
}

fn default_action_threshold() -> u32 {
    5
}

fn default_time_window_secs() -> u64 {
    10
}

fn default_sweep_interval_secs() -> u64 {
    60
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            action_threshold: default_action_threshold(),
            time_window_secs: default_time_window_secs(),
            exempt_ids: BTreeSet::new(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

impl GuardConfig {
    /// Load configuration with precedence: env > current dir > home dir > bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed or the result
    /// fails [`GuardConfig::validate`].
    #[instrument]
    pub fn load() -> RampartResult<Self> {
        debug!("Loading guard configuration");

        const DEFAULT_CONFIG: &str = include_str!("../../../rampart.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/rampart/rampart.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("rampart").required(false))
            .add_source(Self::environment());

        Self::finish(builder)
    }

    /// Load configuration from a specific file, still honoring `RAMPART_*` overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> RampartResult<Self> {
        debug!("Loading guard configuration from file");

        let builder = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(Self::environment());

        Self::finish(builder)
    }

    fn environment() -> Environment {
        Environment::with_prefix("RAMPART")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("exempt_ids")
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> RampartResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                RampartError::from(ConfigError::new(ConfigErrorKind::Load(e.to_string())))
            })?
            .try_deserialize()
            .map_err(|e| {
                RampartError::from(ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold, window or sweep interval is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("action_threshold", u64::from(self.action_threshold)),
            ("time_window_secs", self.time_window_secs),
            ("sweep_interval_secs", self.sweep_interval_secs),
        ];
        match checks.into_iter().find(|(_, value)| *value < 1) {
            Some((key, _)) => Err(ConfigError::new(ConfigErrorKind::BelowMinimum {
                key,
                minimum: 1,
            })),
            None => Ok(()),
        }
    }

    /// Add one operator id to the exemption list.
    pub fn with_exempt_id(mut self, actor_id: ActorId) -> Self {
        self.exempt_ids.insert(actor_id);
        self
    }

    /// Window length.
    pub fn time_window(&self) -> Duration {
        Duration::from_secs(self.time_window_secs)
    }

    /// Sweep period.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Build the static exemption set.
    pub fn exemptions(&self) -> ExemptionSet {
        ExemptionSet::new(self.exempt_ids.iter().copied())
    }
}
