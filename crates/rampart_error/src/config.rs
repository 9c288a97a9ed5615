//! Configuration error types.

/// What went wrong while loading guard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A source could not be read or merged.
    #[display("Failed to build configuration: {_0}")]
    Load(String),

    /// The merged values do not fit the configuration shape.
    #[display("Failed to parse configuration: {_0}")]
    Parse(String),

    /// A numeric setting is below its minimum.
    #[display("{key} must be at least {minimum}")]
    BelowMinimum {
        /// Offending key, as written in `rampart.toml`
        key: &'static str,
        /// Smallest accepted value
        minimum: u64,
    },
}

/// Configuration error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific error kind
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use rampart_error::{ConfigError, ConfigErrorKind};
    ///
    /// let err = ConfigError::new(ConfigErrorKind::BelowMinimum {
    ///     key: "time_window_secs",
    ///     minimum: 1,
    /// });
    /// assert!(err.to_string().contains("time_window_secs must be at least 1"));
    /// ```
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }

    /// Name of the key that failed a range check, if that is what failed.
    pub fn key(&self) -> Option<&'static str> {
        match self.kind {
            ConfigErrorKind::BelowMinimum { key, .. } => Some(key),
            _ => None,
        }
    }
}

impl From<ConfigErrorKind> for ConfigError {
    #[track_caller]
    fn from(kind: ConfigErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_minimum_names_key() {
        let err = ConfigError::new(ConfigErrorKind::BelowMinimum {
            key: "action_threshold",
            minimum: 1,
        });
        assert_eq!(err.key(), Some("action_threshold"));
        assert!(err.to_string().contains("action_threshold must be at least 1"));
    }

    #[test]
    fn test_load_failure_has_no_key() {
        let err = ConfigError::new(ConfigErrorKind::Load("missing file".into()));
        assert_eq!(err.key(), None);
        assert!(err.to_string().contains("Failed to build configuration: missing file"));
        assert!(err.to_string().contains("config.rs"));
    }
}
