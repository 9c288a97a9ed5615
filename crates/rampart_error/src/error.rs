//! Top-level error wrapper types.

use crate::{ConfigError, PlatformError};

/// Every error condition a Rampart crate can surface.
///
/// # Examples
///
/// ```
/// use rampart_error::{ConfigError, ConfigErrorKind, RampartError};
///
/// let err: RampartError = ConfigError::new(ConfigErrorKind::Parse("bad threshold".into())).into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum RampartErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Platform lookup error
    #[from(PlatformError)]
    Platform(PlatformError),
}

/// Rampart error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Rampart Error: {}", _0)]
pub struct RampartError(Box<RampartErrorKind>);

impl RampartError {
    /// Create a new error from a kind.
    pub fn new(kind: RampartErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RampartErrorKind {
        &self.0
    }
}

impl<T> From<T> for RampartError
where
    T: Into<RampartErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Rampart operations.
pub type RampartResult<T> = std::result::Result<T, RampartError>;
