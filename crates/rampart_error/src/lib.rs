//! Error types for the Rampart anti-nuke guard.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use rampart_error::{ConfigError, ConfigErrorKind, RampartResult};
//!
//! fn load() -> RampartResult<u32> {
//!     Err(ConfigError::new(ConfigErrorKind::Parse("not a number".into())))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod platform;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{RampartError, RampartErrorKind, RampartResult};
pub use platform::{PlatformError, PlatformErrorKind, PlatformResult};
