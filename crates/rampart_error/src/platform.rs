//! Errors raised by platform lookups (guild roles, members, owners).

/// Platform failure classes.
///
/// `Forbidden` is kept apart from the other failures because containment
/// reports it differently: the bot is missing privileges and a human has to
/// step in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PlatformErrorKind {
    /// The bot lacks the privilege required for the call.
    #[display("Forbidden: {}", _0)]
    Forbidden(String),

    /// The guild, member or role no longer exists.
    #[display("Not found: {}", _0)]
    NotFound(String),

    /// Any other failed request.
    #[display("Request failed: {}", _0)]
    Request(String),
}

/// Platform error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Platform Error: {} at line {} in {}", kind, line, file)]
pub struct PlatformError {
    /// The specific error kind
    pub kind: PlatformErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl PlatformError {
    /// Create a new platform error with location tracking.
    #[track_caller]
    pub fn new(kind: PlatformErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PlatformErrorKind {
        &self.kind
    }

    /// Whether the platform refused the call for lack of privilege.
    pub fn is_forbidden(&self) -> bool {
        matches!(self.kind, PlatformErrorKind::Forbidden(_))
    }
}

impl From<PlatformErrorKind> for PlatformError {
    #[track_caller]
    fn from(kind: PlatformErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for platform lookups.
pub type PlatformResult<T> = Result<T, PlatformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_detection() {
        let err = PlatformError::new(PlatformErrorKind::Forbidden("missing BAN_MEMBERS".into()));
        assert!(err.is_forbidden());

        let err = PlatformError::new(PlatformErrorKind::Request("timeout".into()));
        assert!(!err.is_forbidden());
    }

    #[test]
    fn test_display_includes_location() {
        let err = PlatformError::new(PlatformErrorKind::NotFound("member 42".into()));
        let text = err.to_string();
        assert!(text.contains("Not found: member 42"));
        assert!(text.contains("platform.rs"));
    }
}
