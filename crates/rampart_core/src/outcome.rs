//! Containment outcomes.

use serde::{Deserialize, Serialize};

/// Overall result of one containment run.
///
/// # Examples
///
/// ```
/// use rampart_core::IncidentOutcome;
///
/// let outcome = IncidentOutcome::Errored("gateway timeout".into());
/// assert_eq!(outcome.to_string(), "errored: gateway timeout");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum IncidentOutcome {
    /// Every containment step went through
    #[display("succeeded")]
    Succeeded,
    /// The bot lacked the privilege to act
    #[display("forbidden")]
    Forbidden,
    /// An unexpected platform error interrupted a step
    #[display("errored: {}", _0)]
    Errored(String),
}
