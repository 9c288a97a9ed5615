//! Opaque platform identities.

use serde::{Deserialize, Serialize};

/// Identity of the account that performed an action.
///
/// # Examples
///
/// ```
/// use rampart_core::ActorId;
///
/// let actor = ActorId::from(80351110224678912u64);
/// assert_eq!(actor.to_string(), "80351110224678912");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct ActorId(u64);

impl ActorId {
    /// Wrap a raw platform id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw platform id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Identity of a guild. All counters are scoped per guild.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct GuildId(u64);

impl GuildId {
    /// Wrap a raw platform id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw platform id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Identity of a role grant inside a guild.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct RoleId(u64);

impl RoleId {
    /// Wrap a raw platform id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw platform id.
    pub const fn get(self) -> u64 {
        self.0
    }
}
