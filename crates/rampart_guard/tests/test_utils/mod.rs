//! Test utilities for guard integration tests.

pub mod mock_platform;

#[allow(unused_imports)]
pub use mock_platform::MockPlatform;

use rampart_core::{ActionEvent, ActionKind, ActorId, GuildId};
use rampart_guard::GuardConfig;

/// Guild used by every test.
#[allow(dead_code)]
pub const GUILD: GuildId = GuildId::new(1_000);

/// Owner of [`GUILD`].
#[allow(dead_code)]
pub const OWNER: ActorId = ActorId::new(1);

/// Configured operator.
#[allow(dead_code)]
pub const OPERATOR: ActorId = ActorId::new(2);

/// Actor that goes rogue.
#[allow(dead_code)]
pub const ATTACKER: ActorId = ActorId::new(66);

/// Threshold 5, window 10s, [`OPERATOR`] exempt.
#[allow(dead_code)]
pub fn test_config() -> GuardConfig {
    GuardConfig::default().with_exempt_id(OPERATOR)
}

/// An event in [`GUILD`].
#[allow(dead_code)]
pub fn event(actor_id: ActorId, kind: ActionKind) -> ActionEvent {
    ActionEvent::new(actor_id, GUILD, kind)
}
