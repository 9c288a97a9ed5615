use rampart_core::{
    ActionEvent, ActionKind, ActorId, Directive, DirectiveOutcome, GuildId, IncidentOutcome,
    RoleId, Verdict,
};
use std::collections::BTreeSet;

#[test]
fn action_kind_serializes_snake_case() {
    let json = serde_json::to_string(&ActionKind::RoleChange).unwrap();
    assert_eq!(json, "\"role_change\"");

    let kind: ActionKind = serde_json::from_str("\"channel_change\"").unwrap();
    assert_eq!(kind, ActionKind::ChannelChange);
}

#[test]
fn ids_serialize_transparently() {
    let json = serde_json::to_string(&ActorId::new(42)).unwrap();
    assert_eq!(json, "42");
}

#[test]
fn verdict_contain_detection() {
    assert!(!Verdict::None.is_contain());

    let verdict = Verdict::Contain {
        actor_id: ActorId::new(1),
        guild_id: GuildId::new(2),
        kind: ActionKind::Ban,
        epoch: 7,
    };
    assert!(verdict.is_contain());
}

#[test]
fn directive_names() {
    let revoke = Directive::RevokeMembership {
        guild_id: GuildId::new(1),
        actor_id: ActorId::new(2),
        reason: "test".to_string(),
    };
    assert_eq!(revoke.name(), "revoke_membership");

    let strip = Directive::StripCapabilityRoles {
        guild_id: GuildId::new(1),
        actor_id: ActorId::new(2),
        roles: BTreeSet::from([RoleId::new(3)]),
    };
    assert_eq!(strip.name(), "strip_capability_roles");
}

#[test]
fn outcome_display() {
    assert_eq!(DirectiveOutcome::Ok.to_string(), "ok");
    assert_eq!(DirectiveOutcome::Forbidden.to_string(), "forbidden");
    assert_eq!(IncidentOutcome::Succeeded.to_string(), "succeeded");
}

#[test]
fn event_keeps_attribution() {
    let event = ActionEvent::new(ActorId::new(10), GuildId::new(20), ActionKind::Kick);
    assert_eq!(*event.actor_id(), ActorId::new(10));
    assert_eq!(*event.guild_id(), GuildId::new(20));
    assert_eq!(*event.target_id(), None);
}
