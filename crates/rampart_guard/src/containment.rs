//! Containment of an actor that crossed the threshold.

use crate::{GuardMetrics, GuildPlatform, IncidentNotice, WindowTracker};
use derive_getters::Getters;
use rampart_core::{
    ActionKind, ActorId, Directive, DirectiveOutcome, GuildId, IncidentOutcome, RoleId, Verdict,
};
use rampart_error::PlatformError;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// What happened during one containment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct IncidentReport {
    /// Unique id for correlating logs and notifications
    incident_id: Uuid,
    /// Contained actor
    actor_id: ActorId,
    /// Guild the incident happened in
    guild_id: GuildId,
    /// Kind that reached the threshold
    kind: ActionKind,
    /// Overall result
    outcome: IncidentOutcome,
    /// Result of revoking membership
    revoke: DirectiveOutcome,
    /// Result of stripping capability roles
    strip: DirectiveOutcome,
    /// Roles the actor held when containment started
    stripped_roles: BTreeSet<RoleId>,
    /// Result of notifying the owner, `None` when there was no owner to notify
    notification: Option<DirectiveOutcome>,
}

/// Runs the revoke, strip and notify sequence exactly once per incident.
///
/// Every step is attempted regardless of how the previous one went. The
/// counter record is claimed before any directive is dispatched, so only one
/// of several concurrent verdicts for the same burst proceeds.
#[derive(Debug)]
pub struct ContainmentExecutor<P> {
    platform: Arc<P>,
    tracker: Arc<WindowTracker>,
    metrics: GuardMetrics,
}

impl<P: GuildPlatform> ContainmentExecutor<P> {
    /// Create an executor that claims records from `tracker`.
    pub fn new(platform: Arc<P>, tracker: Arc<WindowTracker>, metrics: GuardMetrics) -> Self {
        Self {
            platform,
            tracker,
            metrics,
        }
    }

    /// Contain the actor named by `verdict`.
    ///
    /// Returns `None` when there is nothing to do: the verdict is
    /// [`Verdict::None`], another caller already claimed the incident, or the
    /// actor turned out to be exempt (for example, ownership was transferred to
    /// them after detection).
    #[instrument(skip(self))]
    pub async fn contain(&self, verdict: Verdict) -> Option<IncidentReport> {
        let Verdict::Contain {
            actor_id,
            guild_id,
            kind,
            epoch,
        } = verdict
        else {
            return None;
        };

        if self.tracker.claim(actor_id, guild_id, epoch).is_none() {
            debug!("Incident already claimed");
            self.metrics.record_duplicate();
            return None;
        }

        let owner = self.platform.guild_owner(guild_id).await;
        if let Some(exemption) = self.tracker.exemptions().check(actor_id, owner) {
            warn!(%exemption, "Actor became exempt before containment, standing down");
            return None;
        }

        let incident_id = Uuid::new_v4();
        info!(%incident_id, "Containing actor");

        // Roles are read before the ban; the member is gone afterwards.
        let roles = self.platform.capability_roles(guild_id, actor_id).await;

        let revoke = self
            .platform
            .execute(&Directive::RevokeMembership {
                guild_id,
                actor_id,
                reason: format!("Automated anti-nuke ban for excessive {}.", kind.plural()),
            })
            .await;
        debug!(%revoke, "Membership revocation finished");

        let (strip, stripped_roles) = match roles {
            Ok(roles) if roles.is_empty() => {
                debug!("No capability roles to strip");
                (DirectiveOutcome::Ok, roles)
            }
            Ok(roles) => {
                let strip = self
                    .platform
                    .execute(&Directive::StripCapabilityRoles {
                        guild_id,
                        actor_id,
                        roles: roles.clone(),
                    })
                    .await;
                debug!(%strip, count = roles.len(), "Role strip finished");
                (strip, roles)
            }
            Err(e) => {
                warn!(error = %e, "Capability role lookup failed");
                (lookup_outcome(&e), BTreeSet::new())
            }
        };

        let outcome = incident_outcome(&revoke, &strip);
        match &outcome {
            IncidentOutcome::Succeeded => info!(%incident_id, "Actor contained"),
            IncidentOutcome::Forbidden => {
                warn!(%incident_id, "Containment refused, bot lacks permissions")
            }
            IncidentOutcome::Errored(detail) => {
                error!(%incident_id, %detail, "Containment interrupted by platform error")
            }
        }
        self.metrics.record_outcome(&outcome);

        let notification = match owner {
            Some(owner) => {
                let message = IncidentNotice::new(actor_id, guild_id, kind, outcome.clone());
                let sent = self
                    .platform
                    .execute(&Directive::NotifyResponsibleParty {
                        guild_id,
                        message: message.to_string(),
                    })
                    .await;
                if !sent.is_ok() {
                    warn!(%owner, result = %sent, "Owner notification failed");
                }
                Some(sent)
            }
            None => {
                warn!("Guild owner unknown, incident not delivered");
                self.metrics.record_owner_unreachable();
                None
            }
        };

        Some(IncidentReport {
            incident_id,
            actor_id,
            guild_id,
            kind,
            outcome,
            revoke,
            strip,
            stripped_roles,
            notification,
        })
    }
}

/// Map a failed lookup onto the directive result it stands in for.
fn lookup_outcome(err: &PlatformError) -> DirectiveOutcome {
    if err.is_forbidden() {
        DirectiveOutcome::Forbidden
    } else {
        DirectiveOutcome::Error(err.kind().to_string())
    }
}

/// The first step that did not go through decides the overall outcome.
fn incident_outcome(revoke: &DirectiveOutcome, strip: &DirectiveOutcome) -> IncidentOutcome {
    [revoke, strip]
        .into_iter()
        .find_map(|step| match step {
            DirectiveOutcome::Ok => None,
            DirectiveOutcome::Forbidden => Some(IncidentOutcome::Forbidden),
            DirectiveOutcome::Error(detail) => Some(IncidentOutcome::Errored(detail.clone())),
        })
        .unwrap_or(IncidentOutcome::Succeeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_error::PlatformErrorKind;

    #[test]
    fn test_all_ok_succeeds() {
        assert_eq!(
            incident_outcome(&DirectiveOutcome::Ok, &DirectiveOutcome::Ok),
            IncidentOutcome::Succeeded
        );
    }

    #[test]
    fn test_revoke_failure_takes_precedence() {
        let outcome = incident_outcome(
            &DirectiveOutcome::Forbidden,
            &DirectiveOutcome::Error("timeout".into()),
        );
        assert_eq!(outcome, IncidentOutcome::Forbidden);
    }

    #[test]
    fn test_strip_error_surfaces_when_revoke_ok() {
        let outcome = incident_outcome(&DirectiveOutcome::Ok, &DirectiveOutcome::Error("502".into()));
        assert_eq!(outcome, IncidentOutcome::Errored("502".into()));
    }

    #[test]
    fn test_lookup_errors_are_classified() {
        let forbidden = PlatformError::new(PlatformErrorKind::Forbidden("roles".into()));
        assert_eq!(lookup_outcome(&forbidden), DirectiveOutcome::Forbidden);

        let missing = PlatformError::new(PlatformErrorKind::NotFound("member".into()));
        assert_eq!(
            lookup_outcome(&missing),
            DirectiveOutcome::Error("Not found: member".into())
        );
    }
}
