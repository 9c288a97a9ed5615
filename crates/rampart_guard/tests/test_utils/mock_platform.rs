//! Recording platform with scriptable answers.

use async_trait::async_trait;
use parking_lot::Mutex;
use rampart_core::{ActorId, Directive, DirectiveOutcome, GuildId, RoleId};
use rampart_error::{PlatformError, PlatformErrorKind, PlatformResult};
use rampart_guard::GuildPlatform;
use std::collections::{BTreeSet, VecDeque};
use std::time::Duration;

/// In-memory [`GuildPlatform`] that records every directive.
#[derive(Debug)]
pub struct MockPlatform {
    owner: Mutex<Option<ActorId>>,
    owner_script: Mutex<VecDeque<Option<ActorId>>>,
    roles: Mutex<Result<BTreeSet<RoleId>, PlatformErrorKind>>,
    revoke: Mutex<DirectiveOutcome>,
    strip: Mutex<DirectiveOutcome>,
    notify: Mutex<DirectiveOutcome>,
    latency: Mutex<Option<Duration>>,
    directives: Mutex<Vec<Directive>>,
}

#[allow(dead_code)]
impl MockPlatform {
    /// Everything succeeds; `owner` owns every guild.
    pub fn new(owner: Option<ActorId>) -> Self {
        Self {
            owner: Mutex::new(owner),
            owner_script: Mutex::new(VecDeque::new()),
            roles: Mutex::new(Ok(BTreeSet::new())),
            revoke: Mutex::new(DirectiveOutcome::Ok),
            strip: Mutex::new(DirectiveOutcome::Ok),
            notify: Mutex::new(DirectiveOutcome::Ok),
            latency: Mutex::new(None),
            directives: Mutex::new(Vec::new()),
        }
    }

    /// Answer the next owner lookups from `answers` before falling back.
    pub fn script_owner(&self, answers: impl IntoIterator<Item = Option<ActorId>>) {
        self.owner_script.lock().extend(answers);
    }

    /// Roles reported for every actor.
    pub fn set_roles(&self, roles: impl IntoIterator<Item = u64>) {
        *self.roles.lock() = Ok(roles.into_iter().map(RoleId::new).collect());
    }

    /// Make the role lookup fail.
    pub fn fail_roles(&self, kind: PlatformErrorKind) {
        *self.roles.lock() = Err(kind);
    }

    /// Answer for membership revocation.
    pub fn set_revoke(&self, outcome: DirectiveOutcome) {
        *self.revoke.lock() = outcome;
    }

    /// Answer for role stripping.
    pub fn set_strip(&self, outcome: DirectiveOutcome) {
        *self.strip.lock() = outcome;
    }

    /// Answer for owner notification.
    pub fn set_notify(&self, outcome: DirectiveOutcome) {
        *self.notify.lock() = outcome;
    }

    /// Delay every directive.
    pub fn set_latency(&self, latency: Duration) {
        *self.latency.lock() = Some(latency);
    }

    /// Directives executed so far, in order.
    pub fn directives(&self) -> Vec<Directive> {
        self.directives.lock().clone()
    }

    /// Names of executed directives, in order.
    pub fn directive_names(&self) -> Vec<&'static str> {
        self.directives.lock().iter().map(Directive::name).collect()
    }

    /// Number of membership revocations issued.
    pub fn revocations(&self) -> usize {
        self.directives
            .lock()
            .iter()
            .filter(|d| matches!(d, Directive::RevokeMembership { .. }))
            .count()
    }

    /// Text of every notification sent.
    pub fn notifications(&self) -> Vec<String> {
        self.directives
            .lock()
            .iter()
            .filter_map(|d| match d {
                Directive::NotifyResponsibleParty { message, .. } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl GuildPlatform for MockPlatform {
    async fn guild_owner(&self, _guild_id: GuildId) -> Option<ActorId> {
        if let Some(answer) = self.owner_script.lock().pop_front() {
            return answer;
        }
        *self.owner.lock()
    }

    async fn capability_roles(
        &self,
        _guild_id: GuildId,
        _actor_id: ActorId,
    ) -> PlatformResult<BTreeSet<RoleId>> {
        self.roles.lock().clone().map_err(PlatformError::new)
    }

    async fn execute(&self, directive: &Directive) -> DirectiveOutcome {
        let latency = *self.latency.lock();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        self.directives.lock().push(directive.clone());

        match directive {
            Directive::RevokeMembership { .. } => self.revoke.lock().clone(),
            Directive::StripCapabilityRoles { .. } => self.strip.lock().clone(),
            Directive::NotifyResponsibleParty { .. } => self.notify.lock().clone(),
        }
    }
}
