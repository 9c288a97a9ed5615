//! Serenity event handler that feeds the guard.

use crate::{SerenityPlatform, normalize};
use rampart_guard::{AntiNuke, GuardConfig, GuardHandle, GuardService};
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::gateway::{GatewayIntents, Ready};
use serenity::model::guild::audit_log::AuditLogEntry;
use serenity::model::id::GuildId;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

/// Queue depth between the gateway and the guard service.
const EVENT_QUEUE_CAPACITY: usize = 1024;

/// Event handler for the anti-nuke bot.
///
/// The guard is started on the first `ready` event, once the HTTP client and
/// cache are available.
pub struct GuardHandler {
    config: GuardConfig,
    guard: OnceLock<GuardHandle>,
}

impl GuardHandler {
    /// Create a handler that will run a guard with `config`.
    pub fn new(config: GuardConfig) -> Self {
        Self {
            config,
            guard: OnceLock::new(),
        }
    }

    /// Required gateway intents for the bot.
    ///
    /// Audit-log entries are delivered under `GUILD_MODERATION`.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS | GatewayIntents::GUILD_MODERATION
    }

    /// Handle to the running guard service, once started.
    pub fn guard(&self) -> Option<&GuardHandle> {
        self.guard.get()
    }

    fn start_guard(&self, ctx: &Context) -> GuardHandle {
        let platform = SerenityPlatform::new(Arc::clone(&ctx.http), Arc::clone(&ctx.cache));
        let guard = Arc::new(AntiNuke::new(&self.config, Arc::new(platform)));
        let (service, handle) =
            GuardService::new(guard, self.config.sweep_interval(), EVENT_QUEUE_CAPACITY);
        tokio::spawn(service.run());
        handle
    }
}

#[async_trait]
impl EventHandler for GuardHandler {
    /// Called when the bot successfully connects to Discord.
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            bot_user = %ready.user.name,
            bot_id = %ready.user.id,
            guilds = ready.guilds.len(),
            "Bot connected to Discord"
        );

        if self.guard.get().is_some() {
            debug!("Guard already running after reconnect");
            return;
        }

        let handle = self.start_guard(&ctx);
        if self.guard.set(handle).is_err() {
            warn!("Guard was started concurrently; keeping the first");
        } else {
            info!(
                threshold = self.config.action_threshold(),
                window_secs = self.config.time_window_secs(),
                exempt = self.config.exempt_ids().len(),
                "Anti-nuke guard armed"
            );
        }
    }

    /// Called for every new audit-log entry in a guild.
    async fn guild_audit_log_entry_create(
        &self,
        ctx: Context,
        entry: AuditLogEntry,
        guild_id: GuildId,
    ) {
        // Containment itself shows up in the audit log.
        if entry.user_id == ctx.cache.current_user().id {
            return;
        }

        let Some(event) = normalize(guild_id, &entry) else {
            return;
        };

        let Some(guard) = self.guard.get() else {
            warn!(%guild_id, "Audit entry before guard started, dropping");
            return;
        };

        debug!(
            %guild_id,
            actor_id = %event.actor_id(),
            kind = %event.kind(),
            "Forwarding action to guard"
        );
        if !guard.submit(event).await {
            warn!(%guild_id, "Guard service stopped, action dropped");
        }
    }
}
