//! Test helpers for integration tests
//!
//! [`TestApp`] owns a fresh service context over a manual clock, so deferred
//! work is driven by advancing time rather than sleeping.

use std::sync::Arc;

use anyhow::Result;
use flockr_common::{try_init_tracing, AppConfig, JwtService};
use flockr_core::{ChannelId, MessageId, UserId};
use flockr_service::dto::{AuthResponse, CreateChannelRequest, MessageResponse};
use flockr_service::{
    AdminService, AuthService, ChannelService, ChannelsService, ManualClock, MessageService,
    ReactionService, SearchService, ServiceContext, ServiceContextBuilder, StandupService,
    UserService,
};

use crate::fixtures::register_request;

/// A Flockr instance for one test
pub struct TestApp {
    pub ctx: ServiceContext,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Start an empty instance with its clock at the current second
    pub fn start() -> Result<Self> {
        // Another test may have installed the subscriber already
        let _ = try_init_tracing();

        let config = AppConfig::for_testing();
        let clock = Arc::new(ManualClock::starting_now());
        let ctx = ServiceContextBuilder::new()
            .jwt_service(Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry)))
            .clock(clock.clone())
            .build()?;
        Ok(Self { ctx, clock })
    }

    // === Services ===

    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.ctx)
    }

    pub fn channel(&self) -> ChannelService<'_> {
        ChannelService::new(&self.ctx)
    }

    pub fn channels(&self) -> ChannelsService<'_> {
        ChannelsService::new(&self.ctx)
    }

    pub fn message(&self) -> MessageService<'_> {
        MessageService::new(&self.ctx)
    }

    pub fn reaction(&self) -> ReactionService<'_> {
        ReactionService::new(&self.ctx)
    }

    pub fn standup(&self) -> StandupService<'_> {
        StandupService::new(&self.ctx)
    }

    pub fn search(&self) -> SearchService<'_> {
        SearchService::new(&self.ctx)
    }

    pub fn user(&self) -> UserService<'_> {
        UserService::new(&self.ctx)
    }

    pub fn admin(&self) -> AdminService<'_> {
        AdminService::new(&self.ctx)
    }

    // === Shortcuts ===

    /// Register a user named `first last`
    pub fn register(&self, email: &str, first: &str, last: &str) -> Result<AuthResponse> {
        Ok(self.auth().register(register_request(email, first, last))?)
    }

    pub fn create_channel(&self, token: &str, name: &str, is_public: bool) -> Result<ChannelId> {
        let created = self.channels().create(
            token,
            CreateChannelRequest {
                name: name.to_string(),
                is_public,
            },
        )?;
        Ok(created.channel_id)
    }

    pub fn send(&self, token: &str, channel_id: ChannelId, text: &str) -> Result<MessageId> {
        Ok(self.message().send(token, channel_id, text)?.message_id)
    }

    /// First page of a channel's history
    pub fn history(&self, token: &str, channel_id: ChannelId) -> Result<Vec<MessageResponse>> {
        Ok(self.channel().messages(token, channel_id, 0)?.messages)
    }

    /// Current time in unix seconds
    pub fn now(&self) -> i64 {
        self.ctx.now().timestamp()
    }

    /// Check that every owner of `channel_id` is also a member
    pub fn owners_are_members(&self, token: &str, channel_id: ChannelId) -> Result<bool> {
        let details = self.channel().details(token, channel_id)?;
        let members: Vec<UserId> = details.all_members.iter().map(|m| m.u_id).collect();
        Ok(details
            .owner_members
            .iter()
            .all(|owner| members.contains(&owner.u_id)))
    }
}
