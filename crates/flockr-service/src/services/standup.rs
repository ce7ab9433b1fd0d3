//! Standup service
//!
//! A standup collects short messages for a fixed number of seconds. When it
//! ends, the scheduler posts everything collected as one message from the
//! user who started it.

use chrono::Duration;
use flockr_core::{ChannelId, DomainError, Message, Registry, Standup};
use tracing::{info, instrument};

use crate::dto::{StandupActiveResponse, StandupStartResponse};
use crate::store::Task;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::require_member;

pub struct StandupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StandupService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Start a standup lasting `length` seconds
    #[instrument(skip(self, token))]
    pub fn start(&self, token: &str, channel_id: ChannelId, length: i64) -> ServiceResult<StandupStartResponse> {
        let now = self.ctx.now();
        let mut state = self.ctx.state();
        let caller = self.ctx.authenticate(&state, token)?;
        let caller_id = caller.id;
        let channel = state.channel(channel_id)?;
        require_member(channel, caller)?;

        if length <= 0 {
            return Err(DomainError::InvalidStandupLength(length).into());
        }
        if channel.has_active_standup() {
            return Err(DomainError::StandupAlreadyActive.into());
        }
        let time_finish = Duration::try_seconds(length)
            .and_then(|length| now.checked_add_signed(length))
            .ok_or(DomainError::InvalidStandupLength(length))?;

        state.channel_mut(channel_id)?.standup = Some(Standup::new(channel_id, caller_id, time_finish));
        state.schedule(time_finish, Task::EndStandup { channel_id });

        info!(channel_id = %channel_id, user_id = %caller_id, length, "Standup started");
        Ok(StandupStartResponse {
            time_finish: time_finish.timestamp(),
        })
    }

    /// Whether a standup is running and when it ends
    #[instrument(skip(self, token))]
    pub fn active(&self, token: &str, channel_id: ChannelId) -> ServiceResult<StandupActiveResponse> {
        let state = self.ctx.state();
        let caller = self.ctx.authenticate(&state, token)?;
        let channel = state.channel(channel_id)?;
        require_member(channel, caller)?;

        let time_finish = channel.standup.as_ref().map(|s| s.time_finish.timestamp());
        Ok(StandupActiveResponse {
            is_active: time_finish.is_some(),
            time_finish,
        })
    }

    /// Buffer a message for the running standup
    #[instrument(skip(self, token, message))]
    pub fn send(&self, token: &str, channel_id: ChannelId, message: &str) -> ServiceResult<()> {
        let mut state = self.ctx.state();
        let caller = self.ctx.authenticate(&state, token)?;
        let handle = caller.handle.clone();
        let channel = state.channel(channel_id)?;
        if !channel.has_active_standup() {
            return Err(DomainError::StandupNotActive.into());
        }
        require_member(channel, caller)?;
        Message::validate_body(message)?;

        if let Some(standup) = state.channel_mut(channel_id)?.standup.as_mut() {
            standup.push(handle, message.to_string());
        }
        Ok(())
    }
}
