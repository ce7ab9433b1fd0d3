//! Channels service
//!
//! Channel creation and listing.

use flockr_core::{Channel, Visibility};
use tracing::{info, instrument};

use crate::dto::{ChannelCreatedResponse, ChannelSummary, ChannelsResponse, CreateChannelRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct ChannelsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChannelsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a channel owned by the caller
    #[instrument(skip(self, token, request), fields(name = %request.name, is_public = request.is_public))]
    pub fn create(&self, token: &str, request: CreateChannelRequest) -> ServiceResult<ChannelCreatedResponse> {
        let mut state = self.ctx.state();
        let caller_id = self.ctx.authenticate(&state, token)?.id;
        Channel::validate_name(&request.name)?;

        let channel_id = state.next_channel_id();
        state.insert_channel(Channel::new(
            channel_id,
            request.name,
            Visibility::from_is_public(request.is_public),
            caller_id,
        ));

        info!(channel_id = %channel_id, owner_id = %caller_id, "Channel created");
        Ok(ChannelCreatedResponse { channel_id })
    }

    /// Channels the caller belongs to
    #[instrument(skip(self, token))]
    pub fn list(&self, token: &str) -> ServiceResult<ChannelsResponse> {
        let state = self.ctx.state();
        let caller_id = self.ctx.authenticate(&state, token)?.id;

        let channels = state
            .channels()
            .filter(|channel| channel.is_member(caller_id))
            .map(ChannelSummary::from)
            .collect();
        Ok(ChannelsResponse { channels })
    }

    /// Every channel, public or not
    #[instrument(skip(self, token))]
    pub fn list_all(&self, token: &str) -> ServiceResult<ChannelsResponse> {
        let state = self.ctx.state();
        self.ctx.authenticate(&state, token)?;

        let channels = state.channels().map(ChannelSummary::from).collect();
        Ok(ChannelsResponse { channels })
    }
}
