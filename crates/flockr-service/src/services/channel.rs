//! Channel service
//!
//! Membership, ownership and history of a single channel.

use flockr_core::{ChannelId, DomainError, Registry, UserId};
use tracing::{info, instrument};

use crate::dto::{ChannelDetailsResponse, MemberResponse, MessagesPageResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::{require_member, require_moderator, require_owner_authority};

/// Channel service
pub struct ChannelService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChannelService<'a> {
    /// Create a new ChannelService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add `u_id` to the channel on behalf of a member
    ///
    /// Inviting someone who is already a member changes nothing.
    #[instrument(skip(self, token))]
    pub fn invite(&self, token: &str, channel_id: ChannelId, u_id: UserId) -> ServiceResult<()> {
        let mut state = self.ctx.state();
        let caller = self.ctx.authenticate(&state, token)?;
        let channel = state.channel(channel_id)?;
        state.user(u_id)?;
        require_member(channel, caller)?;

        if state.channel_mut(channel_id)?.add_member(u_id) {
            info!(channel_id = %channel_id, user_id = %u_id, "User invited to channel");
        }
        Ok(())
    }

    /// Name and member lists of a channel
    #[instrument(skip(self, token))]
    pub fn details(&self, token: &str, channel_id: ChannelId) -> ServiceResult<ChannelDetailsResponse> {
        let state = self.ctx.state();
        let caller = self.ctx.authenticate(&state, token)?;
        let channel = state.channel(channel_id)?;
        require_member(channel, caller)?;

        let members = |ids: &flockr_core::MemberSet| -> Vec<MemberResponse> {
            ids.iter()
                .filter_map(|id| state.resolve_user_by_id(id))
                .map(MemberResponse::from)
                .collect()
        };

        Ok(ChannelDetailsResponse {
            name: channel.name.clone(),
            owner_members: members(&channel.owner_members),
            all_members: members(&channel.all_members),
        })
    }

    /// Up to fifty messages, newest first, skipping the `start` newest
    #[instrument(skip(self, token))]
    pub fn messages(
        &self,
        token: &str,
        channel_id: ChannelId,
        start: i64,
    ) -> ServiceResult<MessagesPageResponse> {
        let state = self.ctx.state();
        let caller = self.ctx.authenticate(&state, token)?;
        let channel = state.channel(channel_id)?;
        require_member(channel, caller)?;

        let page = channel.recent_page(start)?;
        Ok(MessagesPageResponse::for_viewer(&page, caller.id))
    }

    /// Leave a channel, giving up ownership too
    #[instrument(skip(self, token))]
    pub fn leave(&self, token: &str, channel_id: ChannelId) -> ServiceResult<()> {
        let mut state = self.ctx.state();
        let caller = self.ctx.authenticate(&state, token)?;
        let caller_id = caller.id;
        require_member(state.channel(channel_id)?, caller)?;

        state.channel_mut(channel_id)?.remove_member(caller_id);
        info!(channel_id = %channel_id, user_id = %caller_id, "User left channel");
        Ok(())
    }

    /// Join a public channel; global owners may also join private ones
    #[instrument(skip(self, token))]
    pub fn join(&self, token: &str, channel_id: ChannelId) -> ServiceResult<()> {
        let mut state = self.ctx.state();
        let caller = self.ctx.authenticate(&state, token)?;
        let caller_id = caller.id;
        let channel = state.channel(channel_id)?;
        if !channel.is_public() && !caller.is_global_owner() {
            return Err(DomainError::PrivateChannel.into());
        }

        if state.channel_mut(channel_id)?.add_member(caller_id) {
            info!(channel_id = %channel_id, user_id = %caller_id, "User joined channel");
        }
        Ok(())
    }

    /// Make a member an owner of the channel
    ///
    /// An unknown target and one outside the channel are both reported
    /// before the caller's authority.
    #[instrument(skip(self, token))]
    pub fn add_owner(&self, token: &str, channel_id: ChannelId, u_id: UserId) -> ServiceResult<()> {
        let mut state = self.ctx.state();
        let caller = self.ctx.authenticate(&state, token)?;
        let channel = state.channel(channel_id)?;
        state.target(u_id)?;
        if !channel.is_member(u_id) {
            return Err(DomainError::InvalidTarget(u_id).into());
        }
        require_owner_authority(channel, caller)?;

        state.channel_mut(channel_id)?.add_owner(u_id)?;
        info!(channel_id = %channel_id, user_id = %u_id, "Channel owner added");
        Ok(())
    }

    /// Demote an owner of the channel to a plain member
    #[instrument(skip(self, token))]
    pub fn remove_owner(&self, token: &str, channel_id: ChannelId, u_id: UserId) -> ServiceResult<()> {
        let mut state = self.ctx.state();
        let caller = self.ctx.authenticate(&state, token)?;
        let channel = state.channel(channel_id)?;
        state.target(u_id)?;
        require_owner_authority(channel, caller)?;

        state.channel_mut(channel_id)?.remove_owner(u_id)?;
        info!(channel_id = %channel_id, user_id = %u_id, "Channel owner removed");
        Ok(())
    }

    /// Remove a non-owner member from the channel
    #[instrument(skip(self, token))]
    pub fn kick(&self, token: &str, channel_id: ChannelId, u_id: UserId) -> ServiceResult<()> {
        let mut state = self.ctx.state();
        let caller = self.ctx.authenticate(&state, token)?;
        let channel = state.channel(channel_id)?;
        state.target(u_id)?;
        require_member(channel, caller)?;
        require_moderator(channel, caller)?;

        if channel.is_owner(u_id) {
            return Err(DomainError::CannotKickOwner(u_id).into());
        }
        if !channel.is_member(u_id) {
            return Err(DomainError::TargetNotMember(u_id).into());
        }

        state.channel_mut(channel_id)?.remove_member(u_id);
        info!(channel_id = %channel_id, user_id = %u_id, "User kicked from channel");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{context, create_channel, register};
    use crate::ServiceError;

    #[test]
    fn test_invite_checks_in_order() {
        let (ctx, _) = context();
        let owner = register(&ctx, "owner@gmail.com");
        let outsider = register(&ctx, "outsider@gmail.com");
        let channel_id = create_channel(&ctx, &owner.token, "general", true);
        let service = ChannelService::new(&ctx);

        assert!(service.invite("bad", ChannelId::new(99), UserId::new(99)).unwrap_err().is_access());
        assert!(service.invite(&owner.token, ChannelId::new(99), outsider.u_id).unwrap_err().is_input());
        assert!(service.invite(&owner.token, channel_id, UserId::new(99)).unwrap_err().is_input());
        assert!(service.invite(&outsider.token, channel_id, outsider.u_id).unwrap_err().is_access());

        service.invite(&owner.token, channel_id, outsider.u_id).unwrap();
        service.invite(&owner.token, channel_id, outsider.u_id).unwrap();
        let details = service.details(&owner.token, channel_id).unwrap();
        assert_eq!(details.all_members.len(), 2);
    }

    #[test]
    fn test_join_private_channel() {
        let (ctx, _) = context();
        let global_owner = register(&ctx, "owner@gmail.com");
        let member = register(&ctx, "member@gmail.com");
        let channel_id = create_channel(&ctx, &member.token, "secret", false);
        let other = register(&ctx, "other@gmail.com");
        let service = ChannelService::new(&ctx);

        assert!(matches!(
            service.join(&other.token, channel_id),
            Err(ServiceError::Domain(DomainError::PrivateChannel))
        ));
        service.join(&global_owner.token, channel_id).unwrap();
        service.join(&global_owner.token, channel_id).unwrap();

        let details = service.details(&member.token, channel_id).unwrap();
        let ids: Vec<_> = details.all_members.iter().map(|m| m.u_id).collect();
        assert_eq!(ids, vec![member.u_id, global_owner.u_id]);
    }

    #[test]
    fn test_leave_drops_ownership() {
        let (ctx, _) = context();
        let owner = register(&ctx, "owner@gmail.com");
        let channel_id = create_channel(&ctx, &owner.token, "general", true);
        let service = ChannelService::new(&ctx);

        service.leave(&owner.token, channel_id).unwrap();
        assert!(service.leave(&owner.token, channel_id).unwrap_err().is_access());

        let state = ctx.state();
        let channel = state.channel(channel_id).unwrap();
        assert!(channel.all_members.is_empty());
        assert!(channel.owner_members.is_empty());
    }

    #[test]
    fn test_add_and_remove_owner() {
        let (ctx, _) = context();
        let global_owner = register(&ctx, "owner@gmail.com");
        let creator = register(&ctx, "creator@gmail.com");
        let member = register(&ctx, "member@gmail.com");
        let channel_id = create_channel(&ctx, &creator.token, "general", true);
        let service = ChannelService::new(&ctx);

        // Unknown targets and non-members are refused before authority
        assert!(matches!(
            service.add_owner(&creator.token, channel_id, UserId::new(99)),
            Err(ServiceError::Domain(DomainError::InvalidTarget(_)))
        ));
        let err = service.add_owner(&creator.token, channel_id, member.u_id).unwrap_err();
        assert!(err.is_access());
        assert!(matches!(err, ServiceError::Domain(DomainError::InvalidTarget(_))));
        let err = service.add_owner(&member.token, channel_id, UserId::new(99)).unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::InvalidTarget(_))));
        service.join(&member.token, channel_id).unwrap();

        // Plain members have no authority
        assert!(matches!(
            service.add_owner(&member.token, channel_id, member.u_id),
            Err(ServiceError::Domain(DomainError::NotModerator))
        ));

        service.add_owner(&creator.token, channel_id, member.u_id).unwrap();
        assert!(service.add_owner(&creator.token, channel_id, member.u_id).unwrap_err().is_input());
        assert!(service
            .remove_owner(&global_owner.token, channel_id, UserId::new(99))
            .unwrap_err()
            .is_access());

        // A global owner outside the channel can still manage owners
        service.remove_owner(&global_owner.token, channel_id, member.u_id).unwrap();
        assert!(matches!(
            service.remove_owner(&global_owner.token, channel_id, member.u_id),
            Err(ServiceError::Domain(DomainError::NotOwner(_)))
        ));

        let state = ctx.state();
        let channel = state.channel(channel_id).unwrap();
        assert!(channel.owner_members.is_subset(&channel.all_members));
    }

    #[test]
    fn test_kick() {
        let (ctx, _) = context();
        let _global_owner = register(&ctx, "owner@gmail.com");
        let creator = register(&ctx, "creator@gmail.com");
        let member = register(&ctx, "member@gmail.com");
        let outsider = register(&ctx, "outsider@gmail.com");
        let channel_id = create_channel(&ctx, &creator.token, "general", true);
        let service = ChannelService::new(&ctx);
        service.join(&member.token, channel_id).unwrap();

        assert!(matches!(
            service.kick(&creator.token, channel_id, UserId::new(99)),
            Err(ServiceError::Domain(DomainError::InvalidTarget(_)))
        ));
        assert!(service.kick(&member.token, channel_id, creator.u_id).unwrap_err().is_access());
        assert!(service.kick(&outsider.token, channel_id, member.u_id).unwrap_err().is_access());
        assert!(matches!(
            service.kick(&creator.token, channel_id, creator.u_id),
            Err(ServiceError::Domain(DomainError::CannotKickOwner(_)))
        ));
        assert!(matches!(
            service.kick(&creator.token, channel_id, outsider.u_id),
            Err(ServiceError::Domain(DomainError::TargetNotMember(_)))
        ));

        service.kick(&creator.token, channel_id, member.u_id).unwrap();
        assert!(service.details(&member.token, channel_id).unwrap_err().is_access());
    }

    #[test]
    fn test_messages_rejects_bad_start() {
        let (ctx, _) = context();
        let owner = register(&ctx, "owner@gmail.com");
        let channel_id = create_channel(&ctx, &owner.token, "general", true);
        let service = ChannelService::new(&ctx);

        let page = service.messages(&owner.token, channel_id, 0).unwrap();
        assert!(page.messages.is_empty());
        assert_eq!(page.end, -1);
        assert!(service.messages(&owner.token, channel_id, 1).unwrap_err().is_input());
        assert!(service.messages(&owner.token, channel_id, -1).unwrap_err().is_input());
    }
}
