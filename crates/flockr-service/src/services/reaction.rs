//! Reaction service
//!
//! Handles adding and removing reacts on messages.

use flockr_core::{DomainError, MessageId, ReactKind, Registry, User};
use tracing::{info, instrument};

use crate::store::Store;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// React to a message in a channel the caller belongs to
    #[instrument(skip(self, token))]
    pub fn react(&self, token: &str, message_id: MessageId, react_id: i64) -> ServiceResult<()> {
        let mut state = self.ctx.state();
        let caller_id = self.visible_to_caller(&state, token, message_id)?.id;
        let kind = ReactKind::from_id(react_id).ok_or(DomainError::InvalidReact(react_id))?;

        state.message_mut(message_id)?.add_react(kind, caller_id)?;
        info!(message_id = %message_id, user_id = %caller_id, react_id, "Reaction added");
        Ok(())
    }

    /// Take back a react the caller left
    #[instrument(skip(self, token))]
    pub fn unreact(&self, token: &str, message_id: MessageId, react_id: i64) -> ServiceResult<()> {
        let mut state = self.ctx.state();
        let caller_id = self.visible_to_caller(&state, token, message_id)?.id;
        let kind = ReactKind::from_id(react_id).ok_or(DomainError::InvalidReact(react_id))?;

        state.message_mut(message_id)?.remove_react(kind, caller_id)?;
        info!(message_id = %message_id, user_id = %caller_id, react_id, "Reaction removed");
        Ok(())
    }

    /// Resolve the caller, who must be able to see the message
    ///
    /// A missing message and one in a channel the caller is not in look the
    /// same from outside.
    fn visible_to_caller<'s>(&self, state: &'s Store, token: &str, message_id: MessageId) -> ServiceResult<&'s User> {
        let caller = self.ctx.authenticate(state, token)?;
        match state.message(message_id) {
            Ok((channel, _)) if channel.is_member(caller.id) => Ok(caller),
            _ => Err(DomainError::MessageNotVisible(message_id).into()),
        }
    }
}
