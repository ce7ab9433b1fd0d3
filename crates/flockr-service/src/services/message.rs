//! Message service
//!
//! Handles sending, scheduled sending, editing, removal and pinning.

use chrono::DateTime;
use flockr_core::{ChannelId, DomainError, Message, MessageId, Registry, MAX_MESSAGE_LENGTH};
use tracing::{info, instrument};

use crate::dto::MessageSentResponse;
use crate::store::{Store, Task};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::{require_member, require_moderator};

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a message to a channel the caller belongs to
    #[instrument(skip(self, token, message))]
    pub fn send(&self, token: &str, channel_id: ChannelId, message: &str) -> ServiceResult<MessageSentResponse> {
        let now = self.ctx.now();
        let mut state = self.ctx.state();
        let caller = self.ctx.authenticate(&state, token)?;
        let caller_id = caller.id;
        require_member(state.channel(channel_id)?, caller)?;
        Message::validate_body(message)?;

        let message_id = state.next_message_id();
        state.push_message(Message::new(message_id, channel_id, caller_id, message.to_string(), now))?;

        info!(message_id = %message_id, channel_id = %channel_id, "Message created");
        Ok(MessageSentResponse { message_id })
    }

    /// Reserve a message id now and post the message at `time_sent`
    ///
    /// The message shows up at the end of the channel once its time comes,
    /// stamped with `time_sent`, whether or not the sender is still a member.
    #[instrument(skip(self, token, message))]
    pub fn send_later(
        &self,
        token: &str,
        channel_id: ChannelId,
        message: &str,
        time_sent: i64,
    ) -> ServiceResult<MessageSentResponse> {
        let now = self.ctx.now();
        let mut state = self.ctx.state();
        let caller = self.ctx.authenticate(&state, token)?;
        let caller_id = caller.id;
        require_member(state.channel(channel_id)?, caller)?;
        Message::validate_body(message)?;

        if time_sent < now.timestamp() {
            return Err(DomainError::TimeInPast(time_sent).into());
        }
        let due = DateTime::from_timestamp(time_sent, 0)
            .ok_or_else(|| DomainError::Validation(format!("time_sent {time_sent} is out of range")))?;

        let message_id = state.next_message_id();
        state.schedule(
            due,
            Task::DeliverMessage(Message::new(message_id, channel_id, caller_id, message.to_string(), due)),
        );

        info!(message_id = %message_id, channel_id = %channel_id, time_sent, "Message scheduled");
        Ok(MessageSentResponse { message_id })
    }

    /// Delete a message sent by the caller or in a channel they moderate
    #[instrument(skip(self, token))]
    pub fn remove(&self, token: &str, message_id: MessageId) -> ServiceResult<()> {
        let mut state = self.ctx.state();
        self.require_editable(&state, token, message_id)?;

        state.delete_message(message_id)?;
        info!(message_id = %message_id, "Message deleted");
        Ok(())
    }

    /// Replace the text of a message in place
    ///
    /// Empty text removes the message instead.
    #[instrument(skip(self, token, message))]
    pub fn edit(&self, token: &str, message_id: MessageId, message: &str) -> ServiceResult<()> {
        let mut state = self.ctx.state();
        self.require_editable(&state, token, message_id)?;

        if message.is_empty() {
            state.delete_message(message_id)?;
            info!(message_id = %message_id, "Message deleted by empty edit");
            return Ok(());
        }

        let len = message.chars().count();
        if len > MAX_MESSAGE_LENGTH {
            return Err(DomainError::MessageLength {
                len,
                max: MAX_MESSAGE_LENGTH,
            }
            .into());
        }

        state.message_mut(message_id)?.edit(message.to_string());
        info!(message_id = %message_id, "Message updated");
        Ok(())
    }

    /// Pin a message in a channel the caller moderates
    #[instrument(skip(self, token))]
    pub fn pin(&self, token: &str, message_id: MessageId) -> ServiceResult<()> {
        let mut state = self.ctx.state();
        self.require_pin_authority(&state, token, message_id)?;

        state.message_mut(message_id)?.pin()?;
        info!(message_id = %message_id, "Message pinned");
        Ok(())
    }

    #[instrument(skip(self, token))]
    pub fn unpin(&self, token: &str, message_id: MessageId) -> ServiceResult<()> {
        let mut state = self.ctx.state();
        self.require_pin_authority(&state, token, message_id)?;

        state.message_mut(message_id)?.unpin()?;
        info!(message_id = %message_id, "Message unpinned");
        Ok(())
    }

    // The message is resolved before the token for remove, edit, pin and unpin

    fn require_editable(&self, state: &Store, token: &str, message_id: MessageId) -> ServiceResult<()> {
        let (channel, message) = state.message(message_id)?;
        let caller = self.ctx.authenticate(state, token)?;
        if message.sender_id != caller.id && !channel.can_moderate(caller) {
            return Err(DomainError::NotMessageAuthor.into());
        }
        Ok(())
    }

    fn require_pin_authority(&self, state: &Store, token: &str, message_id: MessageId) -> ServiceResult<()> {
        let (channel, _) = state.message(message_id)?;
        let caller = self.ctx.authenticate(state, token)?;
        require_member(channel, caller)?;
        require_moderator(channel, caller)?;
        Ok(())
    }
}
