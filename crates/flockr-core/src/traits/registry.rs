//! Registry trait - resolves tokens and identifiers to entities
//!
//! Implementors only answer "found or not". The provided methods turn a miss
//! into the domain error each lookup stands for, so every operation reports
//! unknown identifiers the same way.

use crate::entities::{Channel, Message, User};
use crate::error::DomainError;
use crate::value_objects::{ChannelId, MessageId, UserId};

/// Result type for registry lookups
pub type LookupResult<T> = Result<T, DomainError>;

pub trait Registry {
    /// Find the user holding a live session for `token`
    fn resolve_user_by_token(&self, token: &str) -> Option<UserId>;

    fn resolve_user_by_id(&self, id: UserId) -> Option<&User>;

    fn resolve_channel_by_id(&self, id: ChannelId) -> Option<&Channel>;

    /// Find the channel a message currently lives in
    fn resolve_message_channel(&self, id: MessageId) -> Option<ChannelId>;

    // =========================================================================
    // Provided lookups
    // =========================================================================

    /// Resolve the caller of an operation
    fn authenticated(&self, token: &str) -> LookupResult<&User> {
        self.resolve_user_by_token(token)
            .and_then(|id| self.resolve_user_by_id(id))
            .ok_or(DomainError::InvalidToken)
    }

    fn user(&self, id: UserId) -> LookupResult<&User> {
        self.resolve_user_by_id(id)
            .ok_or(DomainError::UserNotFound(id))
    }

    /// Resolve the user an ownership change or kick is aimed at
    fn target(&self, id: UserId) -> LookupResult<&User> {
        self.resolve_user_by_id(id)
            .ok_or(DomainError::InvalidTarget(id))
    }

    fn channel(&self, id: ChannelId) -> LookupResult<&Channel> {
        self.resolve_channel_by_id(id)
            .ok_or(DomainError::ChannelNotFound(id))
    }

    /// Resolve a message together with the channel that owns it
    fn message(&self, id: MessageId) -> LookupResult<(&Channel, &Message)> {
        self.resolve_message_channel(id)
            .and_then(|channel_id| self.resolve_channel_by_id(channel_id))
            .and_then(|channel| channel.message(id).map(|message| (channel, message)))
            .ok_or(DomainError::MessageNotFound(id))
    }
}
