//! Message entity - a message owned by a channel, with reacts and pin state

use chrono::{DateTime, Utc};

use super::React;
use crate::error::DomainError;
use crate::value_objects::{ChannelId, MessageId, ReactKind, UserId};

/// Longest message body accepted from a sender, in characters
pub const MAX_MESSAGE_LENGTH: usize = 1000;

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub channel_id: ChannelId,
    pub sender_id: UserId,
    pub body: String,
    pub time_created: DateTime<Utc>,
    pub reacts: Vec<React>,
    pub is_pinned: bool,
}

impl Message {
    /// Create a new unpinned Message without reacts
    pub fn new(
        id: MessageId,
        channel_id: ChannelId,
        sender_id: UserId,
        body: String,
        time_created: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            channel_id,
            sender_id,
            body,
            time_created,
            reacts: Vec::new(),
            is_pinned: false,
        }
    }

    /// Check that a body is between 1 and [`MAX_MESSAGE_LENGTH`] characters
    pub fn validate_body(body: &str) -> Result<(), DomainError> {
        let len = body.chars().count();
        if len == 0 || len > MAX_MESSAGE_LENGTH {
            return Err(DomainError::MessageLength {
                len,
                max: MAX_MESSAGE_LENGTH,
            });
        }
        Ok(())
    }

    /// Replace the body in place
    pub fn edit(&mut self, body: String) {
        self.body = body;
    }

    /// Case-sensitive substring match on the body
    #[inline]
    pub fn matches(&self, query: &str) -> bool {
        self.body.contains(query)
    }

    pub fn react(&self, kind: ReactKind) -> Option<&React> {
        self.reacts.iter().find(|r| r.kind == kind)
    }

    /// Add `user_id` as a reactor of `kind`
    pub fn add_react(&mut self, kind: ReactKind, user_id: UserId) -> Result<(), DomainError> {
        match self.reacts.iter_mut().find(|r| r.kind == kind) {
            Some(react) => {
                if !react.reactors.insert(user_id) {
                    return Err(DomainError::AlreadyReacted(kind.id()));
                }
            }
            None => self.reacts.push(React::new(kind, user_id)),
        }
        Ok(())
    }

    /// Remove `user_id` from the reactors of `kind`
    ///
    /// A react left without reactors stays on the message with an empty
    /// reactor list.
    pub fn remove_react(&mut self, kind: ReactKind, user_id: UserId) -> Result<(), DomainError> {
        let react = self
            .reacts
            .iter_mut()
            .find(|r| r.kind == kind && !r.reactors.is_empty())
            .ok_or(DomainError::NoReacts(kind.id()))?;

        if !react.reactors.remove(user_id) {
            return Err(DomainError::NotReacted(kind.id()));
        }
        Ok(())
    }

    pub fn pin(&mut self) -> Result<(), DomainError> {
        if self.is_pinned {
            return Err(DomainError::AlreadyPinned);
        }
        self.is_pinned = true;
        Ok(())
    }

    pub fn unpin(&mut self) -> Result<(), DomainError> {
        if !self.is_pinned {
            return Err(DomainError::AlreadyUnpinned);
        }
        self.is_pinned = false;
        Ok(())
    }
}
