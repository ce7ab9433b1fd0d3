//! Channel entity - owns its membership lists, message log and standup

use serde::{Deserialize, Serialize};

use super::{Message, Standup, User};
use crate::error::DomainError;
use crate::value_objects::{ChannelId, MemberSet, MessageId, UserId};

/// Number of messages returned per page of channel history
pub const PAGE_SIZE: usize = 50;

/// Longest channel name accepted on creation, in characters
pub const MAX_CHANNEL_NAME_LENGTH: usize = 20;

/// Channel visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    /// Joinable only by invitation or by a global owner
    Private,
}

impl Visibility {
    #[inline]
    #[must_use]
    pub fn from_is_public(is_public: bool) -> Self {
        if is_public {
            Self::Public
        } else {
            Self::Private
        }
    }

    #[inline]
    #[must_use]
    pub fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

/// One page of channel history, most recent message first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePage<'a> {
    pub messages: Vec<&'a Message>,
    pub start: i64,
    /// Offset of the next page, or `-1` once the oldest message is included
    pub end: i64,
}

/// Channel entity
///
/// `owner_members` is always a subset of `all_members`; every mutation below
/// keeps it that way. `messages` is held oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    pub visibility: Visibility,
    pub all_members: MemberSet,
    pub owner_members: MemberSet,
    pub messages: Vec<Message>,
    pub standup: Option<Standup>,
}

impl Channel {
    /// Create a channel whose creator is its first member and owner
    #[must_use]
    pub fn new(id: ChannelId, name: String, visibility: Visibility, creator: UserId) -> Self {
        let mut all_members = MemberSet::new();
        all_members.insert(creator);
        let mut owner_members = MemberSet::new();
        owner_members.insert(creator);

        Self {
            id,
            name,
            visibility,
            all_members,
            owner_members,
            messages: Vec::new(),
            standup: None,
        }
    }

    /// Check that a channel name is between 1 and [`MAX_CHANNEL_NAME_LENGTH`] characters
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        let len = name.chars().count();
        if len == 0 || len > MAX_CHANNEL_NAME_LENGTH {
            return Err(DomainError::ChannelNameLength {
                max: MAX_CHANNEL_NAME_LENGTH,
            });
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    #[inline]
    #[must_use]
    pub fn is_member(&self, user_id: UserId) -> bool {
        self.all_members.contains(user_id)
    }

    #[inline]
    #[must_use]
    pub fn is_owner(&self, user_id: UserId) -> bool {
        self.owner_members.contains(user_id)
    }

    /// Channel owners and global owners may moderate a channel
    #[must_use]
    pub fn can_moderate(&self, user: &User) -> bool {
        user.is_global_owner() || self.is_owner(user.id)
    }

    /// Fail with [`DomainError::NotChannelMember`] unless `user_id` is a member
    pub fn ensure_member(&self, user_id: UserId) -> Result<(), DomainError> {
        if self.is_member(user_id) {
            Ok(())
        } else {
            Err(DomainError::NotChannelMember)
        }
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Append a member. Returns `false` if already a member.
    pub fn add_member(&mut self, user_id: UserId) -> bool {
        self.all_members.insert(user_id)
    }

    /// Remove a member from both lists. Returns `false` if not a member.
    pub fn remove_member(&mut self, user_id: UserId) -> bool {
        self.owner_members.remove(user_id);
        self.all_members.remove(user_id)
    }

    /// Promote an existing member to owner
    pub fn add_owner(&mut self, user_id: UserId) -> Result<(), DomainError> {
        if !self.is_member(user_id) {
            return Err(DomainError::InvalidTarget(user_id));
        }
        if !self.owner_members.insert(user_id) {
            return Err(DomainError::AlreadyOwner(user_id));
        }
        Ok(())
    }

    /// Demote an owner back to a plain member
    pub fn remove_owner(&mut self, user_id: UserId) -> Result<(), DomainError> {
        if !self.owner_members.remove(user_id) {
            return Err(DomainError::NotOwner(user_id));
        }
        Ok(())
    }

    // =========================================================================
    // Messages
    // =========================================================================

    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    #[must_use]
    pub fn message(&self, message_id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == message_id)
    }

    pub fn message_mut(&mut self, message_id: MessageId) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| m.id == message_id)
    }

    /// Remove a message, keeping the order of the rest
    pub fn remove_message(&mut self, message_id: MessageId) -> Option<Message> {
        let position = self.messages.iter().position(|m| m.id == message_id)?;
        Some(self.messages.remove(position))
    }

    /// Page through history newest first, skipping `start` messages
    ///
    /// `start` may equal the number of messages, which yields an empty page.
    /// Recency is storage order, so messages delivered late still count as
    /// the newest.
    pub fn recent_page(&self, start: i64) -> Result<MessagePage<'_>, DomainError> {
        let total = self.messages.len();
        let offset = usize::try_from(start)
            .ok()
            .filter(|offset| *offset <= total)
            .ok_or(DomainError::InvalidStart { start, total })?;

        let messages: Vec<&Message> = self
            .messages
            .iter()
            .rev()
            .skip(offset)
            .take(PAGE_SIZE)
            .collect();

        let end = if messages.is_empty() || offset + PAGE_SIZE >= total {
            -1
        } else {
            start + PAGE_SIZE as i64
        };

        Ok(MessagePage {
            messages,
            start,
            end,
        })
    }

    /// Every message whose body contains `query`, oldest first
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Message> + 'a {
        self.messages.iter().filter(move |m| m.matches(query))
    }

    // =========================================================================
    // Standup
    // =========================================================================

    #[inline]
    #[must_use]
    pub fn has_active_standup(&self) -> bool {
        self.standup.is_some()
    }
}
