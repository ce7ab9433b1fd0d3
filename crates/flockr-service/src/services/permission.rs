//! Channel authority checks shared by the services
//!
//! Channel owners and global owners can moderate a channel. Global owners
//! additionally manage ownership without being members.

use flockr_core::{Channel, DomainError, User};
use tracing::debug;

/// Require `user` to be a member of `channel`
pub fn require_member(channel: &Channel, user: &User) -> Result<(), DomainError> {
    channel.ensure_member(user.id).inspect_err(|_| {
        debug!(user_id = %user.id, channel_id = %channel.id, "Caller is not a member");
    })
}

/// Require `user` to moderate `channel`
pub fn require_moderator(channel: &Channel, user: &User) -> Result<(), DomainError> {
    if channel.can_moderate(user) {
        Ok(())
    } else {
        debug!(user_id = %user.id, channel_id = %channel.id, "Caller cannot moderate");
        Err(DomainError::NotModerator)
    }
}

/// Require `user` to be allowed to change the owner list of `channel`
///
/// Global owners always are. Anyone else must be a member and an owner.
pub fn require_owner_authority(channel: &Channel, user: &User) -> Result<(), DomainError> {
    if user.is_global_owner() {
        return Ok(());
    }
    require_member(channel, user)?;
    require_moderator(channel, user)
}

/// Require `user` to be a global owner
pub fn require_global_owner(user: &User) -> Result<(), DomainError> {
    if user.is_global_owner() {
        Ok(())
    } else {
        Err(DomainError::NotGlobalOwner)
    }
}
