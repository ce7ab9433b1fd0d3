//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.
//! Messages need the viewing user to fill in `is_this_user_reacted`.

use flockr_core::{Channel, Message, MessagePage, React, User, UserId};

use super::responses::{
    ChannelSummary, MemberResponse, MessageResponse, MessagesPageResponse, ReactResponse,
    UserProfileResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            u_id: user.id,
            email: user.email.clone(),
            name_first: user.name_first.clone(),
            name_last: user.name_last.clone(),
            handle_str: user.handle.clone(),
            profile_img_url: user.profile_img_url.clone(),
        }
    }
}

impl From<&User> for MemberResponse {
    fn from(user: &User) -> Self {
        Self {
            u_id: user.id,
            name_first: user.name_first.clone(),
            name_last: user.name_last.clone(),
            profile_img_url: user.profile_img_url.clone(),
        }
    }
}

// ============================================================================
// Channel Mappers
// ============================================================================

impl From<&Channel> for ChannelSummary {
    fn from(channel: &Channel) -> Self {
        Self {
            channel_id: channel.id,
            name: channel.name.clone(),
        }
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

impl ReactResponse {
    pub fn for_viewer(react: &React, viewer: UserId) -> Self {
        Self {
            react_id: react.kind,
            u_ids: react.reactors.to_vec(),
            is_this_user_reacted: react.has_reacted(viewer),
        }
    }
}

impl MessageResponse {
    pub fn for_viewer(message: &Message, viewer: UserId) -> Self {
        Self {
            message_id: message.id,
            u_id: message.sender_id,
            message: message.body.clone(),
            time_created: message.time_created.timestamp(),
            reacts: message
                .reacts
                .iter()
                .map(|react| ReactResponse::for_viewer(react, viewer))
                .collect(),
            is_pinned: message.is_pinned,
        }
    }
}

impl MessagesPageResponse {
    pub fn for_viewer(page: &MessagePage<'_>, viewer: UserId) -> Self {
        Self {
            messages: page
                .messages
                .iter()
                .map(|message| MessageResponse::for_viewer(message, viewer))
                .collect(),
            start: page.start,
            end: page.end,
        }
    }
}
