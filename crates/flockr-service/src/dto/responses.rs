//! Response DTOs
//!
//! All response DTOs implement `Serialize`. Ids serialize as plain integers
//! and times as unix seconds.

use flockr_core::{ChannelId, MessageId, ReactKind, UserId};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub u_id: UserId,
    pub token: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LogoutResponse {
    pub is_success: bool,
}

// ============================================================================
// User Responses
// ============================================================================

/// Full user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfileResponse {
    pub u_id: UserId,
    pub email: String,
    pub name_first: String,
    pub name_last: String,
    pub handle_str: String,
    pub profile_img_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user: UserProfileResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsersAllResponse {
    pub users: Vec<UserProfileResponse>,
}

// ============================================================================
// Channel Responses
// ============================================================================

/// Channel member as listed in channel details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberResponse {
    pub u_id: UserId,
    pub name_first: String,
    pub name_last: String,
    pub profile_img_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChannelDetailsResponse {
    pub name: String,
    pub owner_members: Vec<MemberResponse>,
    pub all_members: Vec<MemberResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelSummary {
    pub channel_id: ChannelId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChannelsResponse {
    pub channels: Vec<ChannelSummary>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChannelCreatedResponse {
    pub channel_id: ChannelId,
}

// ============================================================================
// Message Responses
// ============================================================================

/// One react as seen by a particular viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactResponse {
    pub react_id: ReactKind,
    pub u_ids: Vec<UserId>,
    pub is_this_user_reacted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message_id: MessageId,
    pub u_id: UserId,
    pub message: String,
    pub time_created: i64,
    pub reacts: Vec<ReactResponse>,
    pub is_pinned: bool,
}

/// A page of channel history, newest first
#[derive(Debug, Clone, Serialize)]
pub struct MessagesPageResponse {
    pub messages: Vec<MessageResponse>,
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MessageSentResponse {
    pub message_id: MessageId,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub messages: Vec<MessageResponse>,
}

// ============================================================================
// Standup Responses
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StandupStartResponse {
    pub time_finish: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StandupActiveResponse {
    pub is_active: bool,
    pub time_finish: Option<i64>,
}
