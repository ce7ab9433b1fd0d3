//! Data transfer objects for service inputs and outputs
//!
//! This module provides:
//! - Request DTOs with validation for user-supplied fields
//! - Response DTOs shaped like the public API
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateChannelRequest, LoginRequest, RegisterRequest, SetEmailRequest, SetHandleRequest,
    SetNameRequest,
};

pub use responses::{
    AuthResponse, ChannelCreatedResponse, ChannelDetailsResponse, ChannelSummary,
    ChannelsResponse, LogoutResponse, MemberResponse, MessageResponse, MessageSentResponse,
    MessagesPageResponse, ReactResponse, SearchResponse, StandupActiveResponse,
    StandupStartResponse, UserProfileResponse, UserResponse, UsersAllResponse,
};
