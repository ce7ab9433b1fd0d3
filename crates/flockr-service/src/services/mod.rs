//! Service layer - business logic and use case orchestration
//!
//! Each service borrows a [`ServiceContext`] and implements one group of
//! operations. Every operation takes the state lock once, authenticates the
//! caller inside it, and applies due scheduled work before anything else.

pub mod admin;
pub mod auth;
pub mod channel;
pub mod channels;
pub mod context;
pub mod error;
pub mod message;
pub mod permission;
pub mod reaction;
pub mod search;
pub mod standup;
pub mod user;

pub use admin::AdminService;
pub use auth::AuthService;
pub use channel::ChannelService;
pub use channels::ChannelsService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use reaction::ReactionService;
pub use search::SearchService;
pub use standup::StandupService;
pub use user::UserService;
