//! # flockr-core
//!
//! Domain layer containing entities, value objects, domain errors and the
//! registry lookup trait. Token handling and state locking live in the
//! crates above it.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Channel, Message, MessagePage, React, Standup, StandupLine, User, Visibility,
    MAX_CHANNEL_NAME_LENGTH, MAX_HANDLE_LENGTH, MAX_MESSAGE_LENGTH, PAGE_SIZE,
};
pub use error::{DomainError, ErrorKind};
pub use traits::{LookupResult, Registry};
pub use value_objects::{
    ChannelId, IdGenerator, MemberSet, MessageId, PermissionTier, ReactKind, UserId,
};
