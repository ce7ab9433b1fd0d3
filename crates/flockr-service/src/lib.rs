//! # flockr-service
//!
//! Application layer containing the in-memory state, the deferred task
//! scheduler, services and DTOs.

pub mod clock;
pub mod dto;
pub mod runtime;
pub mod services;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use runtime::spawn_scheduler;
pub use services::{
    AdminService, AuthService, ChannelService, ChannelsService, MessageService, ReactionService,
    SearchService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    StandupService, UserService,
};
pub use store::{Scheduler, Store, Task};
