//! Domain entities - core business objects

mod channel;
mod message;
mod react;
mod standup;
mod user;

pub use channel::{Channel, MessagePage, Visibility, MAX_CHANNEL_NAME_LENGTH, PAGE_SIZE};
pub use message::{Message, MAX_MESSAGE_LENGTH};
pub use react::React;
pub use standup::{Standup, StandupLine};
pub use user::{User, MAX_HANDLE_LENGTH};
