//! Value objects - immutable types that represent domain concepts

mod ids;
mod member_set;
mod permission;
mod react_kind;

pub use ids::{ChannelId, IdGenerator, MessageId, UserId};
pub use member_set::MemberSet;
pub use permission::PermissionTier;
pub use react_kind::ReactKind;
