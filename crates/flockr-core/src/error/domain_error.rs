//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ChannelId, MessageId, UserId};

/// The two failure classes callers can observe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A caller-supplied identifier or value is invalid, or a domain
    /// precondition does not hold
    Input,
    /// The caller is not authenticated, or lacks membership/ownership
    Access,
}

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Authentication
    // =========================================================================
    #[error("Invalid token")]
    InvalidToken,

    // =========================================================================
    // Unknown identifiers
    // =========================================================================
    #[error("Invalid u_id: {0}")]
    UserNotFound(UserId),

    #[error("Invalid channel_id: {0}")]
    ChannelNotFound(ChannelId),

    #[error("Invalid message_id: {0}")]
    MessageNotFound(MessageId),

    /// Message missing or in a channel the caller cannot see
    #[error("Message {0} is not visible to the authorised user")]
    MessageNotVisible(MessageId),

    #[error("Invalid react_id: {0}")]
    InvalidReact(i64),

    #[error("Invalid permission_id: {0}")]
    InvalidPermission(i64),

    // =========================================================================
    // Validation
    // =========================================================================
    #[error("Message must be between 1 and {max} characters (got {len})")]
    MessageLength { len: usize, max: usize },

    #[error("Channel name must be between 1 and {max} characters")]
    ChannelNameLength { max: usize },

    #[error("Invalid start index {start} for {total} messages")]
    InvalidStart { start: i64, total: usize },

    #[error("Standup length must be positive (got {0})")]
    InvalidStandupLength(i64),

    #[error("Scheduled time {0} is in the past")]
    TimeInPast(i64),

    #[error("Validation error: {0}")]
    Validation(String),

    // =========================================================================
    // Registry conflicts
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Handle already in use")]
    HandleAlreadyExists,

    #[error("Email is not registered")]
    UnknownEmail,

    #[error("Incorrect password")]
    IncorrectPassword,

    // =========================================================================
    // Membership and ownership preconditions
    // =========================================================================
    #[error("User {0} is not a member of the channel")]
    TargetNotMember(UserId),

    /// Target of an ownership change or kick is unknown, or for `addowner`
    /// not in the channel
    #[error("Invalid u_id {0} or user is not a member of the channel")]
    InvalidTarget(UserId),

    #[error("User {0} is already an owner of the channel")]
    AlreadyOwner(UserId),

    #[error("User {0} is not an owner of the channel")]
    NotOwner(UserId),

    #[error("User {0} is an owner and cannot be kicked")]
    CannotKickOwner(UserId),

    // =========================================================================
    // Message state preconditions
    // =========================================================================
    #[error("Already reacted with react_id {0}")]
    AlreadyReacted(i64),

    #[error("Message has no reacts with react_id {0}")]
    NoReacts(i64),

    #[error("Not reacted with react_id {0}")]
    NotReacted(i64),

    #[error("Message is already pinned")]
    AlreadyPinned,

    #[error("Message is already unpinned")]
    AlreadyUnpinned,

    // =========================================================================
    // Standups
    // =========================================================================
    #[error("A standup is already active in this channel")]
    StandupAlreadyActive,

    #[error("No standup is active in this channel")]
    StandupNotActive,

    // =========================================================================
    // Authorization
    // =========================================================================
    #[error("Authorised user is not a member of the channel")]
    NotChannelMember,

    #[error("Authorised user is not an owner of the channel or of Flockr")]
    NotModerator,

    #[error("Authorised user cannot modify this message")]
    NotMessageAuthor,

    #[error("Channel is private")]
    PrivateChannel,

    #[error("Authorised user is not an owner of Flockr")]
    NotGlobalOwner,
}

impl DomainError {
    /// Classify the error as an input or access failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidToken
            | Self::MessageNotVisible(_)
            | Self::NotChannelMember
            | Self::NotModerator
            | Self::NotMessageAuthor
            | Self::InvalidTarget(_)
            | Self::PrivateChannel
            | Self::NotGlobalOwner => ErrorKind::Access,
            _ => ErrorKind::Input,
        }
    }

    /// Get an error code string for responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ChannelNotFound(_) => "UNKNOWN_CHANNEL",
            Self::MessageNotFound(_) | Self::MessageNotVisible(_) => "UNKNOWN_MESSAGE",
            Self::InvalidReact(_) => "UNKNOWN_REACT",
            Self::InvalidPermission(_) => "UNKNOWN_PERMISSION",
            Self::MessageLength { .. } => "INVALID_MESSAGE_LENGTH",
            Self::ChannelNameLength { .. } => "INVALID_CHANNEL_NAME",
            Self::InvalidStart { .. } => "INVALID_START",
            Self::InvalidStandupLength(_) => "INVALID_STANDUP_LENGTH",
            Self::TimeInPast(_) => "TIME_IN_PAST",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::HandleAlreadyExists => "HANDLE_ALREADY_EXISTS",
            Self::UnknownEmail => "UNKNOWN_EMAIL",
            Self::IncorrectPassword => "INCORRECT_PASSWORD",
            Self::TargetNotMember(_) => "TARGET_NOT_MEMBER",
            Self::InvalidTarget(_) => "INVALID_TARGET",
            Self::AlreadyOwner(_) => "ALREADY_OWNER",
            Self::NotOwner(_) => "NOT_OWNER",
            Self::CannotKickOwner(_) => "CANNOT_KICK_OWNER",
            Self::AlreadyReacted(_) => "ALREADY_REACTED",
            Self::NoReacts(_) => "NO_REACTS",
            Self::NotReacted(_) => "NOT_REACTED",
            Self::AlreadyPinned => "ALREADY_PINNED",
            Self::AlreadyUnpinned => "ALREADY_UNPINNED",
            Self::StandupAlreadyActive => "STANDUP_ALREADY_ACTIVE",
            Self::StandupNotActive => "STANDUP_NOT_ACTIVE",
            Self::NotChannelMember => "NOT_CHANNEL_MEMBER",
            Self::NotModerator => "MISSING_PERMISSIONS",
            Self::NotMessageAuthor => "NOT_MESSAGE_AUTHOR",
            Self::PrivateChannel => "PRIVATE_CHANNEL",
            Self::NotGlobalOwner => "NOT_GLOBAL_OWNER",
        }
    }

    #[inline]
    pub fn is_input(&self) -> bool {
        self.kind() == ErrorKind::Input
    }

    #[inline]
    pub fn is_access(&self) -> bool {
        self.kind() == ErrorKind::Access
    }
}
