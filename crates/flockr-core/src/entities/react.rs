//! React entity - a typed acknowledgment left on a message by a set of users

use crate::value_objects::{MemberSet, ReactKind, UserId};

/// React entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct React {
    pub kind: ReactKind,
    pub reactors: MemberSet,
}

impl React {
    /// Create a react with its first reactor
    pub fn new(kind: ReactKind, first: UserId) -> Self {
        let mut reactors = MemberSet::new();
        reactors.insert(first);
        Self { kind, reactors }
    }

    #[inline]
    pub fn has_reacted(&self, user_id: UserId) -> bool {
        self.reactors.contains(user_id)
    }
}
