//! Ordered, duplicate-free set of users
//!
//! Used for channel member lists, owner lists and react reactor lists. Users
//! keep the position they were inserted at; removal preserves the relative
//! order of everyone else.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::UserId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberSet(IndexSet<UserId>);

impl MemberSet {
    pub fn new() -> Self {
        Self(IndexSet::new())
    }

    /// Append a user at the end. Returns `false` if already present.
    pub fn insert(&mut self, user_id: UserId) -> bool {
        self.0.insert(user_id)
    }

    /// Remove a user, shifting later entries down. Returns `false` if absent.
    pub fn remove(&mut self, user_id: UserId) -> bool {
        self.0.shift_remove(&user_id)
    }

    #[inline]
    pub fn contains(&self, user_id: UserId) -> bool {
        self.0.contains(&user_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = UserId> + '_ {
        self.0.iter().copied()
    }

    /// Whether every user in `self` is also in `other`
    pub fn is_subset(&self, other: &MemberSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn to_vec(&self) -> Vec<UserId> {
        self.iter().collect()
    }
}

impl FromIterator<UserId> for MemberSet {
    fn from_iter<I: IntoIterator<Item = UserId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
