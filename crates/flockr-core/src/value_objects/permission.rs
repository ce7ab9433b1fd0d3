//! Global permission tiers

use serde::{Deserialize, Serialize};

/// Site-wide permission tier of a user
///
/// Stored and exchanged as its numeric `permission_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "i64", into = "i64")]
pub enum PermissionTier {
    /// Owner of the whole Flockr instance; moderates every channel
    GlobalOwner = 1,
    /// Regular member
    #[default]
    Member = 2,
}

impl PermissionTier {
    /// Parse a `permission_id`, returning `None` for unknown values
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Self::GlobalOwner),
            2 => Some(Self::Member),
            _ => None,
        }
    }

    /// Get the numeric `permission_id`
    #[inline]
    pub fn id(self) -> i64 {
        self as i64
    }

    #[inline]
    pub fn is_global_owner(self) -> bool {
        matches!(self, Self::GlobalOwner)
    }
}

impl TryFrom<i64> for PermissionTier {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_id(value).ok_or_else(|| format!("unknown permission_id {value}"))
    }
}

impl From<PermissionTier> for i64 {
    fn from(tier: PermissionTier) -> Self {
        tier.id()
    }
}
