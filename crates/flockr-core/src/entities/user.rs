//! User entity - represents a registered Flockr user

use crate::value_objects::{PermissionTier, UserId};

/// Longest handle a user may hold
pub const MAX_HANDLE_LENGTH: usize = 20;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name_first: String,
    pub name_last: String,
    pub handle: String,
    pub permission: PermissionTier,
    pub password_hash: String,
    pub profile_img_url: String,
}

impl User {
    /// Create a new User with an empty profile image
    pub fn new(
        id: UserId,
        email: String,
        name_first: String,
        name_last: String,
        handle: String,
        permission: PermissionTier,
        password_hash: String,
    ) -> Self {
        Self {
            id,
            email,
            name_first,
            name_last,
            handle,
            permission,
            password_hash,
            profile_img_url: String::new(),
        }
    }

    /// Check if user is an owner of the whole Flockr instance
    #[inline]
    pub fn is_global_owner(&self) -> bool {
        self.permission.is_global_owner()
    }

    pub fn set_name(&mut self, name_first: String, name_last: String) {
        self.name_first = name_first;
        self.name_last = name_last;
    }

    /// Derive the default handle for a name pair
    ///
    /// Lowercased concatenation of both names with whitespace dropped,
    /// cut to [`MAX_HANDLE_LENGTH`] characters.
    pub fn base_handle(name_first: &str, name_last: &str) -> String {
        name_first
            .chars()
            .chain(name_last.chars())
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .take(MAX_HANDLE_LENGTH)
            .collect()
    }

    /// Make `base` distinct by appending `suffix`, trimming `base` so the
    /// result still fits in [`MAX_HANDLE_LENGTH`] characters
    pub fn suffixed_handle(base: &str, suffix: usize) -> String {
        let suffix = suffix.to_string();
        let keep = MAX_HANDLE_LENGTH.saturating_sub(suffix.len());
        let mut handle: String = base.chars().take(keep).collect();
        handle.push_str(&suffix);
        handle
    }
}
