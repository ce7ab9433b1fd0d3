//! Admin service
//!
//! Global permission changes and the full state reset.

use flockr_core::{DomainError, PermissionTier, Registry, UserId};
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::require_global_owner;

pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Set the global permission tier of `u_id`
    ///
    /// `permission_id` is 1 for a global owner and 2 for a member. Owners
    /// may demote themselves, including the last one.
    #[instrument(skip(self, token))]
    pub fn userpermission_change(&self, token: &str, u_id: UserId, permission_id: i64) -> ServiceResult<()> {
        let mut state = self.ctx.state();
        let caller = self.ctx.authenticate(&state, token)?;
        let caller_id = caller.id;
        state.user(u_id)?;
        let permission =
            PermissionTier::from_id(permission_id).ok_or(DomainError::InvalidPermission(permission_id))?;
        require_global_owner(caller)?;

        state.user_mut(u_id)?.permission = permission;
        info!(user_id = %u_id, changed_by = %caller_id, permission_id, "Permission changed");
        Ok(())
    }

    /// Drop every user, channel, message, session and pending task
    ///
    /// Id sequences restart, so the next registered user is again a global
    /// owner.
    #[instrument(skip(self))]
    pub fn clear(&self) {
        self.ctx.state().clear();
        warn!("State cleared");
    }
}
