//! User service
//!
//! Profile lookup and updates.

use flockr_core::{DomainError, Registry, UserId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    SetEmailRequest, SetHandleRequest, SetNameRequest, UserProfileResponse, UserResponse,
    UsersAllResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the profile of any registered user
    #[instrument(skip(self, token))]
    pub fn profile(&self, token: &str, u_id: UserId) -> ServiceResult<UserResponse> {
        let state = self.ctx.state();
        self.ctx.authenticate(&state, token)?;
        let user = state.user(u_id)?;
        Ok(UserResponse { user: user.into() })
    }

    #[instrument(skip(self, token, request))]
    pub fn set_name(&self, token: &str, request: SetNameRequest) -> ServiceResult<()> {
        let mut state = self.ctx.state();
        let caller_id = self.ctx.authenticate(&state, token)?.id;
        request.validate()?;

        state
            .user_mut(caller_id)?
            .set_name(request.name_first, request.name_last);
        info!(user_id = %caller_id, "Name updated");
        Ok(())
    }

    /// Change the caller's email to one no other user holds
    #[instrument(skip(self, token, request))]
    pub fn set_email(&self, token: &str, request: SetEmailRequest) -> ServiceResult<()> {
        let mut state = self.ctx.state();
        let caller_id = self.ctx.authenticate(&state, token)?.id;
        request.validate()?;

        if state
            .find_user_by_email(&request.email)
            .is_some_and(|holder| holder.id != caller_id)
        {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        state.user_mut(caller_id)?.email = request.email;
        info!(user_id = %caller_id, "Email updated");
        Ok(())
    }

    /// Change the caller's handle to one no other user holds
    #[instrument(skip(self, token, request), fields(handle = %request.handle_str))]
    pub fn set_handle(&self, token: &str, request: SetHandleRequest) -> ServiceResult<()> {
        let mut state = self.ctx.state();
        let caller_id = self.ctx.authenticate(&state, token)?.id;
        request.validate()?;

        if state
            .find_user_by_handle(&request.handle_str)
            .is_some_and(|holder| holder.id != caller_id)
        {
            return Err(DomainError::HandleAlreadyExists.into());
        }

        state.user_mut(caller_id)?.handle = request.handle_str;
        info!(user_id = %caller_id, "Handle updated");
        Ok(())
    }

    /// Every registered user in registration order
    #[instrument(skip(self, token))]
    pub fn all(&self, token: &str) -> ServiceResult<UsersAllResponse> {
        let state = self.ctx.state();
        self.ctx.authenticate(&state, token)?;

        let users = state.users().map(UserProfileResponse::from).collect();
        Ok(UsersAllResponse { users })
    }
}
