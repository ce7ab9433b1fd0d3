//! Authentication service
//!
//! Handles user registration, login, and logout.

use flockr_common::auth::{hash_password, validate_password_strength, verify_password};
use flockr_core::{DomainError, PermissionTier, Registry, User, UserId};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{AuthResponse, LoginRequest, LogoutResponse, RegisterRequest};
use crate::store::Store;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and open a session for them
    ///
    /// The first user ever registered becomes a global owner.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        request.validate()?;
        validate_password_strength(&request.password)?;

        // Hash before taking the lock
        let password_hash = hash_password(&request.password)?;

        let mut state = self.ctx.state();
        if state.find_user_by_email(&request.email).is_some() {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let handle = state.unique_handle(&User::base_handle(&request.name_first, &request.name_last));
        let permission = if state.user_count() == 0 {
            PermissionTier::GlobalOwner
        } else {
            PermissionTier::Member
        };

        let user_id = state.next_user_id();
        state.insert_user(User::new(
            user_id,
            request.email,
            request.name_first,
            request.name_last,
            handle,
            permission,
            password_hash,
        ));

        let token = self.open_session(&mut state, user_id)?;

        info!(user_id = %user_id, permission_id = permission.id(), "User registered successfully");

        Ok(AuthResponse { u_id: user_id, token })
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let (user_id, password_hash) = {
            let state = self.ctx.state();
            let user = state.find_user_by_email(&request.email).ok_or_else(|| {
                warn!("Login failed: unknown email");
                DomainError::UnknownEmail
            })?;
            (user.id, user.password_hash.clone())
        };

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user_id, "Login failed: invalid password");
            return Err(DomainError::IncorrectPassword.into());
        }

        let mut state = self.ctx.state();
        // The user may have been cleared while the lock was released
        if state.resolve_user_by_id(user_id).is_none() {
            return Err(DomainError::UnknownEmail.into());
        }
        let token = self.open_session(&mut state, user_id)?;

        info!(user_id = %user_id, "User logged in successfully");

        Ok(AuthResponse { u_id: user_id, token })
    }

    /// Close the session behind `token`
    ///
    /// Never fails; `is_success` is false when no live session matched.
    #[instrument(skip(self, token))]
    pub fn logout(&self, token: &str) -> LogoutResponse {
        let mut state = self.ctx.state();
        let is_success = state.close_session(token);
        if is_success {
            info!("User logged out");
        }
        LogoutResponse { is_success }
    }

    fn open_session(&self, state: &mut Store, user_id: UserId) -> ServiceResult<String> {
        let issued = self.ctx.jwt_service().generate_token(user_id)?;
        state.open_session(issued.token.clone(), user_id);
        Ok(issued.token)
    }
}
