//! Service context - dependency container for services
//!
//! Holds the shared state, the JWT service and the clock. Cloning a context
//! is cheap and every clone sees the same state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use flockr_common::{AppConfig, AppError, JwtService};
use flockr_core::{DomainError, Registry, User};
use parking_lot::{Mutex, MutexGuard};
use tracing::debug;

use super::error::{ServiceError, ServiceResult};
use crate::clock::{Clock, SystemClock};
use crate::store::Store;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    store: Arc<Mutex<Store>>,
    jwt_service: Arc<JwtService>,
    clock: Arc<dyn Clock>,
}

impl ServiceContext {
    /// Create a context over an empty store
    pub fn new(jwt_service: Arc<JwtService>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(Mutex::new(Store::new())),
            jwt_service,
            clock,
        }
    }

    /// Create a wall-clock context from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.token_expiry);
        Self::new(Arc::new(jwt_service), Arc::new(SystemClock))
    }

    // === Dependencies ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Current time according to the context clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // === State ===

    /// Lock the store, first applying every task that has come due
    pub fn state(&self) -> MutexGuard<'_, Store> {
        let mut store = self.store.lock();
        let fired = store.fire_due(self.clock.now());
        if fired > 0 {
            debug!(fired, "Applied due tasks");
        }
        store
    }

    /// Apply due tasks without running an operation. Returns how many ran.
    pub fn run_due_tasks(&self) -> usize {
        self.store.lock().fire_due(self.clock.now())
    }

    /// Number of scheduled tasks still waiting, without applying any
    pub fn pending_tasks(&self) -> usize {
        self.store.lock().pending_tasks()
    }

    /// Resolve the caller behind `token`
    ///
    /// The token must carry a valid signature, must not be expired, and must
    /// name a session that is still open in `store`.
    pub fn authenticate<'s>(&self, store: &'s Store, token: &str) -> ServiceResult<&'s User> {
        let claims = self.jwt_service.decode_token(token)?;
        let user = store.authenticated(token)?;
        if claims.user_id()? != user.id {
            return Err(DomainError::InvalidToken.into());
        }
        Ok(user)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("store", &"Store")
            .field("jwt_service", &self.jwt_service)
            .field("clock", &self.clock)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    jwt_service: Option<Arc<JwtService>>,
    clock: Option<Arc<dyn Clock>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Use `clock` instead of the wall clock
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns a configuration error if no JWT service was given
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let jwt_service = self
            .jwt_service
            .ok_or_else(|| ServiceError::App(AppError::Config("jwt_service is required".to_string())))?;
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        Ok(ServiceContext::new(jwt_service, clock))
    }
}
