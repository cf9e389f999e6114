//! Service context - dependency container for services
//!
//! Holds the repositories, the session store and the token service.

use std::sync::Arc;

use events_common::auth::{JwtService, PasswordService};
use events_core::traits::{
    EventRepository, RegistrationRepository, SessionStore, UserRepository,
};
use events_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Repositories and the session store are trait objects, so tests can swap
/// in in-memory implementations.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (readiness checks)
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    event_repo: Arc<dyn EventRepository>,
    registration_repo: Arc<dyn RegistrationRepository>,

    // Sessions
    session_store: Arc<dyn SessionStore>,

    // Auth
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,
}

impl ServiceContext {
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        event_repo: Arc<dyn EventRepository>,
        registration_repo: Arc<dyn RegistrationRepository>,
        session_store: Arc<dyn SessionStore>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            event_repo,
            registration_repo,
            session_store,
            jwt_service,
            password_service: PasswordService::new(),
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    pub fn registration_repo(&self) -> &dyn RegistrationRepository {
        self.registration_repo.as_ref()
    }

    pub fn session_store(&self) -> &dyn SessionStore {
        self.session_store.as_ref()
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    registration_repo: Option<Arc<dyn RegistrationRepository>>,
    session_store: Option<Arc<dyn SessionStore>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn registration_repo(mut self, repo: Arc<dyn RegistrationRepository>) -> Self {
        self.registration_repo = Some(repo);
        self
    }

    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext::new(
            required(self.pool, "pool")?,
            required(self.user_repo, "user_repo")?,
            required(self.event_repo, "event_repo")?,
            required(self.registration_repo, "registration_repo")?,
            required(self.session_store, "session_store")?,
            required(self.jwt_service, "jwt_service")?,
        ))
    }
}
