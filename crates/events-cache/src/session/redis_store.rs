//! Login sessions in Redis.
//!
//! Each session is stored under `session:{id}` with a TTL equal to its
//! remaining lifetime. A set under `user_sessions:{user_id}` indexes a user's
//! sessions so they can all be revoked when the account is deleted.

use async_trait::async_trait;
use chrono::Utc;
use events_core::{DomainError, RepoResult, Session, SessionId, SessionStore, UserId};
use redis::AsyncCommands;
use tracing::{debug, info, instrument, warn};

use crate::pool::RedisPool;

/// Key prefix for sessions
const SESSION_PREFIX: &str = "session:";

/// Key prefix for the per-user session index
const USER_SESSIONS_PREFIX: &str = "user_sessions:";

fn cache_err(e: redis::RedisError) -> DomainError {
    DomainError::CacheError(e.to_string())
}

/// Redis-backed `SessionStore`
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: RedisPool,
}

impl RedisSessionStore {
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    fn key(id: SessionId) -> String {
        format!("{SESSION_PREFIX}{id}")
    }

    fn user_key(user_id: UserId) -> String {
        format!("{USER_SESSIONS_PREFIX}{user_id}")
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    #[instrument(skip(self, session), fields(session_id = %session.id, user_id = %session.user_id))]
    async fn create(&self, session: &Session) -> RepoResult<()> {
        let ttl = session.remaining_secs(Utc::now()).max(1);
        self.pool.set(&Self::key(session.id), session, Some(ttl)).await?;

        // The index lives as long as the newest session
        let user_key = Self::user_key(session.user_id);
        let mut conn = self.pool.get().await?;
        let ttl_secs = i64::try_from(ttl).unwrap_or(i64::MAX);
        redis::pipe()
            .sadd(&user_key, session.id.to_string())
            .ignore()
            .expire(&user_key, ttl_secs)
            .ignore()
            .query_async::<()>(&mut conn)
            .await
            .map_err(cache_err)?;

        debug!(ttl, "Stored session");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(&self, id: SessionId) -> RepoResult<Option<Session>> {
        let session: Option<Session> = self.pool.get_value(&Self::key(id)).await?;

        // Redis expiry is second-granular; do not trust a key in its last second
        Ok(session.filter(|s| !s.is_expired(Utc::now())))
    }

    #[instrument(skip(self))]
    async fn revoke(&self, id: SessionId) -> RepoResult<()> {
        if let Some(session) = self.pool.get_value::<Session>(&Self::key(id)).await? {
            let mut conn = self.pool.get().await?;
            conn.srem::<_, _, ()>(Self::user_key(session.user_id), id.to_string())
                .await
                .map_err(cache_err)?;
        }

        if self.pool.delete(&Self::key(id)).await? {
            debug!("Revoked session");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn revoke_all_for_user(&self, user_id: UserId) -> RepoResult<usize> {
        let user_key = Self::user_key(user_id);
        let mut conn = self.pool.get().await?;

        let ids: Vec<String> = conn
            .smembers(&user_key)
            .await
            .map_err(cache_err)?;

        let keys: Vec<String> = ids.iter().map(|id| format!("{SESSION_PREFIX}{id}")).collect();
        let removed = self.pool.delete_many(&keys).await?;

        conn.del::<_, ()>(&user_key)
            .await
            .map_err(cache_err)?;

        info!(removed, "Revoked all sessions for user");
        Ok(removed)
    }

    async fn health_check(&self) -> bool {
        match self.pool.health_check().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Redis health check failed");
                false
            }
        }
    }
}
