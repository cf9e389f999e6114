//! Session store port

use async_trait::async_trait;

use crate::entities::Session;
use crate::traits::RepoResult;
use crate::value_objects::{SessionId, UserId};

/// Server-side record of live sessions. A bearer token is only honoured while
/// its session is present here.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a newly opened session until its expiry
    async fn create(&self, session: &Session) -> RepoResult<()>;

    /// Look up a session; expired or revoked sessions are `None`
    async fn find(&self, id: SessionId) -> RepoResult<Option<Session>>;

    /// Revoke one session. Revoking an unknown session is not an error.
    async fn revoke(&self, id: SessionId) -> RepoResult<()>;

    /// Revoke every session of a user. Returns how many were removed.
    async fn revoke_all_for_user(&self, user_id: UserId) -> RepoResult<usize>;

    /// Check that the backing store is reachable
    async fn health_check(&self) -> bool;
}
