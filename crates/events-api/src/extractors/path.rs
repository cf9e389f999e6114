//! Path parameter extractors
//!
//! Ids are parsed into typed identifiers; anything that is not a positive
//! integer is rejected with 400.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use events_core::{EventId, UserId};
use serde::Deserialize;

use crate::response::ApiError;

#[derive(Debug, Deserialize)]
struct RawEventPath {
    event_id: String,
}

#[derive(Debug, Deserialize)]
struct RawUserPath {
    user_id: String,
}

#[derive(Debug, Deserialize)]
struct RawEventUserPath {
    event_id: String,
    user_id: String,
}

async fn raw<T, S>(parts: &mut Parts, state: &S) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned + Send,
    S: Send + Sync,
{
    let Path(inner) = Path::<T>::from_request_parts(parts, state)
        .await
        .map_err(|e| ApiError::invalid_path(e.to_string()))?;
    Ok(inner)
}

fn parse<T: std::str::FromStr>(value: &str, name: &str) -> Result<T, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {name} format")))
}

/// `/events/:event_id/...`
#[derive(Debug, Clone, Copy)]
pub struct EventPath(pub EventId);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for EventPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path: RawEventPath = raw(parts, state).await?;
        Ok(Self(parse(&path.event_id, "event_id")?))
    }
}

/// `/users/:user_id`
#[derive(Debug, Clone, Copy)]
pub struct UserPath(pub UserId);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for UserPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path: RawUserPath = raw(parts, state).await?;
        Ok(Self(parse(&path.user_id, "user_id")?))
    }
}

/// `/events/:event_id/users/:user_id`
#[derive(Debug, Clone, Copy)]
pub struct EventUserPath {
    pub event_id: EventId,
    pub user_id: UserId,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for EventUserPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path: RawEventUserPath = raw(parts, state).await?;
        Ok(Self {
            event_id: parse(&path.event_id, "event_id")?,
            user_id: parse(&path.user_id, "user_id")?,
        })
    }
}
