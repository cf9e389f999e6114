//! JWT utilities for authentication
//!
//! Every token names the session it was issued for (`sid`). The token
//! signature proves who issued it; the session store decides whether it is
//! still honoured.

use chrono::{Duration, Utc};
use events_core::{Session, SessionId, UserId};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Session the token belongs to
    pub sid: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID
    ///
    /// # Errors
    /// Returns `InvalidToken` if the subject is not a user id
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.sub.parse().map_err(|_| AppError::InvalidToken)
    }

    /// Get the session ID
    ///
    /// # Errors
    /// Returns `InvalidToken` if `sid` is not a session id
    pub fn session_id(&self) -> Result<SessionId, AppError> {
        self.sid.parse().map_err(|_| AppError::InvalidToken)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// A signed bearer token ready to hand to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and token lifetime (seconds)
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Lifetime of issued tokens
    #[must_use]
    pub fn token_ttl(&self) -> Duration {
        Duration::seconds(self.token_expiry)
    }

    /// Sign a token for an opened session. The token expires with the session.
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, session: &Session) -> Result<IssuedToken, AppError> {
        let claims = Claims {
            sub: session.user_id.to_string(),
            sid: session.id.to_string(),
            iat: session.created_at.timestamp(),
            exp: session.expires_at.timestamp(),
        };

        let token = self.encode_claims(&claims)?;

        Ok(IssuedToken {
            token,
            token_type: "Bearer".to_string(),
            expires_in: claims.exp - claims.iat,
        })
    }

    fn encode_claims(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate a JWT token
    ///
    /// # Errors
    /// Returns `TokenExpired` or `InvalidToken`
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}
