//! JWT-backed admin session tokens.
//!
//! The token embeds the session (id, timestamps, timeout); `exp` is the
//! session's expiry moment, so the inactivity timeout is enforced by
//! signature validation itself. Renewal happens by reissuing after touch.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::admin::AdminSession;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::AdminTokenService;

#[derive(Debug, Serialize, Deserialize)]
struct AdminClaims {
    session: AdminSession,
    exp: u64,
}

/// JWT implementation of AdminTokenService (HS256).
pub struct JwtAdminTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtAdminTokens {
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::default();
        // The expiry IS the inactivity timeout; no grace period.
        validation.leeway = 0;
        validation
    }
}

impl AdminTokenService for JwtAdminTokens {
    fn issue(&self, session: &AdminSession) -> Result<String, DomainError> {
        let claims = AdminClaims {
            session: session.clone(),
            exp: session.expires_at().as_unix_secs(),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to sign session token: {}", e),
            )
        })
    }

    fn verify(&self, token: &str) -> Result<AdminSession, DomainError> {
        match decode::<AdminClaims>(token, &self.decoding, &Self::validation()) {
            Ok(data) => Ok(data.claims.session),
            Err(e) => match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => Err(DomainError::new(
                    ErrorCode::SessionExpired,
                    "Session expired due to inactivity",
                )),
                _ => Err(DomainError::new(
                    ErrorCode::Unauthorized,
                    "Invalid session token",
                )),
            },
        }
    }
}
