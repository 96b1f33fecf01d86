//! Admin session token port.
//!
//! After a successful PIN check the admin gets a signed token whose expiry
//! implements the inactivity timeout; every admin action verifies it and
//! receives a renewed token, sliding the window.

use crate::domain::admin::AdminSession;
use crate::domain::foundation::DomainError;

/// Port for issuing and verifying admin session tokens.
pub trait AdminTokenService: Send + Sync {
    /// Issues a token for a fresh session.
    ///
    /// # Errors
    ///
    /// - `InternalError` if signing fails
    fn issue(&self, session: &AdminSession) -> Result<String, DomainError>;

    /// Verifies a presented token and returns the session it carries.
    ///
    /// # Errors
    ///
    /// - `SessionExpired` when the inactivity window has elapsed
    /// - `Unauthorized` for tampered or malformed tokens
    fn verify(&self, token: &str) -> Result<AdminSession, DomainError>;
}
