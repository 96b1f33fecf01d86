//! AdminLoginHandler - server-side PIN check and session token issuance.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::admin::AdminSession;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::ports::{AdminCredentialVerifier, AdminTokenService};

/// Command carrying the presented PIN.
#[derive(Clone)]
pub struct AdminLoginCommand {
    pub pin: String,
}

impl std::fmt::Debug for AdminLoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The PIN must never reach logs.
        f.debug_struct("AdminLoginCommand").finish_non_exhaustive()
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminLoginResult {
    pub token: String,
    pub expires_in_secs: u64,
}

/// Handler verifying the admin PIN and opening a session.
pub struct AdminLoginHandler {
    verifier: Arc<dyn AdminCredentialVerifier>,
    tokens: Arc<dyn AdminTokenService>,
    session_timeout_secs: u64,
}

impl AdminLoginHandler {
    pub fn new(
        verifier: Arc<dyn AdminCredentialVerifier>,
        tokens: Arc<dyn AdminTokenService>,
        session_timeout_secs: u64,
    ) -> Self {
        Self {
            verifier,
            tokens,
            session_timeout_secs,
        }
    }

    pub fn handle(&self, cmd: AdminLoginCommand) -> Result<AdminLoginResult, DomainError> {
        if !self.verifier.verify(&cmd.pin) {
            warn!("admin login rejected");
            return Err(DomainError::new(ErrorCode::InvalidPin, "Invalid PIN"));
        }
        let session = AdminSession::new(Timestamp::now(), self.session_timeout_secs);
        let token = self.tokens.issue(&session)?;
        info!(session_id = %session.id(), "admin session opened");
        Ok(AdminLoginResult {
            token,
            expires_in_secs: self.session_timeout_secs,
        })
    }
}

/// Verifies a presented admin token and slides the inactivity window,
/// returning the renewed token alongside the session.
pub struct AdminSessionRefresher {
    tokens: Arc<dyn AdminTokenService>,
}

impl AdminSessionRefresher {
    pub fn new(tokens: Arc<dyn AdminTokenService>) -> Self {
        Self { tokens }
    }

    pub fn authorize(&self, token: &str) -> Result<(AdminSession, String), DomainError> {
        let session = self.tokens.verify(token)?;
        let touched = session.touch(Timestamp::now())?;
        let renewed = self.tokens.issue(&touched)?;
        Ok((touched, renewed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FixedVerifier {
        expected: &'static str,
    }

    impl AdminCredentialVerifier for FixedVerifier {
        fn verify(&self, presented: &str) -> bool {
            presented == self.expected
        }
    }

    #[derive(Default)]
    struct FakeTokens {
        issued: Mutex<Vec<AdminSession>>,
    }

    impl AdminTokenService for FakeTokens {
        fn issue(&self, session: &AdminSession) -> Result<String, DomainError> {
            self.issued.lock().unwrap().push(session.clone());
            Ok(format!("token-{}", session.id()))
        }

        fn verify(&self, token: &str) -> Result<AdminSession, DomainError> {
            self.issued
                .lock()
                .unwrap()
                .iter()
                .find(|s| format!("token-{}", s.id()) == token)
                .cloned()
                .ok_or_else(|| DomainError::new(ErrorCode::Unauthorized, "Unknown token"))
        }
    }

    fn handler(tokens: Arc<FakeTokens>) -> AdminLoginHandler {
        AdminLoginHandler::new(
            Arc::new(FixedVerifier { expected: "123456" }),
            tokens,
            300,
        )
    }

    #[test]
    fn correct_pin_opens_a_session() {
        let tokens = Arc::new(FakeTokens::default());
        let result = handler(tokens.clone())
            .handle(AdminLoginCommand {
                pin: "123456".to_string(),
            })
            .unwrap();
        assert!(result.token.starts_with("token-"));
        assert_eq!(result.expires_in_secs, 300);
        assert_eq!(tokens.issued.lock().unwrap().len(), 1);
    }

    #[test]
    fn wrong_pin_is_rejected_without_issuing_a_token() {
        let tokens = Arc::new(FakeTokens::default());
        let err = handler(tokens.clone())
            .handle(AdminLoginCommand {
                pin: "000000".to_string(),
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPin);
        assert!(tokens.issued.lock().unwrap().is_empty());
    }

    #[test]
    fn authorize_renews_the_token() {
        let tokens = Arc::new(FakeTokens::default());
        let login = handler(tokens.clone())
            .handle(AdminLoginCommand {
                pin: "123456".to_string(),
            })
            .unwrap();

        let refresher = AdminSessionRefresher::new(tokens);
        let (session, renewed) = refresher.authorize(&login.token).unwrap();
        assert_eq!(renewed, format!("token-{}", session.id()));
    }

    #[test]
    fn authorize_rejects_unknown_tokens() {
        let refresher = AdminSessionRefresher::new(Arc::new(FakeTokens::default()));
        let err = refresher.authorize("token-bogus").unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[test]
    fn login_command_debug_hides_the_pin() {
        let cmd = AdminLoginCommand {
            pin: "supersecret".to_string(),
        };
        let debug = format!("{:?}", cmd);
        assert!(!debug.contains("supersecret"));
    }
}
