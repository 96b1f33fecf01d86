//! Ports: contracts for the external collaborators of the survey core.

mod admin_tokens;
mod credential_verifier;
mod kiosk_state_store;
mod response_store;

pub use admin_tokens::AdminTokenService;
pub use credential_verifier::AdminCredentialVerifier;
pub use kiosk_state_store::KioskStateStore;
pub use response_store::ResponseStore;
