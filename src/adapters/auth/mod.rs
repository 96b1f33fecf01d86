//! Credential and session token adapters.

mod pin;
mod tokens;

pub use pin::Sha256PinVerifier;
pub use tokens::JwtAdminTokens;
