//! SHA-256 digest PIN verifier.
//!
//! The configured PIN is digested once at startup; presented candidates are
//! digested and compared in constant time. The plaintext never leaves the
//! process and is never shipped to a client.

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::ports::AdminCredentialVerifier;

/// Constant-time PIN verifier over a SHA-256 digest.
pub struct Sha256PinVerifier {
    digest: [u8; 32],
}

impl Sha256PinVerifier {
    /// Digests the configured PIN.
    pub fn new(pin: &SecretString) -> Self {
        Self {
            digest: Sha256::digest(pin.expose_secret().as_bytes()).into(),
        }
    }
}

impl AdminCredentialVerifier for Sha256PinVerifier {
    fn verify(&self, presented: &str) -> bool {
        let candidate: [u8; 32] = Sha256::digest(presented.as_bytes()).into();
        candidate.ct_eq(&self.digest).into()
    }
}
