//! Admin session with a sliding inactivity timeout.
//!
//! The PIN itself is verified server-side; this type only carries the
//! expiry policy. The timeout fires regardless of in-flight work.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AdminSessionId, DomainError, ErrorCode, Timestamp};

/// One authenticated admin session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    id: AdminSessionId,
    started_at: Timestamp,
    last_seen: Timestamp,
    timeout_secs: u64,
}

impl AdminSession {
    /// Opens a session at the given moment.
    pub fn new(now: Timestamp, timeout_secs: u64) -> Self {
        Self {
            id: AdminSessionId::new(),
            started_at: now,
            last_seen: now,
            timeout_secs,
        }
    }

    pub fn id(&self) -> AdminSessionId {
        self.id
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn last_seen(&self) -> Timestamp {
        self.last_seen
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// The moment this session dies if no further activity arrives.
    pub fn expires_at(&self) -> Timestamp {
        self.last_seen.plus_secs(self.timeout_secs)
    }

    /// True once the inactivity window has elapsed.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now.is_after(&self.expires_at())
    }

    /// Records activity, sliding the expiry window forward.
    pub fn touch(&self, now: Timestamp) -> Result<Self, DomainError> {
        if self.is_expired(now) {
            return Err(DomainError::new(
                ErrorCode::SessionExpired,
                "Session expired due to inactivity",
            ));
        }
        let mut next = self.clone();
        next.last_seen = now;
        Ok(next)
    }
}
