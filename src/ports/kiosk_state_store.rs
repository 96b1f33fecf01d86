//! Kiosk resume-state storage port.
//!
//! The explicit save/load boundary for the minimal mid-survey fields, so a
//! kiosk reload can pick up where the respondent left off.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::kiosk::ResumeState;

/// Port for persisting kiosk resume state.
#[async_trait]
pub trait KioskStateStore: Send + Sync {
    /// Saves the resume fields, replacing any earlier snapshot.
    async fn save(&self, state: &ResumeState) -> Result<(), DomainError>;

    /// Loads the last snapshot, if one exists and parses.
    async fn load(&self) -> Result<Option<ResumeState>, DomainError>;

    /// Discards the snapshot (survey finished or abandoned).
    async fn clear(&self) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kiosk_state_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn KioskStateStore) {}
    }
}
