//! File-backed kiosk resume-state storage.
//!
//! One JSON file per kiosk holds the minimal mid-survey fields. A corrupt
//! or missing file restarts the survey instead of failing the kiosk.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::kiosk::ResumeState;
use crate::ports::KioskStateStore;

/// JSON file implementation of KioskStateStore.
pub struct FileKioskStateStore {
    path: PathBuf,
}

impl FileKioskStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl KioskStateStore for FileKioskStateStore {
    async fn save(&self, state: &ResumeState) -> Result<(), DomainError> {
        let json = serde_json::to_vec(state).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to encode resume state: {}", e),
            )
        })?;
        tokio::fs::write(&self.path, json).await.map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to write resume state: {}", e),
            )
        })
    }

    async fn load(&self) -> Result<Option<ResumeState>, DomainError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to read resume state: {}", e),
                ));
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding unreadable resume state");
                Ok(None)
            }
        }
    }

    async fn clear(&self) -> Result<(), DomainError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to clear resume state: {}", e),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CounterId, Rating};
    use crate::domain::kiosk::{KioskSession, KioskStep};
    use crate::domain::scheme::{Gender, SurveyScheme};

    fn sample_state(scheme: &SurveyScheme) -> ResumeState {
        KioskSession::new()
            .select_counter(CounterId::new(2), scheme)
            .unwrap()
            .set_gender(Gender::Male)
            .unwrap()
            .set_education("SMA", scheme)
            .unwrap()
            .set_occupation("Karyawan", scheme)
            .unwrap()
            .set_age_bracket("25-34 Tahun", scheme)
            .unwrap()
            .confirm_demographics(scheme)
            .unwrap()
            .answer_current(Rating::Satisfied, scheme)
            .unwrap()
            .to_resume()
            .unwrap()
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKioskStateStore::new(dir.path().join("kiosk.json"));
        let scheme = SurveyScheme::standard();
        let state = sample_state(&scheme);

        store.save(&state).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, state);
        assert_eq!(loaded.step, KioskStep::Questionnaire);
    }

    #[tokio::test]
    async fn load_without_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKioskStateStore::new(dir.path().join("missing.json"));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_file_is_discarded_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kiosk.json");
        tokio::fs::write(&path, b"{not json").await.unwrap();
        let store = FileKioskStateStore::new(path);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_removes_the_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKioskStateStore::new(dir.path().join("kiosk.json"));
        let scheme = SurveyScheme::standard();

        store.save(&sample_state(&scheme)).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());

        // Clearing twice is fine.
        store.clear().await.unwrap();
    }
}
