//! Kiosk survey session flow.

mod session;

pub use session::{KioskSession, KioskStep, ResumeState};
