//! Local storage adapters.

mod kiosk_state;

pub use kiosk_state::FileKioskStateStore;
