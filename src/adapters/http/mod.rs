//! HTTP adapters.

pub mod api;

pub use api::{api_router, ApiState};
