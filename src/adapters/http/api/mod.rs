//! The survey action API.

mod dto;
mod handlers;
mod routes;

pub use dto::{AdminLoginData, ApiEnvelope, ApiRequest, DeletedCountData};
pub use handlers::{ApiState, RENEWED_TOKEN_HEADER};
pub use routes::api_router;
