//! Foundation value objects shared across the domain.

mod errors;
mod ids;
mod rating;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AdminSessionId, CounterId, ResponseId};
pub use rating::Rating;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
