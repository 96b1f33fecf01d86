//! Survey response entity and its answer set.

mod answers;
#[allow(clippy::module_inception)]
mod response;

pub use answers::AnswerSet;
pub use response::{NewResponse, Response};
