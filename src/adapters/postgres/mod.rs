//! PostgreSQL adapters.

mod response_store;

pub use response_store::PostgresResponseStore;
