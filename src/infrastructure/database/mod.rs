pub mod connection;
pub mod models;
pub mod repositories;
pub mod schema;

pub use connection::{DbPool, create_connection_pool, run_in_transaction, run_migrations};
