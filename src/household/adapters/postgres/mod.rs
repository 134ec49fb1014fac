//! `PostgreSQL` adapters for household record persistence.

mod models;
mod schema;
mod store;

pub use store::{PostgresRecordStore, RecordPgPool};
