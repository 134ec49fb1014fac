//! In-memory adapters for household record persistence.

mod store;

pub use store::InMemoryRecordStore;
