//! Port contracts for household record persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the lifecycle
//! services.

pub mod record_store;

pub use record_store::{RecordKind, RecordStore, RecordStoreError, RecordStoreResult};
