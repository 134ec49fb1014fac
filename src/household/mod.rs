//! Household chore and behaviour tracking.
//!
//! This module implements the three engines behind the tracker: template
//! instantiation (expanding a declarative seed into a timestamped chore or
//! act), the nested task/chore lifecycle state machines (idempotent toggle
//! and sequencing transitions with parent/child end bubbling), and the area
//! status transition engine (spawning chores when an area changes status).
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
