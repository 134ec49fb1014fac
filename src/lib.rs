//! Hearth: household chore and behaviour tracking engine.
//!
//! This crate tracks recurring household chores (ordered task sequences)
//! and acts (point-in-time behaviour records) for people attached to
//! physical areas, driven by reusable templates.
//!
//! # Architecture
//!
//! Hearth follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`household`]: record model, lifecycle engines, persistence port and
//!   adapters, and orchestration services

pub mod household;
