//! Adapter implementations of the household ports.

pub mod memory;
pub mod postgres;
