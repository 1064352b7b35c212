//! Adapter implementations for agent directory ports.

pub mod memory;
