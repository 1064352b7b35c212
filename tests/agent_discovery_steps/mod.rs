//! Step definitions for agent discovery scenarios.

mod given;
mod then;
mod when;
pub mod world;
