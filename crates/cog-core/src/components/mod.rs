//! Core Components
//!
//! The agent state model and the fact memory containers it relies on.

pub mod agent;
pub mod memory;

pub use agent::Agent;
pub use memory::{FactSet, SharedMemoryPool};
