//! Shared data types and serialization for the cognitive agent simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod agent;
pub mod event;
pub mod snapshot;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

// Re-export agent classification types
pub use agent::{AgentClass, ParsePersonalityError, Personality};

// Re-export event types
pub use event::{DriftEvent, DriftEventKind};

// Re-export snapshot types
pub use snapshot::{AgentSnapshot, SimulationSnapshot};
