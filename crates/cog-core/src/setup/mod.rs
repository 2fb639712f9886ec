//! Simulation Setup
//!
//! Builds the default agent population and seeds its core facts.

pub mod agents;

pub use agents::{default_population, seed_core_facts};
