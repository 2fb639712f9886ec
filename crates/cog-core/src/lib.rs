//! Cognitive Agent Drift Simulation Engine
//!
//! A small population of autonomous agents, each holding a scalar
//! internal state that grows as it absorbs facts, decays every tick,
//! and periodically drifts — accumulating entropy and losing coherence
//! until a threshold forces a full cognitive restart. Facts known by
//! two or more agents can be consolidated into a shared memory pool.
//!
//! The whole engine is a single sequential stepper: one seeded random
//! source, no concurrency, fully reproducible from (seed, commands).

pub mod components;
pub mod config;
pub mod output;
pub mod setup;
pub mod simulation;
pub mod systems;

pub use components::{Agent, FactSet, SharedMemoryPool};
pub use config::{ConfigError, DriftProfile, TuningConfig, DEFAULT_TUNING_PATH};
pub use simulation::{SimError, Simulation};
pub use systems::{classify, consolidate, respond, MessageKind, SimulationClock};

// Re-export the shared data types for downstream convenience
pub use cog_events::{
    AgentClass, AgentSnapshot, DriftEvent, DriftEventKind, Personality, SimulationSnapshot,
};
