//! Simulation Facade
//!
//! Owns the agent population, the clock, the shared memory pool, the
//! tuning constants, and the seeded random source for one run. All
//! mutation flows through this type in a single logical thread; the
//! command surface mirrors what the interactive front end needs.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;

use cog_events::{DriftEvent, SimulationSnapshot};

use crate::components::{Agent, SharedMemoryPool};
use crate::config::TuningConfig;
use crate::systems::clock::SimulationClock;
use crate::systems::consolidation::consolidate;
use crate::systems::response::respond;

/// Errors surfaced by the command layer.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("agent '{0}' not found")]
    UnknownAgent(String),
    #[error("invalid tick count: {0}")]
    InvalidTickCount(String),
}

/// One simulation run.
pub struct Simulation {
    agents: Vec<Agent>,
    clock: SimulationClock,
    pool: SharedMemoryPool,
    config: TuningConfig,
    rng: SmallRng,
}

impl Simulation {
    /// Creates an empty simulation with a seeded random source.
    pub fn new(config: TuningConfig, seed: u64) -> Self {
        Self {
            agents: Vec::new(),
            clock: SimulationClock::new(),
            pool: SharedMemoryPool::new(),
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a simulation over an existing population.
    pub fn with_population(config: TuningConfig, seed: u64, agents: Vec<Agent>) -> Self {
        let mut sim = Self::new(config, seed);
        sim.agents = agents;
        sim
    }

    /// Rebuilds a run from a snapshot; the tick sequence continues with
    /// no discontinuity in decay or drift cadence.
    pub fn from_snapshot(snapshot: SimulationSnapshot, config: TuningConfig, seed: u64) -> Self {
        Self {
            agents: snapshot
                .agents
                .into_iter()
                .map(Agent::from_snapshot)
                .collect(),
            clock: SimulationClock::at(snapshot.tick),
            pool: SharedMemoryPool::from_ordered(snapshot.shared_facts),
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn tick(&self) -> u64 {
        self.clock.tick()
    }

    pub fn config(&self) -> &TuningConfig {
        &self.config
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn shared_pool(&self) -> &SharedMemoryPool {
        &self.pool
    }

    fn agent_mut(&mut self, identity: &str) -> Result<&mut Agent, SimError> {
        self.agents
            .iter_mut()
            .find(|a| a.identity == identity)
            .ok_or_else(|| SimError::UnknownAgent(identity.to_string()))
    }

    pub fn agent(&self, identity: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.identity == identity)
    }

    /// Advances the whole population by `ticks` discrete steps.
    pub fn advance(&mut self, ticks: u64) -> Vec<DriftEvent> {
        self.clock
            .advance(&mut self.agents, ticks, &self.config, &mut self.rng)
    }

    /// Produces a templated reply from one agent.
    pub fn respond(&mut self, identity: &str, message: &str) -> Result<String, SimError> {
        let agent = self
            .agents
            .iter_mut()
            .find(|a| a.identity == identity)
            .ok_or_else(|| SimError::UnknownAgent(identity.to_string()))?;
        Ok(respond(agent, message, &self.config, &mut self.rng))
    }

    /// Teaches one agent a fact directly. Blank text is a silent no-op.
    pub fn add_fact(&mut self, identity: &str, text: &str) -> Result<bool, SimError> {
        Ok(self.agent_mut(identity)?.add_fact(text))
    }

    /// Recalls a random fact from one agent, if its Ω allows.
    pub fn recall_fact(&mut self, identity: &str) -> Result<Option<String>, SimError> {
        let agent = self
            .agents
            .iter()
            .find(|a| a.identity == identity)
            .ok_or_else(|| SimError::UnknownAgent(identity.to_string()))?;
        Ok(agent
            .recall_fact(self.config.omega_threshold, &mut self.rng)
            .map(str::to_string))
    }

    /// Promotes facts known by two or more agents into the shared pool.
    pub fn consolidate(&mut self) -> Vec<String> {
        consolidate(&mut self.agents, &mut self.pool)
    }

    /// Captures the complete run state.
    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            tick: self.clock.tick(),
            agents: self.agents.iter().map(Agent::snapshot).collect(),
            shared_facts: self.pool.facts().to_vec(),
        }
    }
}
