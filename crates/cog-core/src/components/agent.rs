//! Agent State Model
//!
//! One agent's numeric state, fact memory, and drift bookkeeping. The
//! scoring functions here are deliberately arbitrary; their literal
//! arithmetic is the contract and carries no real-world meaning.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use cog_events::{AgentClass, AgentSnapshot, Personality};

use super::memory::FactSet;

/// State gained per new fact, before the sigmoid weighting.
const FACT_STATE_GAIN: f64 = 500.0;

/// An autonomous cognitive agent.
///
/// Entropy and coherence are clamped to [0, 1] on every update; the
/// drift log is append-only and never pruned within a run.
#[derive(Debug, Clone)]
pub struct Agent {
    /// Unique name, immutable after creation
    pub identity: String,
    /// Selects the drift constant table
    pub class: AgentClass,
    /// Selects response template pools only
    pub personality: Personality,
    /// Accumulated vitality
    pub state: f64,
    pub bias: f64,
    /// α in the Ω equation
    pub growth_factor: f64,
    /// Bounded to [0, 1]; weights state gain from new facts
    pub accuracy_potential: f64,
    /// Constant factor in the memory score
    pub recall_efficiency: f64,
    pub memory: FactSet,
    /// In [0, 1]; accumulates per drift step, zeroed on restart
    pub drift_entropy: f64,
    /// In [0, 1]; starts at 1.0, restored to 1.0 on restart
    pub validation_coherence: f64,
    /// Append-only audit trail of drift and restart events
    pub drift_log: Vec<String>,
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl Agent {
    pub fn new(
        identity: impl Into<String>,
        class: AgentClass,
        personality: Personality,
    ) -> Self {
        Self {
            identity: identity.into(),
            class,
            personality,
            state: 10000.0,
            bias: 1.0,
            growth_factor: 1.5,
            accuracy_potential: 0.5,
            recall_efficiency: 0.8,
            memory: FactSet::new(),
            drift_entropy: 0.0,
            validation_coherence: 1.0,
            drift_log: Vec::new(),
        }
    }

    /// The agent's primary score: `(state + bias) * growth_factor`.
    pub fn omega(&self) -> f64 {
        (self.state + self.bias) * self.growth_factor
    }

    /// Memory score; the +1 offset keeps the denominator away from zero.
    pub fn memory_factor(&self) -> f64 {
        (self.omega() * self.memory.len() as f64 * self.recall_efficiency)
            / (self.drift_entropy + 1.0)
    }

    /// Accuracy score derived from Ω and the memory score.
    pub fn accuracy_score(&self) -> f64 {
        (self.omega() * self.memory_factor() * self.accuracy_potential)
            / (self.drift_entropy + 1.0)
    }

    /// Absorbs one fact.
    ///
    /// Blank text and facts already known are a silent no-op; learning
    /// the same fact twice never grows state twice. On a new fact the
    /// sigmoid is evaluated on the pre-update accuracy potential.
    pub fn add_fact(&mut self, text: &str) -> bool {
        if !self.memory.insert(text) {
            return false;
        }
        self.state += FACT_STATE_GAIN * sigmoid(self.accuracy_potential);
        self.bias += 0.1;
        self.growth_factor += 0.01;
        self.accuracy_potential = (self.accuracy_potential + 0.01).clamp(0.0, 1.0);
        true
    }

    /// Recalls one fact uniformly at random, or `None` when Ω is below
    /// the recall threshold or memory is empty.
    pub fn recall_fact(&self, omega_threshold: f64, rng: &mut SmallRng) -> Option<&str> {
        if self.omega() < omega_threshold || self.memory.is_empty() {
            return None;
        }
        self.memory.as_slice().choose(rng).map(String::as_str)
    }

    /// Applies one tick of passive decay to state and bias.
    pub fn decay_tick(&mut self, decay_rate: f64) {
        self.state *= decay_rate;
        self.bias *= decay_rate;
    }

    /// Captures the agent's full state for persistence.
    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot {
            identity: self.identity.clone(),
            class: self.class,
            personality: self.personality,
            state: self.state,
            bias: self.bias,
            growth_factor: self.growth_factor,
            accuracy_potential: self.accuracy_potential,
            recall_efficiency: self.recall_efficiency,
            drift_entropy: self.drift_entropy,
            validation_coherence: self.validation_coherence,
            memory: self.memory.as_slice().to_vec(),
            drift_log: self.drift_log.clone(),
        }
    }

    /// Rebuilds an agent from a snapshot.
    pub fn from_snapshot(snap: AgentSnapshot) -> Self {
        Self {
            identity: snap.identity,
            class: snap.class,
            personality: snap.personality,
            state: snap.state,
            bias: snap.bias,
            growth_factor: snap.growth_factor,
            accuracy_potential: snap.accuracy_potential.clamp(0.0, 1.0),
            recall_efficiency: snap.recall_efficiency,
            drift_entropy: snap.drift_entropy.clamp(0.0, 1.0),
            validation_coherence: snap.validation_coherence.clamp(0.0, 1.0),
            memory: FactSet::from_ordered(snap.memory),
            drift_log: snap.drift_log,
        }
    }
}
