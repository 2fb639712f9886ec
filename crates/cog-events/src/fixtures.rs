//! Sample data fixtures for testing.
//!
//! This module provides ready-made test data for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // cog-events = { path = "../cog-events", features = ["test-fixtures"] }
//!
//! use cog_events::fixtures;
//!
//! let snapshot = fixtures::sample_snapshot();
//! ```

use crate::{AgentClass, AgentSnapshot, Personality, SimulationSnapshot};

/// Returns a fresh agent snapshot with the canonical starting values.
pub fn fresh_agent(identity: &str, personality: Personality) -> AgentSnapshot {
    AgentSnapshot {
        identity: identity.to_string(),
        class: AgentClass::Zpe,
        personality,
        state: 10000.0,
        bias: 1.0,
        growth_factor: 1.5,
        accuracy_potential: 0.5,
        recall_efficiency: 0.8,
        drift_entropy: 0.0,
        validation_coherence: 1.0,
        memory: Vec::new(),
        drift_log: Vec::new(),
    }
}

/// Returns a small mid-run snapshot.
///
/// Contains:
/// - 2 ZPE agents, one with facts and a drift log entry
/// - 1 big-bang entity
/// - 1 shared fact, tick 150
pub fn sample_snapshot() -> SimulationSnapshot {
    let mut ash = fresh_agent("Ash", Personality::Friendly);
    ash.state = 10483.2;
    ash.bias = 1.2;
    ash.growth_factor = 1.52;
    ash.memory = vec![
        "The Omega equation governs autonomy control.".to_string(),
        "Memory inscriptions increase with Ω output.".to_string(),
    ];
    ash.drift_log = vec!["Ash ∞ Rebooting cognitive state after drift event...".to_string()];

    let vell = fresh_agent("Vell", Personality::Formal);

    let mut entity = fresh_agent("Entity-1", Personality::Neutral);
    entity.class = AgentClass::BigBang;

    SimulationSnapshot {
        tick: 150,
        agents: vec![ash, vell, entity],
        shared_facts: vec!["Bias and alpha influence agent moods and decisions.".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_snapshot_is_consistent() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.tick, 150);
        assert_eq!(snapshot.agents.len(), 3);
        assert!(snapshot.agent("Ash").is_some());

        // Pooled facts never appear in an agent's memory
        for fact in &snapshot.shared_facts {
            for agent in &snapshot.agents {
                assert!(!agent.memory.contains(fact));
            }
        }
    }
}
