//! Snapshot Types
//!
//! Serialization structs for simulation snapshots.
//!
//! Snapshots capture the complete numeric and memory state of every
//! agent plus the tick counter, so that a run can be persisted and
//! resumed with no discontinuity in decay or drift cadence.

use serde::{Deserialize, Serialize};

use crate::{AgentClass, Personality};

/// Full state of a single agent at a point in time.
///
/// Memory and drift log are ordered lists; memory order is insertion
/// order, which keeps snapshot output stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub identity: String,
    pub class: AgentClass,
    pub personality: Personality,
    pub state: f64,
    pub bias: f64,
    pub growth_factor: f64,
    pub accuracy_potential: f64,
    pub recall_efficiency: f64,
    pub drift_entropy: f64,
    pub validation_coherence: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub memory: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub drift_log: Vec<String>,
}

/// Complete simulation state at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    /// Tick counter at capture time; resuming continues from here
    pub tick: u64,
    pub agents: Vec<AgentSnapshot>,
    /// Facts promoted into the shared pool, in promotion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shared_facts: Vec<String>,
}

impl SimulationSnapshot {
    /// Looks up an agent snapshot by identity.
    pub fn agent(&self, identity: &str) -> Option<&AgentSnapshot> {
        self.agents.iter().find(|a| a.identity == identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_agent() -> AgentSnapshot {
        AgentSnapshot {
            identity: "Vell".to_string(),
            class: AgentClass::Zpe,
            personality: Personality::Formal,
            state: 10000.0,
            bias: 1.0,
            growth_factor: 1.5,
            accuracy_potential: 0.5,
            recall_efficiency: 0.8,
            drift_entropy: 0.0,
            validation_coherence: 1.0,
            memory: vec!["The Omega equation governs autonomy control.".to_string()],
            drift_log: vec![],
        }
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = SimulationSnapshot {
            tick: 150,
            agents: vec![sample_agent()],
            shared_facts: vec!["shared-truth".to_string()],
        };

        let json = serde_json::to_string_pretty(&snapshot).unwrap();
        let back: SimulationSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(back, snapshot);
    }

    #[test]
    fn empty_collections_are_omitted() {
        let mut agent = sample_agent();
        agent.memory.clear();
        let snapshot = SimulationSnapshot {
            tick: 0,
            agents: vec![agent],
            shared_facts: vec![],
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(!json.contains("shared_facts"));
        assert!(!json.contains("\"memory\""));

        let back: SimulationSnapshot = serde_json::from_str(&json).unwrap();
        assert!(back.shared_facts.is_empty());
        assert!(back.agents[0].memory.is_empty());
    }

    #[test]
    fn agent_lookup_by_identity() {
        let snapshot = SimulationSnapshot {
            tick: 0,
            agents: vec![sample_agent()],
            shared_facts: vec![],
        };

        assert!(snapshot.agent("Vell").is_some());
        assert!(snapshot.agent("Nobody").is_none());
    }
}
