//! Drift Event Types
//!
//! Structured records of drift steps and cognitive restarts, suitable
//! for append-only JSONL logging. The human-readable `line` is the
//! same text appended to the agent's own drift log.

use serde::{Deserialize, Serialize};

use crate::AgentClass;

/// What happened during a drift invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftEventKind {
    /// Entropy accumulated, coherence dropped, agent stayed stable
    Drift,
    /// Thresholds were crossed and the agent rebooted its state
    Restart,
}

/// One drift or restart event for one agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftEvent {
    /// Tick at which the event fired
    pub tick: u64,
    /// Identity of the affected agent
    pub agent: String,
    /// Class of the affected agent
    pub class: AgentClass,
    pub kind: DriftEventKind,
    /// Omega score after the event was applied
    pub omega: f64,
    /// Drift entropy after the event was applied
    pub entropy: f64,
    /// Validation coherence after the event was applied
    pub coherence: f64,
    /// The audit-trail line appended to the agent's drift log
    pub line: String,
}
