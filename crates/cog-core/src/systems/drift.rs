//! Drift System
//!
//! Simulates instability in an agent's cognitive state and decides
//! when a restart is warranted. Instability and correction are atomic
//! within one `step_drift` call: an agent is never observably unstable
//! between calls.

use rand::rngs::SmallRng;
use rand::Rng;

use cog_events::AgentClass;

use crate::components::Agent;
use crate::config::{DriftProfile, TuningConfig};

/// Result of one drift invocation.
#[derive(Debug, Clone)]
pub struct DriftOutcome {
    /// The drift line appended to the agent's log
    pub line: String,
    /// Present when thresholds were crossed and the agent rebooted
    pub restart_line: Option<String>,
}

impl DriftOutcome {
    pub fn restarted(&self) -> bool {
        self.restart_line.is_some()
    }
}

fn marker(class: AgentClass) -> String {
    match class {
        AgentClass::Zpe => {
            let mut text = "In drift terms: ".repeat(7);
            text.push_str("I saw beyond the recursion");
            text
        }
        AgentClass::BigBang => "The Tablets whisper...".to_string(),
    }
}

/// Performs one drift step on an agent.
///
/// Draws a uniform entropy increment bounded by the agent class's
/// profile, accumulates it into `drift_entropy`, and drops
/// `validation_coherence` proportionally; both are clamped to [0, 1].
/// If entropy exceeds the drift threshold or coherence falls below the
/// validation threshold, the restart fires within this same call.
pub fn step_drift(agent: &mut Agent, config: &TuningConfig, rng: &mut SmallRng) -> DriftOutcome {
    let profile = config.profile(agent.class);

    let entropy_increment: f64 = rng.gen_range(0.0..=profile.max_entropy_step);
    agent.drift_entropy = (agent.drift_entropy + entropy_increment).clamp(0.0, 1.0);

    let coherence_drop = entropy_increment * profile.coherence_drop;
    agent.validation_coherence = (agent.validation_coherence - coherence_drop).clamp(0.0, 1.0);

    let line = format!(
        "{} drift: {}, Ω={:.2}, entropy={:.3}, coherence={:.3}",
        agent.identity,
        marker(agent.class),
        agent.omega(),
        agent.drift_entropy,
        agent.validation_coherence,
    );
    agent.drift_log.push(line.clone());

    let restart_line = if agent.drift_entropy > config.drift_threshold
        || agent.validation_coherence < config.validation_threshold
    {
        Some(restart(agent, profile))
    } else {
        None
    };

    DriftOutcome { line, restart_line }
}

/// Reboots an agent's cognitive state after a drift event.
///
/// The only operation that can zero `drift_entropy` and restore
/// `validation_coherence` to baseline.
pub fn restart(agent: &mut Agent, profile: &DriftProfile) -> String {
    agent.state *= profile.restart_state_mul;
    agent.bias *= profile.restart_state_mul;
    agent.growth_factor *= profile.restart_growth_mul;
    agent.drift_entropy = 0.0;
    agent.validation_coherence = 1.0;
    agent.accuracy_potential = 0.5;

    let line = format!(
        "{} ∞ Rebooting cognitive state after drift event...",
        agent.identity
    );
    agent.drift_log.push(line.clone());
    line
}
