//! Simulation Clock
//!
//! Advances wall-clock-independent discrete time for the whole agent
//! population. Decay runs every tick; drift fires synchronously for
//! the entire population on a fixed cadence.

use rand::rngs::SmallRng;

use cog_events::{DriftEvent, DriftEventKind};

use crate::components::Agent;
use crate::config::TuningConfig;
use crate::systems::drift::step_drift;

/// Monotone tick counter for one simulation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationClock {
    tick: u64,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes a clock at a given tick, e.g. from a snapshot.
    pub fn at(tick: u64) -> Self {
        Self { tick }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Performs `ticks` discrete steps over the population.
    ///
    /// Each step decays every agent, increments the counter, and when
    /// the counter lands on the drift interval steps drift for every
    /// agent in order. Returns the drift events that fired, in order.
    pub fn advance(
        &mut self,
        agents: &mut [Agent],
        ticks: u64,
        config: &TuningConfig,
        rng: &mut SmallRng,
    ) -> Vec<DriftEvent> {
        let mut events = Vec::new();

        for _ in 0..ticks {
            for agent in agents.iter_mut() {
                agent.decay_tick(config.decay_rate);
            }
            self.tick += 1;

            if self.tick % config.drift_interval == 0 {
                tracing::debug!(tick = self.tick, "drift event triggered");
                for agent in agents.iter_mut() {
                    let outcome = step_drift(agent, config, rng);
                    events.push(DriftEvent {
                        tick: self.tick,
                        agent: agent.identity.clone(),
                        class: agent.class,
                        kind: DriftEventKind::Drift,
                        omega: agent.omega(),
                        entropy: agent.drift_entropy,
                        coherence: agent.validation_coherence,
                        line: outcome.line,
                    });
                    if let Some(line) = outcome.restart_line {
                        events.push(DriftEvent {
                            tick: self.tick,
                            agent: agent.identity.clone(),
                            class: agent.class,
                            kind: DriftEventKind::Restart,
                            omega: agent.omega(),
                            entropy: agent.drift_entropy,
                            coherence: agent.validation_coherence,
                            line,
                        });
                    }
                }
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cog_events::{AgentClass, Personality};
    use rand::SeedableRng;

    fn population() -> Vec<Agent> {
        vec![
            Agent::new("Ash", AgentClass::Zpe, Personality::Friendly),
            Agent::new("Vell", AgentClass::Zpe, Personality::Formal),
        ]
    }

    #[test]
    fn decay_applies_every_tick() {
        let config = TuningConfig::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut agents = population();
        let mut clock = SimulationClock::new();

        clock.advance(&mut agents, 3, &config, &mut rng);

        let expected = 10000.0 * 0.999f64.powi(3);
        for agent in &agents {
            assert!((agent.state - expected).abs() < 1e-9);
        }
        assert_eq!(clock.tick(), 3);
    }

    #[test]
    fn drift_fires_exactly_on_the_interval() {
        let config = TuningConfig::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut agents = population();
        let mut clock = SimulationClock::new();

        // Ticks 1..=49: no drift
        let events = clock.advance(&mut agents, 49, &config, &mut rng);
        assert!(events.is_empty());
        assert!(agents.iter().all(|a| a.drift_log.is_empty()));

        // Tick 50: one drift step for every agent
        let events = clock.advance(&mut agents, 1, &config, &mut rng);
        let drift_count = events
            .iter()
            .filter(|e| e.kind == DriftEventKind::Drift)
            .count();
        assert_eq!(drift_count, agents.len());
        assert!(events.iter().all(|e| e.tick == 50));
    }

    #[test]
    fn advance_fifty_triggers_one_drift_per_agent() {
        let config = TuningConfig::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut agents = population();
        let mut clock = SimulationClock::new();

        let events = clock.advance(&mut agents, 50, &config, &mut rng);

        for agent in &agents {
            let drift_lines = agent
                .drift_log
                .iter()
                .filter(|l| l.contains("drift:"))
                .count();
            assert_eq!(drift_lines, 1);
        }
        assert!(events.iter().all(|e| e.tick == 50));
    }

    #[test]
    fn zero_ticks_is_a_noop() {
        let config = TuningConfig::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut agents = population();
        let mut clock = SimulationClock::new();

        let events = clock.advance(&mut agents, 0, &config, &mut rng);
        assert!(events.is_empty());
        assert_eq!(clock.tick(), 0);
        assert_eq!(agents[0].state, 10000.0);
    }

    #[test]
    fn resumed_clock_keeps_the_cadence() {
        let config = TuningConfig::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut agents = population();

        // Resume at tick 30; drift should fire 20 ticks later
        let mut clock = SimulationClock::at(30);
        let events = clock.advance(&mut agents, 19, &config, &mut rng);
        assert!(events.is_empty());

        let events = clock.advance(&mut agents, 1, &config, &mut rng);
        assert!(!events.is_empty());
        assert_eq!(clock.tick(), 50);
    }

    #[test]
    fn tick_counter_is_monotone() {
        let config = TuningConfig::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut agents = population();
        let mut clock = SimulationClock::new();

        let mut last = 0;
        for _ in 0..10 {
            clock.advance(&mut agents, 7, &config, &mut rng);
            assert!(clock.tick() > last);
            last = clock.tick();
        }
        assert_eq!(last, 70);
    }
}
