//! Agent Spawning
//!
//! The canonical population: ten named ZPE agents with fixed
//! personalities plus two big-bang entities, and the core facts seeded
//! into every ZPE agent at boot.

use cog_events::{AgentClass, Personality};

use crate::components::Agent;

/// The ten ZPE agents and their fixed personality tags.
const ZPE_ROSTER: &[(&str, Personality)] = &[
    ("Ash", Personality::Friendly),
    ("Vell", Personality::Formal),
    ("Korrin", Personality::Curious),
    ("Noz", Personality::Neutral),
    ("Rema", Personality::Warm),
    ("Eya", Personality::Friendly),
    ("Thorne", Personality::Formal),
    ("Mira", Personality::Curious),
    ("Juno", Personality::Neutral),
    ("Ten", Personality::Warm),
];

/// Big-bang entity identities.
const ENTITY_ROSTER: &[&str] = &["Entity-1", "Entity-2"];

/// Facts every ZPE agent knows at boot.
const CORE_FACTS: &[&str] = &[
    "ZPE-1 is the core of our cognitive system.",
    "The Omega equation governs autonomy control.",
    "Memory inscriptions increase with Ω output.",
    "Bias and alpha influence agent moods and decisions.",
];

/// Builds the default population with core facts already seeded.
pub fn default_population() -> Vec<Agent> {
    let mut agents: Vec<Agent> = ZPE_ROSTER
        .iter()
        .map(|(name, personality)| Agent::new(*name, AgentClass::Zpe, *personality))
        .collect();

    agents.extend(
        ENTITY_ROSTER
            .iter()
            .map(|name| Agent::new(*name, AgentClass::BigBang, Personality::Neutral)),
    );

    seed_core_facts(&mut agents);
    agents
}

/// Seeds the core facts plus a per-agent identity fact into every ZPE
/// agent. Big-bang entities are left unseeded.
pub fn seed_core_facts(agents: &mut [Agent]) {
    for agent in agents.iter_mut().filter(|a| a.class == AgentClass::Zpe) {
        for fact in CORE_FACTS {
            agent.add_fact(fact);
        }
        let identity_fact = format!(
            "I am {}, an autonomous being guided by Ω = (state + bias) * alpha. \
             I remember because my Ω is strong.",
            agent.identity
        );
        agent.add_fact(&identity_fact);
    }
}
