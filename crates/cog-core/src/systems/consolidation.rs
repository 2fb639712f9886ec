//! Memory Consolidation
//!
//! Finds facts redundantly known across agents and promotes them into
//! the shared pool. Promotion is a move, never a copy: a promoted fact
//! leaves every individual memory that held it.

use std::collections::HashMap;

use crate::components::{Agent, SharedMemoryPool};

/// Promotes every fact known by two or more agents into the pool.
///
/// Facts known by exactly one agent are untouched. Running this twice
/// with no intervening learning is a no-op the second time; calling it
/// with zero agents or empty memories is safe.
///
/// Returns the newly promoted facts, in first-seen order across the
/// population so pool order stays deterministic.
pub fn consolidate(agents: &mut [Agent], pool: &mut SharedMemoryPool) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for agent in agents.iter() {
        for fact in agent.memory.iter() {
            let count = counts.entry(fact).or_insert(0);
            if *count == 0 {
                first_seen.push(fact);
            }
            *count += 1;
        }
    }

    let promoted: Vec<String> = first_seen
        .into_iter()
        .filter(|fact| counts[fact] >= 2)
        .map(str::to_string)
        .collect();

    for fact in &promoted {
        pool.promote(fact);
        for agent in agents.iter_mut() {
            agent.memory.remove(fact);
        }
    }

    promoted
}
