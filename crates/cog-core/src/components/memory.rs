//! Fact Memory Containers
//!
//! An insertion-ordered set of fact strings. Uniqueness is enforced by
//! value; insertion order is preserved so snapshot output stays stable
//! across runs.

use serde::{Deserialize, Serialize};

/// Insertion-ordered set of non-empty fact strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactSet {
    facts: Vec<String>,
}

impl FactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fact, trimming surrounding whitespace first.
    ///
    /// Returns true if the fact was new. Empty or whitespace-only text
    /// and duplicates are rejected without error.
    pub fn insert(&mut self, text: &str) -> bool {
        let fact = text.trim();
        if fact.is_empty() || self.contains(fact) {
            return false;
        }
        self.facts.push(fact.to_string());
        true
    }

    /// Removes a fact by value. Returns true if it was present.
    pub fn remove(&mut self, fact: &str) -> bool {
        let before = self.facts.len();
        self.facts.retain(|f| f != fact);
        before != self.facts.len()
    }

    pub fn contains(&self, fact: &str) -> bool {
        self.facts.iter().any(|f| f == fact)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Iterates facts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.facts.iter().map(String::as_str)
    }

    /// Facts as an ordered slice, for snapshots and display.
    pub fn as_slice(&self) -> &[String] {
        &self.facts
    }

    /// Rebuilds a set from an ordered list, dropping blanks and duplicates.
    pub fn from_ordered(facts: impl IntoIterator<Item = String>) -> Self {
        let mut set = Self::new();
        for fact in facts {
            set.insert(&fact);
        }
        set
    }
}

/// Cross-agent pool of facts promoted by consolidation.
///
/// Invariant: a fact in the pool is absent from every individual
/// agent's memory. The pool only grows within a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SharedMemoryPool {
    facts: FactSet,
}

impl SharedMemoryPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Promotes a fact into the pool. Duplicate promotion is a no-op.
    pub fn promote(&mut self, fact: &str) -> bool {
        self.facts.insert(fact)
    }

    pub fn contains(&self, fact: &str) -> bool {
        self.facts.contains(fact)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Pooled facts in promotion order.
    pub fn facts(&self) -> &[String] {
        self.facts.as_slice()
    }

    /// Rebuilds a pool from an ordered fact list.
    pub fn from_ordered(facts: impl IntoIterator<Item = String>) -> Self {
        Self {
            facts: FactSet::from_ordered(facts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_trims_and_deduplicates() {
        let mut set = FactSet::new();
        assert!(set.insert("  the sky is blue  "));
        assert!(!set.insert("the sky is blue"));
        assert_eq!(set.len(), 1);
        assert!(set.contains("the sky is blue"));
    }

    #[test]
    fn blank_facts_are_rejected() {
        let mut set = FactSet::new();
        assert!(!set.insert(""));
        assert!(!set.insert("   \t "));
        assert!(set.is_empty());
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut set = FactSet::new();
        set.insert("b");
        set.insert("a");
        set.insert("c");
        let order: Vec<&str> = set.iter().collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn remove_by_value() {
        let mut set = FactSet::new();
        set.insert("x");
        assert!(set.remove("x"));
        assert!(!set.remove("x"));
        assert!(set.is_empty());
    }

    #[test]
    fn from_ordered_drops_duplicates() {
        let set = FactSet::from_ordered(vec![
            "a".to_string(),
            "a".to_string(),
            " ".to_string(),
            "b".to_string(),
        ]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn pool_promotion_is_idempotent() {
        let mut pool = SharedMemoryPool::new();
        assert!(pool.promote("shared-truth"));
        assert!(!pool.promote("shared-truth"));
        assert_eq!(pool.facts(), ["shared-truth".to_string()]);
    }
}
