//! Agent Classification Types
//!
//! The class and personality labels attached to every agent. The class
//! selects which drift constant table applies; the personality only
//! selects response template pools and never touches the numeric model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which drift constant table an agent runs under.
///
/// Both classes share the same drift/restart contract; they differ only
/// in entropy-step bound, coherence drop factor, and restart multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentClass {
    /// Earth-like cognitive agent (full response surface, seeded facts)
    Zpe,
    /// Cosmic civilization entity (gentler entropy, harsher restarts)
    BigBang,
}

impl fmt::Display for AgentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentClass::Zpe => write!(f, "zpe"),
            AgentClass::BigBang => write!(f, "big_bang"),
        }
    }
}

/// Personality tag selecting response template pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    Friendly,
    Formal,
    Curious,
    Neutral,
    Warm,
}

impl Default for Personality {
    fn default() -> Self {
        Personality::Neutral
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Personality::Friendly => write!(f, "friendly"),
            Personality::Formal => write!(f, "formal"),
            Personality::Curious => write!(f, "curious"),
            Personality::Neutral => write!(f, "neutral"),
            Personality::Warm => write!(f, "warm"),
        }
    }
}

impl FromStr for Personality {
    type Err = ParsePersonalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "friendly" => Ok(Personality::Friendly),
            "formal" => Ok(Personality::Formal),
            "curious" => Ok(Personality::Curious),
            "neutral" => Ok(Personality::Neutral),
            "warm" => Ok(Personality::Warm),
            _ => Err(ParsePersonalityError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown personality label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePersonalityError(pub String);

impl fmt::Display for ParsePersonalityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown personality '{}'", self.0)
    }
}

impl std::error::Error for ParsePersonalityError {}
