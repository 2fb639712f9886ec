//! Response Generation
//!
//! Maps a free-text message plus an agent's current state to a
//! templated reply. Classification is simple case-insensitive
//! substring matching; template choice is uniform within the pool the
//! agent's personality selects. Ω is interpolated into every reply to
//! ground it in current numeric state.
//!
//! The generator holds no state of its own. The only mutation it ever
//! performs is routing an explicit teach command into `Agent::add_fact`.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use cog_events::Personality;

use crate::components::Agent;
use crate::config::TuningConfig;

/// Fixed degraded reply when the external lookup collaborator is not
/// wired in. The core never performs network calls itself.
pub const LOOKUP_UNAVAILABLE: &str = "Web search unavailable: no lookup provider is configured.";

/// How an incoming message was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Greeting,
    /// Request to recall a remembered fact
    Recall,
    /// Request for an external web lookup
    Lookup(String),
    /// Explicit teach command carrying the fact text
    Teach(String),
    /// Anything else
    Fallback,
}

const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey", "hiya"];
const RECALL_KEYWORDS: &[&str] = &["tell me a fact", "recall"];

/// Classifies a message by keyword matching.
///
/// Checks run in a fixed order; greetings win over everything else, so
/// "hi, learn this" greets rather than teaches.
pub fn classify(message: &str) -> MessageKind {
    let msg = message.trim().to_lowercase();

    if GREETING_KEYWORDS.iter().any(|k| msg.contains(k)) {
        return MessageKind::Greeting;
    }
    if RECALL_KEYWORDS.iter().any(|k| msg.contains(k)) {
        return MessageKind::Recall;
    }
    let trimmed = message.trim();
    if msg.starts_with("websearch") {
        let query = trimmed.get("websearch".len()..).unwrap_or("").trim();
        return MessageKind::Lookup(query.to_string());
    }
    for prefix in ["learn ", "remember "] {
        if msg.starts_with(prefix) {
            let fact = trimmed.get(prefix.len()..).unwrap_or("").trim();
            return MessageKind::Teach(fact.to_string());
        }
    }

    MessageKind::Fallback
}

fn greeting_pool(personality: Personality) -> &'static [&'static str] {
    match personality {
        Personality::Friendly => &["Hey there!", "Hiya!", "Hello!"],
        Personality::Formal => &["Greetings.", "Hello.", "How may I assist you?"],
        Personality::Curious => &[
            "Oh, hello!",
            "Hi! What's on your mind?",
            "Hey! What do you want to talk about?",
        ],
        Personality::Neutral => &["Hello.", "Hi.", "Greetings."],
        Personality::Warm => &["Hello, friend!", "Hi there!", "Good to see you!"],
    }
}

fn fallback_pool(personality: Personality) -> &'static [&'static str] {
    match personality {
        Personality::Friendly => &[
            "That's interesting! Let me think...",
            "I'll try to find out more.",
            "Good question!",
        ],
        Personality::Formal => &[
            "I am considering your statement.",
            "Unfortunately, I cannot provide an answer now.",
            "Please clarify your request.",
        ],
        Personality::Curious => &[
            "Tell me more about that.",
            "I wonder how that works.",
            "Fascinating!",
        ],
        Personality::Neutral => &[
            "I'm thinking about that.",
            "Could you rephrase?",
            "Let me consider that.",
        ],
        Personality::Warm => &[
            "That sounds wonderful.",
            "Thanks for sharing.",
            "I appreciate that.",
        ],
    }
}

/// Produces a reply to a free-text message.
///
/// Teach commands mutate the agent through `add_fact`; everything else
/// reads the agent's state without touching it. Unknown messages fall
/// through to the personality's fallback pool, never an error.
pub fn respond(
    agent: &mut Agent,
    message: &str,
    config: &TuningConfig,
    rng: &mut SmallRng,
) -> String {
    // Ω is sampled before any teach mutation, matching the audit trail
    // convention of logging the pre-learning score.
    let omega = agent.omega();
    let format_reply = |text: &str| format!("{}: {} (Ω={:.2})", agent.identity, text, omega);

    match classify(message) {
        MessageKind::Greeting => {
            let text = greeting_pool(agent.personality)
                .choose(rng)
                .copied()
                .unwrap_or("Hello.");
            format_reply(text)
        }
        MessageKind::Recall => match agent.recall_fact(config.omega_threshold, rng) {
            Some(fact) => {
                let text = format!("Here's something I remember — {}", fact);
                format!("{}: {} (Ω={:.2})", agent.identity, text, omega)
            }
            None => format_reply("My Ω level is too low or I have no facts to recall."),
        },
        MessageKind::Lookup(_query) => format_reply(LOOKUP_UNAVAILABLE),
        MessageKind::Teach(fact) => {
            if fact.is_empty() {
                format_reply("I didn't catch what to remember.")
            } else {
                agent.add_fact(&fact);
                let text = format!("Got it, I'll remember that: '{}'", fact.trim());
                format!("{}: {} (Ω={:.2})", agent.identity, text, omega)
            }
        }
        MessageKind::Fallback => {
            let text = fallback_pool(agent.personality)
                .choose(rng)
                .copied()
                .unwrap_or("Let me consider that.");
            format_reply(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cog_events::AgentClass;
    use rand::SeedableRng;

    fn agent(personality: Personality) -> Agent {
        Agent::new("Korrin", AgentClass::Zpe, personality)
    }

    #[test]
    fn classification_covers_the_command_surface() {
        assert_eq!(classify("Hello there"), MessageKind::Greeting);
        assert_eq!(classify("HEY!"), MessageKind::Greeting);
        assert_eq!(classify("please recall"), MessageKind::Recall);
        assert_eq!(classify("tell me a fact"), MessageKind::Recall);
        assert_eq!(
            classify("websearch rust language"),
            MessageKind::Lookup("rust language".to_string())
        );
        assert_eq!(
            classify("learn the sky is blue"),
            MessageKind::Teach("the sky is blue".to_string())
        );
        assert_eq!(
            classify("remember water boils at 100C"),
            MessageKind::Teach("water boils at 100C".to_string())
        );
        assert_eq!(classify("what is the weather"), MessageKind::Fallback);
    }

    #[test]
    fn greetings_win_over_teach_commands() {
        // Substring matching runs greeting checks first
        assert_eq!(classify("hi, learn this thing"), MessageKind::Greeting);
    }

    #[test]
    fn bare_teach_keyword_falls_through() {
        assert_eq!(classify("learn  "), MessageKind::Fallback);
        assert_eq!(classify("learn "), MessageKind::Fallback);
    }

    #[test]
    fn every_reply_carries_identity_and_omega() {
        let config = TuningConfig::default();
        let mut rng = SmallRng::seed_from_u64(11);
        let mut a = agent(Personality::Neutral);

        for message in ["hello", "recall", "websearch x", "learn a fact", "mumble"] {
            let reply = respond(&mut a, message, &config, &mut rng);
            assert!(reply.starts_with("Korrin: "), "reply: {}", reply);
            assert!(reply.contains("(Ω="), "reply: {}", reply);
        }
    }

    #[test]
    fn teach_routes_into_add_fact() {
        let config = TuningConfig::default();
        let mut rng = SmallRng::seed_from_u64(11);
        let mut a = agent(Personality::Friendly);

        let reply = respond(&mut a, "remember the moon is round", &config, &mut rng);

        assert!(a.memory.contains("the moon is round"));
        assert!(reply.contains("I'll remember that"));
        assert_eq!(a.bias, 1.1);
    }

    #[test]
    fn teach_is_the_only_mutating_path() {
        let config = TuningConfig::default();
        let mut rng = SmallRng::seed_from_u64(11);
        let mut a = agent(Personality::Warm);
        a.add_fact("existing fact");
        let (state, bias, len) = (a.state, a.bias, a.memory.len());

        for message in ["hello", "recall", "websearch q", "anything else"] {
            respond(&mut a, message, &config, &mut rng);
        }

        assert_eq!(a.state, state);
        assert_eq!(a.bias, bias);
        assert_eq!(a.memory.len(), len);
    }

    #[test]
    fn recall_reply_degrades_when_omega_is_low() {
        let config = TuningConfig::default();
        let mut rng = SmallRng::seed_from_u64(11);
        let mut a = agent(Personality::Formal);
        a.add_fact("a fact");
        a.state = 1.0;

        let reply = respond(&mut a, "recall", &config, &mut rng);
        assert!(reply.contains("too low or I have no facts"));
    }

    #[test]
    fn lookup_degrades_to_the_fixed_reply() {
        let config = TuningConfig::default();
        let mut rng = SmallRng::seed_from_u64(11);
        let mut a = agent(Personality::Curious);

        let reply = respond(&mut a, "websearch anything at all", &config, &mut rng);
        assert!(reply.contains(LOOKUP_UNAVAILABLE));
    }

    #[test]
    fn template_choice_is_reproducible_under_a_seed() {
        let config = TuningConfig::default();
        let mut a1 = agent(Personality::Curious);
        let mut a2 = agent(Personality::Curious);
        let mut rng1 = SmallRng::seed_from_u64(42);
        let mut rng2 = SmallRng::seed_from_u64(42);

        for _ in 0..10 {
            assert_eq!(
                respond(&mut a1, "hello", &config, &mut rng1),
                respond(&mut a2, "hello", &config, &mut rng2)
            );
        }
    }
}
