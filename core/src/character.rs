use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const NAMES: &[&str] = &["Aria", "Max", "Luna", "Zack", "Nova", "Leo", "Sofia", "Jake"];

pub const BACKGROUNDS: &[&str] = &[
    "Space explorer from the Andromeda galaxy",
    "Time traveler from the 22nd century",
    "Underwater marine biologist",
    "Former chess grandmaster",
    "Desert nomad and storyteller",
];

pub const PERSONALITIES: &[&str] = &[
    "Curious and enthusiastic",
    "Witty and sarcastic",
    "Calm and thoughtful",
    "Energetic and dramatic",
    "Mysterious and poetic",
];

/// The persona the responder plays for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub background: String,
    pub personality: String,
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        background: impl Into<String>,
        personality: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            background: background.into(),
            personality: personality.into(),
        }
    }

    /// Draws each field independently and uniformly from its fixed list.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(pick(NAMES, rng), pick(BACKGROUNDS, rng), pick(PERSONALITIES, rng))
    }

    /// Greeting that opens every conversation.
    pub fn welcome_text(&self) -> String {
        format!(
            "Hi! I'm {}. I'm {} and I'm {}. How can I help you today?",
            self.name, self.background, self.personality
        )
    }

    /// True when every field comes from its fixed list.
    pub fn is_known(&self) -> bool {
        NAMES.contains(&self.name.as_str())
            && BACKGROUNDS.contains(&self.background.as_str())
            && PERSONALITIES.contains(&self.personality.as_str())
    }

    pub fn has_blank_field(&self) -> bool {
        [&self.name, &self.background, &self.personality]
            .iter()
            .any(|f| f.trim().is_empty())
    }
}

fn pick<R: Rng + ?Sized>(options: &[&'static str], rng: &mut R) -> &'static str {
    options
        .choose(rng)
        .copied()
        // SAFETY: the lists above are non-empty; choose only returns None on empty slices
        .unwrap_or(options[0])
}

/// Canned in-character reply standing in for a language model call.
pub fn simulated_reply(character: &Character, text: &str) -> String {
    format!(
        "As {}, a {} who is {}, I would respond to \"{}\": This is a simulated response! \
         In a real app, this would come from a language model.",
        character.name,
        character.background,
        character.personality,
        text
    )
}
