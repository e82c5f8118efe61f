use std::rc::Rc;

use async_trait::async_trait;
use log::debug;

use crate::character::{simulated_reply, Character};
use crate::clock::Clock;
use crate::config::ChatConfig;
use crate::error::ChatError;

/// Produces the responder's side of the conversation.
///
/// This is the seam where a real language-model call would be plugged in:
/// given the character context (and, for replies, the user's utterance) it
/// asynchronously yields text. Callers own the loading/error state around it.
#[async_trait(?Send)]
pub trait Responder {
    async fn generate_character(&self) -> Result<Character, ChatError>;

    async fn reply(&self, character: &Character, text: &str) -> Result<String, ChatError>;
}

/// Offline responder: waits a fixed delay on the injected clock, then picks a
/// random character or fills in the reply template.
#[derive(Clone)]
pub struct SimulatedResponder {
    clock: Rc<dyn Clock>,
    config: ChatConfig,
}

impl SimulatedResponder {
    pub fn new(clock: Rc<dyn Clock>, config: ChatConfig) -> Self {
        Self { clock, config }
    }
}

#[async_trait(?Send)]
impl Responder for SimulatedResponder {
    async fn generate_character(&self) -> Result<Character, ChatError> {
        self.clock.sleep(self.config.character_delay()).await;
        let character = Character::random(&mut rand::thread_rng());
        debug!("Generated character {}", character.name);
        Ok(character)
    }

    async fn reply(&self, character: &Character, text: &str) -> Result<String, ChatError> {
        self.clock.sleep(self.config.reply_delay()).await;
        Ok(simulated_reply(character, text))
    }
}
