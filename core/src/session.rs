use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, warn};

use crate::character::Character;
use crate::clock::Clock;
use crate::error::ChatError;
use crate::message::{Message, Sender};
use crate::responder::Responder;

/// Identifies one asynchronous request against the session. Completions
/// carrying a token other than the in-flight one are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Everything the conversation view renders: the session's character, the
/// append-only message log, and the loading/error flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    character: Option<Character>,
    messages: Vec<Message>,
    error: Option<String>,
    in_flight: Option<RequestToken>,
    generation: u64,
    next_seq: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// True exactly while one request is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Starts a request unless one is already running.
    pub fn try_begin_request(&mut self) -> Option<RequestToken> {
        if self.in_flight.is_some() {
            return None;
        }
        self.generation += 1;
        let token = RequestToken(self.generation);
        self.in_flight = Some(token);
        self.error = None;
        Some(token)
    }

    /// Applies the outcome of a character generation request. Returns `false`
    /// when `token` is not the in-flight request.
    pub fn finish_character(
        &mut self,
        token: RequestToken,
        result: Result<Character, ChatError>,
        now: i64,
    ) -> bool {
        if !self.settle(token) {
            return false;
        }
        match result {
            Ok(character) => {
                let welcome = self.new_message(character.welcome_text(), Sender::Responder, now);
                self.messages = vec![welcome];
                self.character = Some(character);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    /// Applies the outcome of a reply request. Returns `false` when `token`
    /// is not the in-flight request.
    pub fn finish_reply(
        &mut self,
        token: RequestToken,
        result: Result<String, ChatError>,
        now: i64,
    ) -> bool {
        if !self.settle(token) {
            return false;
        }
        match result {
            Ok(text) => {
                let reply = self.new_message(text, Sender::Responder, now);
                self.messages.push(reply);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    /// Appends a user message stamped with `now`. Rejecting empty input is
    /// the caller's job.
    pub fn add_user_message(&mut self, text: impl Into<String>, now: i64) -> &Message {
        let message = self.new_message(text, Sender::User, now);
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn clear_chat(&mut self) {
        self.messages.clear();
    }

    fn settle(&mut self, token: RequestToken) -> bool {
        if self.in_flight != Some(token) {
            debug!("Discarding stale completion for {token:?}");
            return false;
        }
        self.in_flight = None;
        true
    }

    fn new_message(&mut self, text: impl Into<String>, sender: Sender, now: i64) -> Message {
        let seq = self.next_seq;
        self.next_seq += 1;
        Message::new(text, sender, now, seq)
    }
}

/// Owner of the single `SessionState` instance. The browser backs it with a
/// reactive signal; tests back it with a plain `RefCell`.
///
/// Both methods return `None` once the underlying storage is gone.
pub trait SessionStore {
    fn update<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R>;

    fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> Option<R>;
}

impl SessionStore for Rc<RefCell<SessionState>> {
    fn update<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

/// A reply request that has been started but not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    token: RequestToken,
    pub text: String,
    pub character: Character,
}

/// Drives the session: runs the responder around the loading/error state
/// transitions.
#[derive(Clone)]
pub struct ChatController<S> {
    store: S,
    responder: Rc<dyn Responder>,
    clock: Rc<dyn Clock>,
}

impl<S: SessionStore> ChatController<S> {
    pub fn new(store: S, responder: Rc<dyn Responder>, clock: Rc<dyn Clock>) -> Self {
        Self { store, responder, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Picks the session's character and replaces the log with its welcome
    /// message. Does nothing once a character exists or while another
    /// request is running.
    pub async fn generate_random_character(&self) {
        let token = self
            .store
            .update(|s| if s.character().is_some() { None } else { s.try_begin_request() })
            .flatten();
        let Some(token) = token else {
            debug!("Character generation skipped: character present or request in flight");
            return;
        };

        let result = self.responder.generate_character().await;
        if let Err(e) = &result {
            error!("Character generation failed: {e}");
        }
        let now = self.clock.now_millis();
        self.store.update(|s| s.finish_character(token, result, now));
    }

    /// Asks the responder to answer `text` in character and appends the reply.
    pub async fn send_message(&self, text: String, character: Character) {
        let Some(token) = self.store.update(SessionState::try_begin_request).flatten() else {
            warn!("Message dropped: a request is already in flight");
            return;
        };
        self.deliver(PendingReply { token, text, character }).await;
    }

    /// Resolves a reply started by [`ChatController::submit`].
    pub async fn deliver(&self, pending: PendingReply) {
        let result = self.responder.reply(&pending.character, &pending.text).await;
        if let Err(e) = &result {
            error!("Sending message failed: {e}");
        }
        let now = self.clock.now_millis();
        self.store.update(|s| s.finish_reply(pending.token, result, now));
    }

    pub fn add_user_message(&self, text: &str) {
        let now = self.clock.now_millis();
        self.store.update(|s| {
            s.add_user_message(text, now);
        });
    }

    pub fn clear_chat(&self) {
        self.store.update(SessionState::clear_chat);
    }

    /// Handles a form submission. Blank input, a missing character, or a
    /// request already in flight reject the submission without touching
    /// state. Otherwise the user message is appended, loading starts, and the
    /// returned reply must be passed to [`ChatController::deliver`].
    pub fn submit(&self, input: &str) -> Option<PendingReply> {
        if input.trim().is_empty() {
            return None;
        }
        let now = self.clock.now_millis();
        self.store
            .update(|s| {
                if s.is_loading() {
                    return None;
                }
                let character = s.character()?.clone();
                s.add_user_message(input, now);
                let token = s.try_begin_request()?;
                Some(PendingReply { token, text: input.to_string(), character })
            })
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character() -> Character {
        Character::new("Aria", "Desert nomad and storyteller", "Curious and enthusiastic")
    }

    #[test]
    fn begin_sets_loading_and_clears_error() {
        let mut state = SessionState::new();
        let token = state.try_begin_request().unwrap();
        state.finish_reply(token, Err(ChatError::Send(String::new())), 1);
        assert_eq!(state.error(), Some("Failed to send message"));

        assert!(state.try_begin_request().is_some());
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn only_one_request_in_flight() {
        let mut state = SessionState::new();
        let first = state.try_begin_request().unwrap();
        assert!(state.try_begin_request().is_none());

        assert!(state.finish_reply(first, Ok("ok".into()), 10));
        assert!(!state.is_loading());
        assert!(state.try_begin_request().is_some());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut state = SessionState::new();
        let first = state.try_begin_request().unwrap();
        state.finish_reply(first, Ok("first".into()), 1);
        let second = state.try_begin_request().unwrap();

        assert!(!state.finish_reply(first, Ok("late".into()), 2));
        assert!(state.is_loading());
        assert_eq!(state.messages().len(), 1);

        assert!(state.finish_reply(second, Ok("second".into()), 3));
        assert_eq!(state.messages()[1].text, "second");
    }

    #[test]
    fn character_completion_replaces_log_with_welcome() {
        let mut state = SessionState::new();
        state.add_user_message("left over", 1);
        let token = state.try_begin_request().unwrap();
        state.finish_character(token, Ok(character()), 5);

        assert_eq!(state.character(), Some(&character()));
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].sender, Sender::Responder);
        assert!(state.messages()[0].text.contains("Aria"));
        assert_eq!(state.messages()[0].timestamp, 5);
    }

    #[test]
    fn character_failure_sets_error_and_keeps_no_character() {
        let mut state = SessionState::new();
        let token = state.try_begin_request().unwrap();
        state.finish_character(token, Err(ChatError::CharacterGeneration(String::new())), 5);

        assert!(!state.is_loading());
        assert!(state.character().is_none());
        assert_eq!(state.error(), Some("Failed to generate character"));
    }

    #[test]
    fn same_millisecond_messages_get_distinct_ids() {
        let mut state = SessionState::new();
        let a = state.add_user_message("one", 42).id.clone();
        let b = state.add_user_message("two", 42).id.clone();
        assert_ne!(a, b);
        assert!(a.starts_with("42-"));
    }

    #[test]
    fn clear_chat_always_empties() {
        let mut state = SessionState::new();
        state.clear_chat();
        assert!(state.messages().is_empty());

        for i in 0..3 {
            state.add_user_message(format!("m{i}"), i);
        }
        state.clear_chat();
        assert!(state.messages().is_empty());
    }
}
