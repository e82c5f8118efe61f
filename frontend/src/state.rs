use std::rc::Rc;

use character_chat_core::{
    Character, ChatConfig, ChatController, Message, Responder, SessionState, SessionStore,
    SimulatedResponder,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpResponder;
use crate::clock::BrowserClock;

/// Base URL of the simulated responder API, when the build opts into it.
const API_BASE: Option<&str> = option_env!("CHARACTER_CHAT_API");

/// Session state held in a reactive signal.
#[derive(Clone, Copy)]
pub struct SignalStore(pub RwSignal<SessionState>);

impl SessionStore for SignalStore {
    fn update<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        self.0.try_update(f)
    }

    fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }
}

/// Shared application state, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct AppState {
    pub session: RwSignal<SessionState>,

    // --- Derived read views (for components to subscribe to) ---
    pub character: Memo<Option<Character>>,
    pub messages: Memo<Vec<Message>>,
    pub is_loading: Memo<bool>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let state = Self::new();
        provide_context(state);
        state
    }

    fn new() -> Self {
        let session = RwSignal::new(SessionState::new());
        Self {
            session,
            character: Memo::new(move |_| session.with(|s| s.character().cloned())),
            messages: Memo::new(move |_| session.with(|s| s.messages().to_vec())),
            is_loading: Memo::new(move |_| session.with(SessionState::is_loading)),
        }
    }

    fn controller(&self) -> ChatController<SignalStore> {
        ChatController::new(SignalStore(self.session), responder(), Rc::new(BrowserClock))
    }

    /// Pick the session's character in the background.
    pub fn generate_random_character(&self) {
        let controller = self.controller();
        spawn_local(async move {
            controller.generate_random_character().await;
        });
    }

    /// Handle the input form. Returns `true` when the text was accepted and
    /// a reply is on its way.
    pub fn submit(&self, input: &str) -> bool {
        let controller = self.controller();
        match controller.submit(input) {
            Some(pending) => {
                spawn_local(async move {
                    controller.deliver(pending).await;
                });
                true
            }
            None => false,
        }
    }

    pub fn clear_chat(&self) {
        self.controller().clear_chat();
    }
}

fn responder() -> Rc<dyn Responder> {
    match API_BASE {
        Some(base) => Rc::new(HttpResponder::new(base)),
        None => Rc::new(SimulatedResponder::new(Rc::new(BrowserClock), ChatConfig::default())),
    }
}

#[cfg(test)]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;

    #[test]
    fn signal_store_reads_and_writes_session() {
        let owner = Owner::new();
        owner.set();

        let store = SignalStore(RwSignal::new(SessionState::new()));
        store.update(|s| {
            s.add_user_message("hi", 1);
        });

        assert_eq!(store.read(|s| s.messages().len()), Some(1));
        assert_eq!(store.read(|s| s.messages()[0].text.clone()).as_deref(), Some("hi"));
    }

    #[test]
    fn provided_state_starts_empty_and_is_reachable_from_context() {
        let owner = Owner::new();
        owner.set();

        let provided = AppState::provide();
        let state = expect_context::<AppState>();

        assert_eq!(state.character.get_untracked(), None);
        assert!(state.messages.get_untracked().is_empty());
        assert!(!state.is_loading.get_untracked());

        provided.session.update(|s| {
            s.add_user_message("hi", 1);
        });
        assert_eq!(state.messages.get_untracked().len(), 1);
    }
}
