use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use character_chat_core::character::{BACKGROUNDS, NAMES, PERSONALITIES};
use character_chat_core::{
    ChatConfig, ChatController, ChatError, Character, Clock, Responder, Sender, SessionState,
    SimulatedResponder,
};
use futures_util::poll;

/// Clock over tokio's (paused) timer with a manually readable wall time.
struct TestClock {
    now: Cell<i64>,
}

#[async_trait(?Send)]
impl Clock for TestClock {
    fn now_millis(&self) -> i64 {
        let now = self.now.get();
        self.now.set(now + 1);
        now
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

struct FailingResponder;

#[async_trait(?Send)]
impl Responder for FailingResponder {
    async fn generate_character(&self) -> Result<Character, ChatError> {
        Err(ChatError::CharacterGeneration(String::new()))
    }

    async fn reply(&self, _character: &Character, _text: &str) -> Result<String, ChatError> {
        Err(ChatError::Send(String::new()))
    }
}

type Store = Rc<RefCell<SessionState>>;

fn controller_with(
    responder: impl Fn(Rc<dyn Clock>) -> Rc<dyn Responder>,
) -> ChatController<Store> {
    let clock: Rc<dyn Clock> = Rc::new(TestClock { now: Cell::new(1_700_000_000_000) });
    let store = Rc::new(RefCell::new(SessionState::new()));
    ChatController::new(store, responder(clock.clone()), clock)
}

fn simulated() -> ChatController<Store> {
    controller_with(|clock| {
        Rc::new(SimulatedResponder::new(clock, ChatConfig::default())) as Rc<dyn Responder>
    })
}

fn snapshot(controller: &ChatController<Store>) -> SessionState {
    controller.store().borrow().clone()
}

#[tokio::test(start_paused = true)]
async fn generate_then_chat_scenario() {
    let chat = simulated();

    chat.generate_random_character().await;
    let state = snapshot(&chat);
    let character = state.character().cloned().expect("character generated");
    assert!(NAMES.contains(&character.name.as_str()));
    assert!(BACKGROUNDS.contains(&character.background.as_str()));
    assert!(PERSONALITIES.contains(&character.personality.as_str()));
    assert_eq!(state.messages().len(), 1);
    let welcome = &state.messages()[0].text;
    assert!(welcome.contains(&character.name));
    assert!(welcome.contains(&character.background));
    assert!(welcome.contains(&character.personality));
    assert!(!state.is_loading());

    let pending = chat.submit("Hello").expect("submission accepted");
    assert!(snapshot(&chat).is_loading());

    let delivery = chat.deliver(pending);
    tokio::pin!(delivery);
    assert!(poll!(&mut delivery).is_pending());
    assert!(snapshot(&chat).is_loading());
    delivery.await;

    let state = snapshot(&chat);
    assert!(!state.is_loading());
    assert_eq!(state.messages().len(), 3);
    let user = &state.messages()[1];
    let reply = &state.messages()[2];
    assert_eq!(user.text, "Hello");
    assert_eq!(user.sender, Sender::User);
    assert_eq!(reply.sender, Sender::Responder);
    assert!(reply.text.contains("Hello"));
}

#[tokio::test(start_paused = true)]
async fn blank_input_is_rejected() {
    let chat = simulated();
    chat.generate_random_character().await;

    for input in ["", "   ", "\n\t"] {
        assert!(chat.submit(input).is_none());
    }
    let state = snapshot(&chat);
    assert_eq!(state.messages().len(), 1);
    assert!(!state.is_loading());
}

#[tokio::test(start_paused = true)]
async fn submit_without_character_is_a_no_op() {
    let chat = simulated();
    assert!(chat.submit("Hello").is_none());
    assert_eq!(snapshot(&chat), SessionState::new());
}

#[tokio::test(start_paused = true)]
async fn each_send_adds_exactly_two_messages() {
    let chat = simulated();
    chat.generate_random_character().await;

    for (i, text) in ["one", "two", "three"].into_iter().enumerate() {
        let before = snapshot(&chat).messages().len();
        let pending = chat.submit(text).expect("accepted");
        chat.deliver(pending).await;
        assert_eq!(snapshot(&chat).messages().len(), before + 2, "round {i}");
    }
}

#[tokio::test(start_paused = true)]
async fn submit_while_reply_pending_is_rejected() {
    let chat = simulated();
    chat.generate_random_character().await;

    let pending = chat.submit("first").expect("accepted");
    assert!(chat.submit("second").is_none());
    chat.deliver(pending).await;

    let texts: Vec<String> = snapshot(&chat).messages().iter().map(|m| m.text.clone()).collect();
    assert_eq!(texts.len(), 3);
    assert_eq!(texts[1], "first");
}

#[tokio::test(start_paused = true)]
async fn overlapping_send_is_dropped() {
    let chat = simulated();
    chat.generate_random_character().await;
    let character = snapshot(&chat).character().cloned().unwrap();

    let first = chat.send_message("a".into(), character.clone());
    tokio::pin!(first);
    assert!(poll!(&mut first).is_pending());

    chat.send_message("b".into(), character).await;
    first.await;

    let state = snapshot(&chat);
    assert_eq!(state.messages().len(), 2);
    assert!(state.messages()[1].text.contains("\"a\""));
}

#[tokio::test(start_paused = true)]
async fn character_is_generated_once_per_session() {
    let chat = simulated();
    chat.generate_random_character().await;
    let pending = chat.submit("hi").unwrap();
    chat.deliver(pending).await;
    let before = snapshot(&chat);

    chat.generate_random_character().await;
    assert_eq!(snapshot(&chat), before);
}

#[tokio::test(start_paused = true)]
async fn clear_chat_empties_log_but_keeps_character() {
    let chat = simulated();
    chat.clear_chat();
    assert!(snapshot(&chat).messages().is_empty());

    chat.generate_random_character().await;
    chat.add_user_message("one");
    chat.add_user_message("two");
    chat.clear_chat();

    let state = snapshot(&chat);
    assert!(state.messages().is_empty());
    assert!(state.character().is_some());
}

#[tokio::test(start_paused = true)]
async fn failures_set_error_and_clear_loading() {
    let chat = controller_with(|_| Rc::new(FailingResponder) as Rc<dyn Responder>);

    chat.generate_random_character().await;
    let state = snapshot(&chat);
    assert!(!state.is_loading());
    assert!(state.character().is_none());
    assert_eq!(state.error(), Some("Failed to generate character"));

    let character = Character::new("Jake", "Former chess grandmaster", "Witty and sarcastic");
    chat.send_message("ping".into(), character).await;
    let state = snapshot(&chat);
    assert!(!state.is_loading());
    assert_eq!(state.error(), Some("Failed to send message"));
    assert!(state.messages().is_empty());
}
