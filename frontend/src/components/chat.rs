use character_chat_core::message::format_clock;
use character_chat_core::Message;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::clock::utc_offset_minutes;
use crate::state::AppState;

/// Conversation view: character header, message history, and input.
#[component]
pub fn ChatUi() -> impl IntoView {
    let state = expect_context::<AppState>();
    let end_ref = NodeRef::<html::Div>::new();

    // Generate a character on mount when the session has none
    Effect::new(move |_| {
        if state.character.get_untracked().is_none() {
            state.generate_random_character();
        }
    });

    // Keep the newest entry in view
    Effect::new(move |_| {
        state.messages.track();
        state.is_loading.track();
        if let Some(end) = end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            end.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    view! {
        <div class="chat-ui">
            {move || {
                state.character.get().map(|c| {
                    view! {
                        <header class="character-header">
                            <div>
                                <h2 class="character-name">{c.name}</h2>
                                <p class="character-background">{c.background}</p>
                                <p class="character-personality">"Personality: "{c.personality}</p>
                            </div>
                            <button
                                class="clear-btn"
                                on:click=move |_| state.clear_chat()
                                disabled=move || state.is_loading.get()
                            >
                                "Clear chat"
                            </button>
                        </header>
                    }
                })
            }}

            <div class="messages-container">
                <For
                    each=move || state.messages.get()
                    key=|m| m.id.clone()
                    let:msg
                >
                    <MessageBubble message=msg />
                </For>
                <Show when=move || state.is_loading.get()>
                    <div class="message responder">
                        <div class="bubble">
                            <span class="loading-dots">
                                <span></span>
                                <span></span>
                                <span></span>
                            </span>
                        </div>
                    </div>
                </Show>
                <div node_ref=end_ref></div>
            </div>

            <ChatInput />
        </div>
    }
}

/// A single timestamped message bubble.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let state = expect_context::<AppState>();
    let from_user = message.is_from_user();
    let css_class = if from_user { "message user" } else { "message responder" };
    let time = format_clock(message.timestamp, utc_offset_minutes(message.timestamp));

    let author = move || {
        if from_user {
            "You".to_string()
        } else {
            state.character.get().map(|c| c.name).unwrap_or_default()
        }
    };

    view! {
        <div class=css_class>
            <div class="message-meta">
                {author}
                <time class="message-time">{time}</time>
            </div>
            <div class="bubble">{message.text}</div>
        </div>
    }
}

/// Message form: text input and send button.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (input, set_input) = signal(String::new());

    let is_loading = move || state.is_loading.get();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if state.submit(&input.get_untracked()) {
            set_input.set(String::new());
        }
    };

    view! {
        <form class="input-area" on:submit=on_submit>
            <input
                type="text"
                placeholder="Type your message here..."
                prop:value=input
                on:input=move |ev| {
                    set_input.set(event_target_value(&ev));
                }
                disabled=is_loading
            />
            <button
                type="submit"
                class="send-btn"
                disabled=move || is_loading() || input.get().trim().is_empty()
            >
                {move || {
                    if is_loading() {
                        view! { <span class="spinner"></span> }.into_any()
                    } else {
                        view! { "Send" }.into_any()
                    }
                }}
            </button>
        </form>
    }
}
