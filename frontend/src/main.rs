mod api;
mod clock;
mod components;
mod models;
mod state;
mod storage;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatUi;
use components::theme::ThemeChanger;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    AppState::provide();

    view! {
        <div class="theme-corner">
            <ThemeChanger />
        </div>
        <main>
            <ChatUi />
        </main>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
