use character_chat_core::{Theme, ThemePreference};
use leptos::prelude::*;

use crate::storage::{apply_theme, BrowserStorage};

/// Theme dropdown. Restores the saved theme on mount and persists every
/// change to local storage.
#[component]
pub fn ThemeChanger() -> impl IntoView {
    let saved = ThemePreference::new(BrowserStorage).load();
    apply_theme(saved);
    let (theme, set_theme) = signal(saved);

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let Ok(selected) = value.parse::<Theme>() else {
            log::warn!("Ignoring unknown theme {value}");
            return;
        };
        set_theme.set(selected);
        apply_theme(selected);
        if let Err(e) = ThemePreference::new(BrowserStorage).select(selected) {
            log::error!("Failed to persist theme: {e}");
        }
    };

    view! {
        <div class="theme-changer">
            <label class="theme-label" for="theme-select">"Theme"</label>
            <select
                id="theme-select"
                class="theme-select"
                prop:value=move || theme.get().as_str()
                on:change=on_change
            >
                {Theme::ALL
                    .into_iter()
                    .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
