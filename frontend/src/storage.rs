use character_chat_core::theme::THEME_ATTRIBUTE;
use character_chat_core::{ChatError, PreferenceStore, Theme};
use wasm_bindgen::JsValue;

/// `PreferenceStore` over `window.localStorage`.
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ChatError> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ChatError> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }
}

fn local_storage() -> Result<web_sys::Storage, ChatError> {
    web_sys::window()
        .ok_or_else(|| ChatError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| ChatError::Storage("localStorage unavailable".to_string()))
}

fn js_error(e: JsValue) -> ChatError {
    ChatError::Storage(format!("{e:?}"))
}

/// Sets `data-theme` on the document root.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        log::warn!("No document element to apply theme {theme} to");
        return;
    };
    if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
        log::warn!("Failed to apply theme {theme}: {e:?}");
    }
}
