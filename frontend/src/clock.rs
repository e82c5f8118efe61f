use std::time::Duration;

use async_trait::async_trait;
use character_chat_core::Clock;
use wasm_bindgen::JsValue;

/// `Date.now()` plus `setTimeout`-backed sleeps.
pub struct BrowserClock;

#[async_trait(?Send)]
impl Clock for BrowserClock {
    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }

    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// The browser's local offset from UTC, in minutes east, at `timestamp`.
pub fn utc_offset_minutes(timestamp: i64) -> i32 {
    let date = js_sys::Date::new(&JsValue::from_f64(timestamp as f64));
    -(date.get_timezone_offset() as i32)
}
