//! "Copy all content" support: Web Clipboard API wrapper and the copy driver.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::config::COPY_FEEDBACK_MS;
use crate::state::StateStore;
use crate::types::{ClipboardAvailability, ClipboardError};

/// Clipboard operations, allowing for mocking in tests.
#[allow(async_fn_in_trait)]
pub trait ClipboardAccess {
    fn availability(&self) -> ClipboardAvailability;

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// One-shot delay.
#[allow(async_fn_in_trait)]
pub trait Delay {
    async fn sleep(&self, millis: u32);
}

/// `navigator.clipboard` of the current window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl ClipboardAccess for BrowserClipboard {
    fn availability(&self) -> ClipboardAvailability {
        let Some(window) = web_sys::window() else {
            return ClipboardAvailability::Unavailable { secure_context: false };
        };

        // `navigator.clipboard` is undefined outside secure contexts.
        let has_clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
            .map(|v| !v.is_null() && !v.is_undefined())
            .unwrap_or(false);

        if has_clipboard {
            ClipboardAvailability::Available
        } else {
            ClipboardAvailability::Unavailable {
                secure_context: window.is_secure_context(),
            }
        }
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or_else(|| ClipboardError {
            name: "Error".to_string(),
            message: "no global window".to_string(),
        })?;

        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise).await.map(|_| ()).map_err(|e| clipboard_error(&e))
    }
}

/// Browser timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDelay;

impl Delay for BrowserDelay {
    async fn sleep(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}

/// Extract `name` and `message` from a rejected promise value.
fn clipboard_error(value: &JsValue) -> ClipboardError {
    let field = |key: &str| {
        js_sys::Reflect::get(value, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
    };

    ClipboardError {
        name: field("name").unwrap_or_else(|| "Error".to_string()),
        message: field("message")
            .or_else(|| value.as_string())
            .unwrap_or_else(|| "unknown error".to_string()),
    }
}

/// Copy every successfully extracted file to the clipboard.
///
/// On success the button shows "Copied!" for [`COPY_FEEDBACK_MS`] before
/// going back to idle.
pub async fn copy_all<C, D, S>(clipboard: &C, delay: &D, store: &S)
where
    C: ClipboardAccess,
    D: Delay,
    S: StateStore,
{
    let availability = clipboard.availability();
    let Some(payload) = store.modify(|s| s.begin_copy(availability)).flatten() else {
        return;
    };

    match clipboard.write_text(&payload).await {
        Ok(()) => {
            log::info!("📋 Copied {} characters to clipboard", payload.chars().count());
            store.modify(|s| s.copy_succeeded());
            delay.sleep(COPY_FEEDBACK_MS).await;
            store.modify(|s| s.copy_feedback_elapsed());
        }
        Err(e) => {
            log::error!("Error using navigator.clipboard.writeText: {}", e);
            store.modify(|s| s.copy_failed(&e));
        }
    }
}
