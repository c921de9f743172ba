//! Utility functions for the template editor component.
//!
//! - **Dirty Tracking**: MD5 fingerprints of both language bodies, compared
//!   against the fingerprint taken at load or save time, mirrored to the
//!   global `app_dirty` flag read by the page's `beforeunload` guard.
//! - **Cursor Access**: reading the textarea selection in UTF-16 units.

use common::model::template::MessageTemplate;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::HtmlTextAreaElement;

/// Computes the MD5 hash of a string and returns it as a hex digest.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Fingerprint of both bodies of a template. The separator keeps
/// `("ab", "c")` and `("a", "bc")` apart.
pub fn template_md5(template: &MessageTemplate) -> String {
    compute_md5(&format!("{}\u{1f}{}", template.content_ar, template.content_en))
}

/// Sets the global `app_dirty` flag read by the `beforeunload` handler.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}

/// Current value of the global `app_dirty` flag; unset counts as clean.
pub fn window_dirty_flag() -> bool {
    web_sys::window()
        .and_then(|window| Reflect::get(&window, &JsValue::from_str("app_dirty")).ok())
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

/// Selection start of the textarea in UTF-16 code units.
pub fn selection_start(textarea: &HtmlTextAreaElement) -> usize {
    textarea.selection_start().ok().flatten().unwrap_or(0) as usize
}
