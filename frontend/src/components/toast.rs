//! Short-lived notifications at the bottom of the page.
//!
//! Toasts are plain text nodes styled by the `.toast` rules of `index.html`,
//! so backend messages never reach the DOM as markup.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

const TOAST_MILLIS: u32 = 3000;
const ERROR_TOAST_MILLIS: u32 = 6000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

impl ToastKind {
    fn class_name(self) -> &'static str {
        match self {
            ToastKind::Info => "toast",
            ToastKind::Error => "toast error",
        }
    }

    fn millis(self) -> u32 {
        match self {
            ToastKind::Info => TOAST_MILLIS,
            ToastKind::Error => ERROR_TOAST_MILLIS,
        }
    }
}

pub fn show_toast(message: &str) {
    toast(ToastKind::Info, message);
}

/// Failures stay on screen twice as long.
pub fn show_error_toast(message: &str) {
    toast(ToastKind::Error, message);
}

fn toast(kind: ToastKind, message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(element), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    element.set_class_name(kind.class_name());
    element.set_text_content(Some(message));
    if body.append_child(&element).is_err() {
        return;
    }
    spawn_local(async move {
        TimeoutFuture::new(kind.millis()).await;
        element.remove();
    });
}
