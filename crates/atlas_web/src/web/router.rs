//! Thin bridge between the app's `Route` and the browser history.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::document::log_warn;

pub(super) fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub(super) fn push_path(path: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        log_warn("history unavailable");
        return;
    };
    if history
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .is_err()
    {
        log_warn(&format!("pushState failed for {path}"));
    }
}

/// Calls `f` with the new location path on every back/forward navigation.
pub(super) fn on_popstate(mut f: impl FnMut(String) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
        f(current_path());
    }) as Box<dyn FnMut(web_sys::Event)>);

    match window.add_event_listener_with_callback("popstate", cb.as_ref().unchecked_ref()) {
        // Lives for the whole page.
        Ok(()) => cb.forget(),
        Err(_) => log_warn("failed to listen for popstate"),
    }
}
