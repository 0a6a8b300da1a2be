//! Mounts the playlist controller and favorites registry on the host page.
//! Renders nothing itself; the player and favorites markup come from the server.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::components::page_bindings;
#[cfg(target_arch = "wasm32")]
use crate::db::{load_settings, BrowserStore};
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

#[cfg(target_arch = "wasm32")]
#[component]
pub fn PageControllers() -> Element {
    use_effect(move || {
        let Some(document) = window().and_then(|w| w.document()) else {
            warn!("no document, page controllers not attached");
            return;
        };
        let settings = load_settings(&BrowserStore);
        page_bindings::attach(&document, &settings);
    });

    rsx! {}
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn PageControllers() -> Element {
    use_effect(|| {
        dioxus::logger::tracing::info!("page controllers need a browser document; skipping");
    });

    rsx! {}
}
