use dioxus::logger::tracing::Level;

/// Route controller logs to the browser console (or stderr off-wasm).
pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // Errs only when a global subscriber is already set.
    let _ = dioxus::logger::init(level);
}
