//! Components that attach the controllers to the page.

mod page_controllers;

#[cfg(target_arch = "wasm32")]
mod page_bindings;

pub use page_controllers::*;
