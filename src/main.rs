use dioxus::prelude::*;

mod components;
mod db;
mod diagnostics;
mod favorites;
mod playlist;

use components::PageControllers;

fn main() {
    diagnostics::init_logging();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        PageControllers {}
    }
}
