pub mod api;
pub mod app;
pub mod components;
pub mod hooks;
pub mod mermaid;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(app::App);
}
