/// Origin Cleaner - Chrome Extension that clears the current site's cookies and data
/// Built with Rust + WASM + Yew

mod background;
pub mod browser;
mod chrome;
pub mod cleaner;
pub mod cookie_data;
pub mod domain;
pub mod error;
pub mod feedback;
pub mod guard;
pub mod handler;
pub mod operations;
pub mod settings;
pub mod ui;

#[cfg(test)]
mod mock;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the matcher for JavaScript access
#[wasm_bindgen]
pub fn host_matches(hostname: &str, cookie_domain: &str) -> bool {
    domain::host_matches(hostname, cookie_domain)
}

// chrome.action.onClicked; resolves to the badge text shown
#[wasm_bindgen]
pub async fn on_action_clicked() -> String {
    let outcome = background::handle_action_click().await;
    outcome.badge_label(settings::FeedbackConfig::default().badge_cap)
}

// chrome.runtime.onInstalled
#[wasm_bindgen]
pub async fn on_installed() {
    background::handle_install().await;
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
