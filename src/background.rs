/// Service-worker side wiring: one click handler over the chrome APIs
use crate::chrome::{ChromeAction, ChromeBrowsingData, ChromeCookies, ChromeTabs};
use crate::guard::RunGuard;
use crate::handler::{ClickHandler, ClickOutcome};
use crate::settings::CleanerConfig;

pub type ChromeClickHandler = ClickHandler<ChromeTabs, ChromeCookies, ChromeBrowsingData, ChromeAction>;

thread_local! {
    // One run at a time per extension page
    static RUN_GUARD: RunGuard = RunGuard::new();
}

pub fn chrome_handler(config: CleanerConfig) -> ChromeClickHandler {
    let guard = RUN_GUARD.with(|guard| guard.clone());
    ClickHandler::new(ChromeTabs, ChromeCookies, ChromeBrowsingData, ChromeAction, config, guard)
}

pub async fn handle_action_click() -> ClickOutcome {
    chrome_handler(CleanerConfig::default()).handle_click().await
}

/// The popup's button clears every kind of site data, not just cookies
pub async fn handle_popup_click() -> ClickOutcome {
    chrome_handler(CleanerConfig::full_site()).handle_click().await
}

pub async fn handle_install() {
    chrome_handler(CleanerConfig::default()).prepare_badge().await;
}
