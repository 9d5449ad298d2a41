/// Browser collaborators used by the cleaner and the click handler
///
/// Everything runs on the extension's single event loop, so none of these
/// futures need to be `Send`.
use async_trait::async_trait;

use crate::cookie_data::{CookieFilter, CookieRecord, RemovalOptions, RemovalRequest};
use crate::error::BrowserResult;
use crate::settings::DataCategories;

/// Source of the active tab's address
#[async_trait(?Send)]
pub trait TabResolver {
    /// URL of the focused tab in the current window, if there is one
    async fn active_tab_url(&self) -> BrowserResult<Option<String>>;
}

#[async_trait(?Send)]
pub trait CookieStore {
    async fn get_all(&self, filter: &CookieFilter) -> BrowserResult<Vec<CookieRecord>>;

    /// Remove one cookie. Failing for a single cookie is an expected outcome.
    async fn remove(&self, request: &RemovalRequest) -> BrowserResult<()>;
}

#[async_trait(?Send)]
pub trait SiteDataEraser {
    async fn erase(&self, options: &RemovalOptions, categories: &DataCategories) -> BrowserResult<()>;
}

/// Deferred feedback change, applied after a delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revert {
    BadgeText(String),
    Icon(String),
    /// Re-enable the toolbar action
    Enable,
}

/// Write-only feedback on the extension's toolbar action
#[async_trait(?Send)]
pub trait FeedbackSurface {
    async fn set_badge_text(&self, text: &str) -> BrowserResult<()>;

    async fn set_badge_background_color(&self, color: &str) -> BrowserResult<()>;

    async fn set_icon(&self, path: &str) -> BrowserResult<()>;

    async fn set_enabled(&self, enabled: bool) -> BrowserResult<()>;

    /// Fire-and-forget: apply `revert` after `delay_ms`. Never cancelled.
    fn schedule_revert(&self, delay_ms: u32, revert: Revert);
}
