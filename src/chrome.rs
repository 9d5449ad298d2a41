/// chrome.* implementations of the browser collaborators

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser::{CookieStore, FeedbackSurface, Revert, SiteDataEraser, TabResolver};
use crate::cookie_data::{CookieFilter, CookieRecord, RemovalOptions, RemovalRequest};
use crate::error::{BrowserError, BrowserResult};
use crate::feedback::apply_revert;
use crate::settings::DataCategories;

// Import JS bridge functions
#[wasm_bindgen(module = "/chrome_bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTabUrl() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getAllCookies(filter: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeCookie(details: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeBrowsingData(options: JsValue, data_to_remove: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn setBadgeText(text: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn setBadgeBackgroundColor(color: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn setIcon(path: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn setActionEnabled(enabled: bool) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn sleep(ms: u32) -> Result<(), JsValue>;
}

fn api_error(e: JsValue) -> BrowserError {
    BrowserError::Api(format!("{:?}", e))
}

// Plain objects only: chrome rejects the Map values the default serializer emits
fn to_js<T: Serialize>(value: &T) -> BrowserResult<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| BrowserError::Encode(e.to_string()))
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> BrowserResult<T> {
    serde_wasm_bindgen::from_value(value).map_err(|e| BrowserError::Decode(e.to_string()))
}

/// chrome.tabs
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeTabs;

#[async_trait(?Send)]
impl TabResolver for ChromeTabs {
    async fn active_tab_url(&self) -> BrowserResult<Option<String>> {
        let url = getActiveTabUrl().await.map_err(api_error)?;
        if url.is_null() || url.is_undefined() {
            return Ok(None);
        }
        Ok(url.as_string())
    }
}

/// chrome.cookies
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeCookies;

#[async_trait(?Send)]
impl CookieStore for ChromeCookies {
    async fn get_all(&self, filter: &CookieFilter) -> BrowserResult<Vec<CookieRecord>> {
        let cookies_js = getAllCookies(to_js(filter)?).await.map_err(api_error)?;
        if cookies_js.is_null() || cookies_js.is_undefined() {
            return Ok(Vec::new());
        }
        from_js(cookies_js)
    }

    async fn remove(&self, request: &RemovalRequest) -> BrowserResult<()> {
        removeCookie(to_js(request)?).await.map_err(api_error)
    }
}

/// chrome.browsingData
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeBrowsingData;

#[async_trait(?Send)]
impl SiteDataEraser for ChromeBrowsingData {
    async fn erase(&self, options: &RemovalOptions, categories: &DataCategories) -> BrowserResult<()> {
        removeBrowsingData(to_js(options)?, to_js(categories)?)
            .await
            .map_err(api_error)
    }
}

/// chrome.action
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeAction;

#[async_trait(?Send)]
impl FeedbackSurface for ChromeAction {
    async fn set_badge_text(&self, text: &str) -> BrowserResult<()> {
        setBadgeText(text).await.map_err(api_error)
    }

    async fn set_badge_background_color(&self, color: &str) -> BrowserResult<()> {
        setBadgeBackgroundColor(color).await.map_err(api_error)
    }

    async fn set_icon(&self, path: &str) -> BrowserResult<()> {
        setIcon(path).await.map_err(api_error)
    }

    async fn set_enabled(&self, enabled: bool) -> BrowserResult<()> {
        setActionEnabled(enabled).await.map_err(api_error)
    }

    fn schedule_revert(&self, delay_ms: u32, revert: Revert) {
        spawn_local(async move {
            if sleep(delay_ms).await.is_ok() {
                apply_revert(&ChromeAction, &revert).await;
            }
        });
    }
}
