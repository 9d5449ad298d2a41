/// Fixed configuration for Origin Cleaner
use serde::{Deserialize, Serialize};

/// How cookies for the target host are fetched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchStrategy {
    /// Ask the browser for `{domain: host}` and trust its filtering
    #[default]
    Targeted,
    /// Fetch every cookie and select the host's cookies locally
    FullScan,
}

/// Data types passed as `dataToRemove` to chrome.browsingData.remove
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataCategories {
    pub cookies: bool,
    #[serde(rename = "localStorage")]
    pub local_storage: bool,
    #[serde(rename = "indexedDB")]
    pub indexed_db: bool,
    #[serde(rename = "cacheStorage")]
    pub cache_storage: bool,
    pub cache: bool,
    #[serde(rename = "serviceWorkers")]
    pub service_workers: bool,
    #[serde(rename = "pluginData")]
    pub plugin_data: bool,
}

impl DataCategories {
    pub fn none() -> Self {
        DataCategories::default()
    }

    pub fn cookies_only() -> Self {
        DataCategories {
            cookies: true,
            ..DataCategories::default()
        }
    }

    pub fn all() -> Self {
        DataCategories {
            cookies: true,
            local_storage: true,
            indexed_db: true,
            cache_storage: true,
            cache: true,
            service_workers: true,
            plugin_data: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == DataCategories::none()
    }
}

/// Badge and icon feedback constants
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackConfig {
    pub badge_color: String,
    pub badge_ms: u32,
    pub icon_ms: u32,
    pub active_icon: String,
    pub idle_icon: String,
    /// Counts above this show as "<cap>+"
    pub badge_cap: usize,
    pub flash_icon: bool,
    /// Disable the toolbar action while a run is in flight
    pub disable_trigger: bool,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        FeedbackConfig {
            badge_color: "#333".to_string(),
            badge_ms: 1200,
            icon_ms: 800,
            active_icon: "icon128_active.png".to_string(),
            idle_icon: "icon128.png".to_string(),
            badge_cap: 999,
            flash_icon: true,
            disable_trigger: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanerConfig {
    pub strategy: FetchStrategy,
    pub categories: DataCategories,
    pub feedback: FeedbackConfig,
}

impl CleanerConfig {
    /// Cookies only: targeted fetch plus an origin-wide cookie sweep
    pub fn cookies_only() -> Self {
        CleanerConfig {
            strategy: FetchStrategy::Targeted,
            categories: DataCategories::cookies_only(),
            feedback: FeedbackConfig::default(),
        }
    }

    /// Full scan of the cookie jar and every site-data category
    pub fn full_site() -> Self {
        CleanerConfig {
            strategy: FetchStrategy::FullScan,
            categories: DataCategories::all(),
            feedback: FeedbackConfig::default(),
        }
    }
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self::cookies_only()
    }
}
