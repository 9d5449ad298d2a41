/// Data structures exchanged with chrome.cookies and chrome.browsingData
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A cookie as reported by the browser's cookie store
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CookieRecord {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub secure: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<Value>,
}

impl CookieRecord {
    pub fn new(domain: &str, name: &str) -> CookieRecord {
        CookieRecord {
            domain: Some(domain.to_string()),
            name: name.to_string(),
            ..CookieRecord::default()
        }
    }
}

/// Details for a single `chrome.cookies.remove` call
///
/// Leaving `partition_key` out addresses the unpartitioned cookie jar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RemovalRequest {
    pub url: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<Value>,
}

/// Filter for `chrome.cookies.getAll`
///
/// Partitioned cookies are only listed when `partition_key` is set; an empty
/// key object matches every partition as well as the unpartitioned jar.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CookieFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<Value>,
}

impl CookieFilter {
    /// Every cookie in every partition
    pub fn all() -> CookieFilter {
        CookieFilter {
            domain: None,
            partition_key: Some(Value::Object(Map::new())),
        }
    }

    pub fn for_domain(domain: &str) -> CookieFilter {
        CookieFilter {
            domain: Some(domain.to_string()),
            partition_key: None,
        }
    }

    pub fn includes_partitioned(&self) -> bool {
        self.partition_key.is_some()
    }
}

/// Scope of a `chrome.browsingData.remove` call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemovalOptions {
    pub origins: Vec<String>,
    pub since: f64,
}

impl RemovalOptions {
    /// Everything ever stored for `origin`
    pub fn for_origin(origin: &str) -> RemovalOptions {
        RemovalOptions {
            origins: vec![origin.to_string()],
            since: 0.0,
        }
    }
}
