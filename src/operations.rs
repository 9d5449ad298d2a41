/// Cookie operations: removal URLs, removal requests, selection by strategy

use crate::cookie_data::{CookieRecord, RemovalRequest};
use crate::domain::{host_matches, normalize_cookie_domain};
use crate::settings::FetchStrategy;

/// Build the URL chrome.cookies.remove needs to address `cookie`
///
/// The browser removes cookies by effective URL + name rather than by raw
/// domain, so the URL is rebuilt from the cookie's own attributes:
/// `https` for secure cookies, otherwise `http`, then the normalized domain
/// and the cookie path (default "/").
pub fn cookie_url(cookie: &CookieRecord) -> Option<String> {
    let domain = cookie.domain.as_deref().filter(|d| !d.is_empty())?;

    let scheme = if cookie.secure { "https" } else { "http" };
    let path = cookie.path.as_deref().filter(|p| !p.is_empty()).unwrap_or("/");

    Some(format!("{}://{}{}", scheme, normalize_cookie_domain(domain), path))
}

/// Build the removal details for `cookie`, or `None` if it has no domain
pub fn removal_request(cookie: &CookieRecord) -> Option<RemovalRequest> {
    cookie_url(cookie).map(|url| RemovalRequest {
        url,
        name: cookie.name.clone(),
        store_id: cookie.store_id.clone(),
        partition_key: cookie.partition_key.clone(),
    })
}

/// Pick the cookies to remove from what the browser returned
///
/// Targeted fetches were already filtered by the browser and are kept as-is.
/// Full scans are narrowed to the cookies whose domain covers `host`.
pub fn select_cookies(
    cookies: Vec<CookieRecord>,
    host: &str,
    strategy: FetchStrategy,
) -> Vec<CookieRecord> {
    match strategy {
        FetchStrategy::Targeted => cookies,
        FetchStrategy::FullScan => cookies
            .into_iter()
            .filter(|cookie| {
                cookie
                    .domain
                    .as_deref()
                    .is_some_and(|domain| host_matches(host, domain))
            })
            .collect(),
    }
}
