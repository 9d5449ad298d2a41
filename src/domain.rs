/// Host resolution and cookie-domain matching for Origin Cleaner
use url::Url;

/// The site a click operates on: the active tab's hostname and origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTarget {
    pub host: String,
    pub origin: String,
}

impl ActiveTarget {
    /// Resolve the target from the active tab's address.
    ///
    /// Only `http` and `https` pages have a target. Internal pages
    /// (`chrome://settings`, `about:blank`, extension pages) and anything
    /// that does not parse as a URL yield `None`.
    ///
    /// Examples:
    /// - https://www.example.com/login → host "www.example.com", origin "https://www.example.com"
    /// - http://localhost:3000/ → host "localhost", origin "http://localhost:3000"
    pub fn from_tab_url(tab_url: &str) -> Option<ActiveTarget> {
        let url = Url::parse(tab_url.trim()).ok()?;

        if !matches!(url.scheme(), "http" | "https") {
            return None;
        }

        let host = url.host_str()?.to_lowercase();
        if host.is_empty() {
            return None;
        }

        Some(ActiveTarget {
            host,
            origin: url.origin().ascii_serialization(),
        })
    }
}

/// Lowercase a cookie's domain attribute and strip one leading dot
pub fn normalize_cookie_domain(cookie_domain: &str) -> String {
    let lower = cookie_domain.to_lowercase();
    match lower.strip_prefix('.') {
        Some(stripped) => stripped.to_string(),
        None => lower,
    }
}

/// Check whether a cookie domain belongs to `hostname`
///
/// Algorithm:
/// 1. Reject empty inputs
/// 2. Normalize the cookie domain (lowercase, drop one leading ".")
/// 3. Match if the hostname equals it, or ends with "." + it
///
/// Matching is on whole labels, so "evilexample.com" never matches
/// "example.com". There is no public-suffix awareness.
pub fn host_matches(hostname: &str, cookie_domain: &str) -> bool {
    if hostname.is_empty() || cookie_domain.is_empty() {
        return false;
    }

    let domain = normalize_cookie_domain(cookie_domain);
    if domain.is_empty() {
        return false;
    }

    hostname == domain || hostname.ends_with(&format!(".{}", domain))
}
