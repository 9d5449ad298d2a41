/// In-memory browser used by the async tests
use std::cell::RefCell;
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use async_trait::async_trait;
use url::Url;

use crate::browser::{CookieStore, FeedbackSurface, Revert, SiteDataEraser, TabResolver};
use crate::cookie_data::{CookieFilter, CookieRecord, RemovalOptions, RemovalRequest};
use crate::domain::normalize_cookie_domain;
use crate::error::{BrowserError, BrowserResult};
use crate::settings::DataCategories;

#[derive(Debug, Default)]
pub struct MockState {
    pub tab_url: Option<String>,
    pub cookies: Vec<CookieRecord>,
    pub failing_names: HashSet<String>,
    pub fail_get_all: bool,
    /// Hand back every cookie whatever the filter says
    pub ignore_filter: bool,
    pub fail_erase: bool,
    pub fail_feedback: bool,
    /// Suspend once inside the tab query
    pub yield_on_tab_query: bool,
    /// Suspend once inside every cookie removal
    pub yield_on_remove: bool,

    pub tab_queries: usize,
    pub filters: Vec<CookieFilter>,
    pub removals: Vec<RemovalRequest>,
    pub erasures: Vec<(RemovalOptions, DataCategories)>,
    /// Start/finish order of removals and erasures
    pub events: Vec<String>,
    pub badge_texts: Vec<String>,
    pub badge_colors: Vec<String>,
    pub icons: Vec<String>,
    pub enabled: Vec<bool>,
    pub scheduled: Vec<(u32, Revert)>,
}

/// Shared handle; clones see the same state
#[derive(Debug, Clone, Default)]
pub struct MockBrowser {
    pub state: Rc<RefCell<MockState>>,
}

impl MockBrowser {
    pub fn with_tab(url: &str) -> Self {
        let browser = MockBrowser::default();
        browser.state.borrow_mut().tab_url = Some(url.to_string());
        browser
    }

    pub fn add_cookie(&self, domain: &str, name: &str) {
        self.state.borrow_mut().cookies.push(CookieRecord {
            store_id: Some("0".to_string()),
            ..CookieRecord::new(domain, name)
        });
    }

    pub fn fail_removal_of(&self, name: &str) {
        self.state.borrow_mut().failing_names.insert(name.to_string());
    }

    pub fn remaining_names(&self) -> Vec<String> {
        self.state.borrow().cookies.iter().map(|c| c.name.clone()).collect()
    }

    pub fn removal_count(&self) -> usize {
        self.state.borrow().removals.len()
    }
}

/// Returns Pending once, then completes
#[derive(Default)]
pub struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

#[async_trait(?Send)]
impl TabResolver for MockBrowser {
    async fn active_tab_url(&self) -> BrowserResult<Option<String>> {
        let should_yield = {
            let mut state = self.state.borrow_mut();
            state.tab_queries += 1;
            state.yield_on_tab_query
        };
        if should_yield {
            YieldNow::default().await;
        }
        Ok(self.state.borrow().tab_url.clone())
    }
}

#[async_trait(?Send)]
impl CookieStore for MockBrowser {
    async fn get_all(&self, filter: &CookieFilter) -> BrowserResult<Vec<CookieRecord>> {
        let mut state = self.state.borrow_mut();
        state.filters.push(filter.clone());

        if state.fail_get_all {
            return Err(BrowserError::Api("cookie store unavailable".to_string()));
        }

        // Same rules as chrome: the domain filter also returns subdomain
        // cookies, and partitioned cookies need a partitionKey in the filter
        let cookies = state
            .cookies
            .iter()
            .filter(|cookie| {
                state.ignore_filter || cookie.partition_key.is_none() || filter.includes_partitioned()
            })
            .filter(|cookie| match &filter.domain {
                _ if state.ignore_filter => true,
                None => true,
                Some(wanted) => cookie.domain.as_deref().is_some_and(|d| {
                    let d = normalize_cookie_domain(d);
                    d == *wanted || d.ends_with(&format!(".{}", wanted))
                }),
            })
            .cloned()
            .collect();

        Ok(cookies)
    }

    async fn remove(&self, request: &RemovalRequest) -> BrowserResult<()> {
        let should_yield = {
            let mut state = self.state.borrow_mut();
            state.removals.push(request.clone());
            state.events.push(format!("remove-start:{}", request.name));
            state.yield_on_remove
        };
        if should_yield {
            YieldNow::default().await;
        }

        let mut state = self.state.borrow_mut();
        state.events.push(format!("remove-end:{}", request.name));

        if state.failing_names.contains(&request.name) {
            return Err(BrowserError::Api(format!("could not remove {}", request.name)));
        }

        let host = Url::parse(&request.url)
            .ok()
            .and_then(|url| url.host_str().map(|h| h.to_string()))
            .unwrap_or_default();

        state.cookies.retain(|cookie| {
            let same_domain = cookie
                .domain
                .as_deref()
                .is_some_and(|d| normalize_cookie_domain(d) == host);
            !(same_domain && cookie.name == request.name && cookie.store_id == request.store_id)
        });

        Ok(())
    }
}

#[async_trait(?Send)]
impl SiteDataEraser for MockBrowser {
    async fn erase(&self, options: &RemovalOptions, categories: &DataCategories) -> BrowserResult<()> {
        let mut state = self.state.borrow_mut();
        state.erasures.push((options.clone(), *categories));
        state.events.push("erase".to_string());

        if state.fail_erase {
            return Err(BrowserError::Api("browsingData rejected".to_string()));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl FeedbackSurface for MockBrowser {
    async fn set_badge_text(&self, text: &str) -> BrowserResult<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_feedback {
            return Err(BrowserError::Api("action unavailable".to_string()));
        }
        state.badge_texts.push(text.to_string());
        Ok(())
    }

    async fn set_badge_background_color(&self, color: &str) -> BrowserResult<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_feedback {
            return Err(BrowserError::Api("action unavailable".to_string()));
        }
        state.badge_colors.push(color.to_string());
        Ok(())
    }

    async fn set_icon(&self, path: &str) -> BrowserResult<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_feedback {
            return Err(BrowserError::Api("action unavailable".to_string()));
        }
        state.icons.push(path.to_string());
        Ok(())
    }

    async fn set_enabled(&self, enabled: bool) -> BrowserResult<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_feedback {
            return Err(BrowserError::Api("action unavailable".to_string()));
        }
        state.enabled.push(enabled);
        Ok(())
    }

    fn schedule_revert(&self, delay_ms: u32, revert: Revert) {
        self.state.borrow_mut().scheduled.push((delay_ms, revert));
    }
}
