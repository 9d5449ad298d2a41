/// Origin-scoped clearing of cookies and site data
use futures::future::join_all;
use log::{debug, warn};

use crate::browser::{CookieStore, SiteDataEraser};
use crate::cookie_data::{CookieFilter, RemovalOptions};
use crate::domain::ActiveTarget;
use crate::operations::{removal_request, select_cookies};
use crate::settings::{DataCategories, FetchStrategy};

pub struct OriginCleaner<S, E> {
    store: S,
    eraser: E,
    strategy: FetchStrategy,
    categories: DataCategories,
}

impl<S: CookieStore, E: SiteDataEraser> OriginCleaner<S, E> {
    pub fn new(store: S, eraser: E, strategy: FetchStrategy, categories: DataCategories) -> Self {
        OriginCleaner {
            store,
            eraser,
            strategy,
            categories,
        }
    }

    /// Remove the target host's cookies, then sweep the origin's site data.
    ///
    /// Returns how many cookies were matched and had removal attempted.
    /// Never fails: every browser error is logged and skipped.
    pub async fn clean(&self, target: &ActiveTarget) -> usize {
        let removed = self.remove_cookies_for_host(&target.host).await;
        self.erase_origin(&target.origin).await;
        removed
    }

    /// Remove every cookie belonging to `host`, all requests in flight at once
    pub async fn remove_cookies_for_host(&self, host: &str) -> usize {
        let filter = match self.strategy {
            FetchStrategy::Targeted => CookieFilter::for_domain(host),
            FetchStrategy::FullScan => CookieFilter::all(),
        };

        let cookies = match self.store.get_all(&filter).await {
            Ok(cookies) => cookies,
            Err(e) => {
                warn!("Could not list cookies for {}: {}", host, e);
                return 0;
            }
        };

        let matched = select_cookies(cookies, host, self.strategy);
        if matched.is_empty() {
            return 0;
        }

        let removals = matched.iter().filter_map(removal_request).map(|request| async move {
            if let Err(e) = self.store.remove(&request).await {
                debug!("Ignoring failed removal of {} at {}: {}", request.name, request.url, e);
            }
        });
        join_all(removals).await;

        matched.len()
    }

    /// Best-effort browsingData sweep of `origin` for the configured categories
    pub async fn erase_origin(&self, origin: &str) {
        if self.categories.is_empty() {
            return;
        }

        let options = RemovalOptions::for_origin(origin);
        if let Err(e) = self.eraser.erase(&options, &self.categories).await {
            debug!("Ignoring failed site data removal for {}: {}", origin, e);
        }
    }
}
