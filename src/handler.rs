/// Click dispatch: guard, resolve the active site, clean, report back
use log::{debug, info, warn};

use crate::browser::{CookieStore, FeedbackSurface, SiteDataEraser, TabResolver};
use crate::cleaner::OriginCleaner;
use crate::domain::ActiveTarget;
use crate::feedback::{count_label, flash_badge, flash_icon, TriggerLock, BUSY_LABEL, ERROR_LABEL};
use crate::guard::RunGuard;
use crate::settings::{CleanerConfig, FeedbackConfig};

/// What a click ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Cookies were matched and removal was attempted
    Cleared(usize),
    /// The site had no cookies to remove
    Nothing,
    /// No http(s) page is active
    NoTarget,
    /// Another run was still in flight
    Busy,
}

impl ClickOutcome {
    pub fn badge_label(&self, cap: usize) -> String {
        match self {
            ClickOutcome::Cleared(count) => count_label(*count, cap),
            ClickOutcome::Nothing => count_label(0, cap),
            ClickOutcome::NoTarget => ERROR_LABEL.to_string(),
            ClickOutcome::Busy => BUSY_LABEL.to_string(),
        }
    }

    /// One-line status for the popup
    pub fn message(&self) -> String {
        match self {
            ClickOutcome::Cleared(1) => "Removed 1 cookie".to_string(),
            ClickOutcome::Cleared(count) => format!("Removed {} cookies", count),
            ClickOutcome::Nothing => "No cookies to remove".to_string(),
            ClickOutcome::NoTarget => "Open a web page to clear its data".to_string(),
            ClickOutcome::Busy => "Already clearing, please wait".to_string(),
        }
    }
}

/// The active tab's http(s) site, or `None` for anything else
pub async fn resolve_active_target<T: TabResolver>(tabs: &T) -> Option<ActiveTarget> {
    match tabs.active_tab_url().await {
        Ok(Some(url)) => ActiveTarget::from_tab_url(&url),
        Ok(None) => None,
        Err(e) => {
            warn!("Could not query the active tab: {}", e);
            None
        }
    }
}

pub struct ClickHandler<T, S, E, F> {
    tabs: T,
    cleaner: OriginCleaner<S, E>,
    feedback: F,
    feedback_config: FeedbackConfig,
    guard: RunGuard,
}

impl<T, S, E, F> ClickHandler<T, S, E, F>
where
    T: TabResolver,
    S: CookieStore,
    E: SiteDataEraser,
    F: FeedbackSurface,
{
    pub fn new(tabs: T, store: S, eraser: E, feedback: F, config: CleanerConfig, guard: RunGuard) -> Self {
        ClickHandler {
            tabs,
            cleaner: OriginCleaner::new(store, eraser, config.strategy, config.categories),
            feedback,
            feedback_config: config.feedback,
            guard,
        }
    }

    /// Handle one activation of the trigger.
    ///
    /// The guard is taken before the first await, so a second click that
    /// arrives while this one is suspended is turned away as `Busy`.
    pub async fn handle_click(&self) -> ClickOutcome {
        let Some(_permit) = self.guard.try_acquire() else {
            debug!("Click ignored, a run is already in flight");
            flash_badge(&self.feedback, &self.feedback_config, BUSY_LABEL).await;
            return ClickOutcome::Busy;
        };

        let lock = if self.feedback_config.disable_trigger {
            Some(TriggerLock::engage(&self.feedback).await)
        } else {
            None
        };

        let outcome = self.run().await;

        if let Some(lock) = lock {
            lock.release().await;
        }

        outcome
    }

    /// Set the persistent badge color once at install/update time
    pub async fn prepare_badge(&self) {
        if let Err(e) = self
            .feedback
            .set_badge_background_color(&self.feedback_config.badge_color)
            .await
        {
            debug!("Could not set badge color: {}", e);
        }
    }

    async fn run(&self) -> ClickOutcome {
        let Some(target) = resolve_active_target(&self.tabs).await else {
            flash_badge(&self.feedback, &self.feedback_config, ERROR_LABEL).await;
            return ClickOutcome::NoTarget;
        };

        let count = self.cleaner.clean(&target).await;
        info!("Cleared {} cookie(s) for {}", count, target.origin);

        let outcome = if count > 0 {
            ClickOutcome::Cleared(count)
        } else {
            ClickOutcome::Nothing
        };

        let label = outcome.badge_label(self.feedback_config.badge_cap);
        flash_badge(&self.feedback, &self.feedback_config, &label).await;
        if self.feedback_config.flash_icon {
            flash_icon(&self.feedback, &self.feedback_config).await;
        }

        outcome
    }
}
