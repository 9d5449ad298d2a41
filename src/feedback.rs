/// Badge and icon feedback on the toolbar action
use log::debug;

use crate::browser::{FeedbackSurface, Revert};
use crate::settings::FeedbackConfig;

pub const BUSY_LABEL: &str = "...";
pub const ERROR_LABEL: &str = "ERR";
pub const NOTHING_LABEL: &str = "OK";

/// Badge text for a finished run: the count (capped), or "OK" for zero
///
/// Examples:
/// - 0 → "OK"
/// - 42 → "42"
/// - 1500 with cap 999 → "999+"
pub fn count_label(count: usize, cap: usize) -> String {
    if count == 0 {
        NOTHING_LABEL.to_string()
    } else if count > cap {
        format!("{}+", cap)
    } else {
        count.to_string()
    }
}

/// Show `text` on the badge and schedule it to clear
pub async fn flash_badge<F: FeedbackSurface>(surface: &F, config: &FeedbackConfig, text: &str) {
    if let Err(e) = surface.set_badge_text(text).await {
        debug!("Badge update failed: {}", e);
        return;
    }
    if let Err(e) = surface.set_badge_background_color(&config.badge_color).await {
        debug!("Badge color update failed: {}", e);
        return;
    }
    surface.schedule_revert(config.badge_ms, Revert::BadgeText(String::new()));
}

/// Swap in the active icon and schedule the idle icon back
pub async fn flash_icon<F: FeedbackSurface>(surface: &F, config: &FeedbackConfig) {
    if let Err(e) = surface.set_icon(&config.active_icon).await {
        debug!("Icon update failed: {}", e);
    }
    surface.schedule_revert(config.icon_ms, Revert::Icon(config.idle_icon.clone()));
}

/// Apply a scheduled revert once its delay has passed
pub async fn apply_revert<F: FeedbackSurface>(surface: &F, revert: &Revert) {
    let result = match revert {
        Revert::BadgeText(text) => surface.set_badge_text(text).await,
        Revert::Icon(path) => surface.set_icon(path).await,
        Revert::Enable => surface.set_enabled(true).await,
    };
    if let Err(e) = result {
        debug!("Feedback revert failed: {}", e);
    }
}

/// Keeps the toolbar action disabled for the duration of a run
///
/// `release` re-enables it in place. If the lock is dropped without being
/// released, for instance because the run's future was dropped, the
/// re-enable is scheduled as a separate task instead.
pub struct TriggerLock<'a, F: FeedbackSurface> {
    surface: &'a F,
    armed: bool,
}

impl<'a, F: FeedbackSurface> TriggerLock<'a, F> {
    pub async fn engage(surface: &'a F) -> TriggerLock<'a, F> {
        if let Err(e) = surface.set_enabled(false).await {
            debug!("Could not disable the action: {}", e);
        }
        TriggerLock { surface, armed: true }
    }

    pub async fn release(mut self) {
        if let Err(e) = self.surface.set_enabled(true).await {
            debug!("Could not enable the action: {}", e);
        }
        self.armed = false;
    }
}

impl<F: FeedbackSurface> Drop for TriggerLock<'_, F> {
    fn drop(&mut self) {
        if self.armed {
            self.surface.schedule_revert(0, Revert::Enable);
        }
    }
}
