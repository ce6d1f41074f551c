//! Debounced re-extraction after client-side navigation.
//!
//! Single-page sites swap their content without a page load. The host feeds
//! every URL it observes into a [`NavigationWatcher`] and polls it; once a new
//! URL has been stable for the debounce window the watcher hands it back, and
//! the host re-runs the eligibility check and extraction. The watcher keeps no
//! extraction state of its own.

use std::time::{Duration, Instant};
use tracing::trace;

/// Delay between a URL change and the re-run.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct NavigationWatcher {
    debounce: Duration,
    last_url: Option<String>,
    pending: Option<(String, Instant)>,
}

impl Default for NavigationWatcher {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl NavigationWatcher {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            last_url: None,
            pending: None,
        }
    }

    /// Record the URL seen at `now`. A change schedules a re-run; a repeat of
    /// the current URL does nothing.
    pub fn observe(&mut self, url: &str, now: Instant) {
        if self.last_url.as_deref() == Some(url) {
            return;
        }
        trace!(url, "navigation detected");
        self.last_url = Some(url.to_string());
        self.pending = Some((url.to_string(), now + self.debounce));
    }

    /// The URL to re-extract, once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = matches!(&self.pending, Some((_, deadline)) if now >= *deadline);
        if due {
            self.pending.take().map(|(url, _)| url)
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
