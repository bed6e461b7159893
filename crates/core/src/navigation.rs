//! Hard-navigation side effect
//!
//! Session expiry ends with a full browser navigation, not a client-side
//! route change. The trait keeps that side effect injectable so tests can
//! assert on the intended destination without a real browser.

use std::sync::Mutex;
use url::Url;

/// Performs full-page navigations and exposes the current location.
pub trait Navigator: Send + Sync {
    /// Hard-navigate to `location` (path or absolute URL).
    fn assign(&self, location: &str);

    /// The URL currently being viewed, if one exists.
    ///
    /// Used to carry query parameters (the vault identifier) into redirect
    /// targets.
    fn current_url(&self) -> Option<Url>;
}

/// Test double that records assigned locations instead of navigating.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    current: Option<Url>,
    assigned: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend the browser is currently at `url`.
    pub fn at(url: &str) -> Self {
        Self {
            current: Url::parse(url).ok(),
            assigned: Mutex::new(Vec::new()),
        }
    }

    /// All locations assigned so far, in order.
    pub fn assigned(&self) -> Vec<String> {
        self.assigned.lock().expect("navigator lock").clone()
    }

    /// The most recent assigned location, if any.
    pub fn last_assigned(&self) -> Option<String> {
        self.assigned.lock().expect("navigator lock").last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn assign(&self, location: &str) {
        self.assigned
            .lock()
            .expect("navigator lock")
            .push(location.to_string());
    }

    fn current_url(&self) -> Option<Url> {
        self.current.clone()
    }
}
