//! In-memory [`Navigator`] used when no UI router is attached.

use parking_lot::RwLock;

use crate::core::service::Navigator;

/// Keeps the current route and every route navigated to.
pub struct MemoryNavigator {
    current: RwLock<String>,
    history: RwLock<Vec<String>>,
}

impl MemoryNavigator {
    pub fn new(initial_route: &str) -> Self {
        Self {
            current: RwLock::new(initial_route.to_string()),
            history: RwLock::new(Vec::new()),
        }
    }

    /// Routes passed to [`Navigator::navigate`], oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.read().clone()
    }
}

impl Navigator for MemoryNavigator {
    fn current_route(&self) -> String {
        self.current.read().clone()
    }

    fn navigate(&self, route: &str) {
        tracing::info!(route, "Navigating");
        *self.current.write() = route.to_string();
        self.history.write().push(route.to_string());
    }
}
