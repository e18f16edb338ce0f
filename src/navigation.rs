// 🧭 Navigation Coordinator - route stack rooted at the champion list
//
//     List ──push(Detail{id})──► Detail{id}
//      ▲                            │
//      └────────── pop() ───────────┘
//
// Routes carry the champion id by value. The detail screen re-resolves it.

use crate::champion::ChampionId;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Detail { champion_id: ChampionId },
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::List => "Champions",
            Route::Detail { .. } => "Champion",
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavigationCoordinator {
    /// Never empty; index 0 is always `Route::List`
    stack: Vec<Route>,
}

impl NavigationCoordinator {
    pub fn new() -> Self {
        NavigationCoordinator {
            stack: vec![Route::List],
        }
    }

    pub fn push(&mut self, route: Route) {
        debug!(?route, depth = self.stack.len() + 1, "navigate");
        self.stack.push(route);
    }

    /// Pop the top route.
    ///
    /// Returns false (and leaves the stack alone) when only the root remains;
    /// the caller decides what app-level back means.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        let popped = self.stack.pop();
        debug!(?popped, depth = self.stack.len(), "navigate back");
        true
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::List)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.stack.len() == 1
    }

    /// Drop everything above the root
    pub fn reset(&mut self) {
        self.stack.truncate(1);
    }
}

impl Default for NavigationCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
