// 📱 App - application root
//
// Owns the store and hands it to the controllers. Every user action lands
// here and is routed to the controller for the current screen.

use crate::champion::ChampionId;
use crate::config::AppConfig;
use crate::detail_view::DetailViewController;
use crate::list_view::{ListViewController, TapMode, TapOutcome};
use crate::navigation::{NavigationCoordinator, Route};
use crate::store::ChampionStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Renderer-independent user intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    First,
    Last,
    /// Tap the selected row
    Activate,
    Back,
    Quit,
}

pub struct App {
    store: Arc<ChampionStore>,
    list: ListViewController,
    detail: Option<DetailViewController>,
    navigation: NavigationCoordinator,
    should_quit: bool,
}

impl App {
    pub fn new(store: ChampionStore, config: &AppConfig) -> Self {
        let store = Arc::new(store);
        let list = ListViewController::new(Arc::clone(&store), config.tap_mode);

        info!(
            champions = store.count(),
            tap_mode = config.tap_mode.as_str(),
            "app started"
        );

        App {
            store,
            list,
            detail: None,
            navigation: NavigationCoordinator::new(),
            should_quit: false,
        }
    }

    pub fn store(&self) -> &ChampionStore {
        &self.store
    }

    pub fn list(&self) -> &ListViewController {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListViewController {
        &mut self.list
    }

    /// Detail controller, present only while a detail route is on top
    pub fn detail(&self) -> Option<&DetailViewController> {
        self.detail.as_ref()
    }

    pub fn navigation(&self) -> &NavigationCoordinator {
        &self.navigation
    }

    pub fn current_route(&self) -> Route {
        self.navigation.current()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// Push the detail route for `champion_id` (also usable as a deep link)
    ///
    /// The detail screen only exists in `TapMode::OpenDetail`; in expand mode
    /// this does nothing and returns false.
    pub fn open_champion(&mut self, champion_id: ChampionId) -> bool {
        if self.list.mode() != TapMode::OpenDetail {
            warn!(champion_id, "detail screen is disabled in expand mode");
            return false;
        }

        self.navigation.push(Route::Detail { champion_id });
        self.sync_screen();
        true
    }

    /// Pop one route. At the root this asks the app to exit.
    pub fn back(&mut self) {
        if self.navigation.pop() {
            self.sync_screen();
        } else {
            debug!("back at root list, quitting");
            self.should_quit = true;
        }
    }

    /// Rebuild screen state from the route on top of the stack
    fn sync_screen(&mut self) {
        match self.navigation.current() {
            Route::List => {
                if let Some(detail) = self.detail.take() {
                    self.list.select_champion(detail.champion_id());
                }
            }
            Route::Detail { champion_id } => match self.detail.as_mut() {
                Some(detail) => detail.reshow(&self.store, champion_id),
                None => self.detail = Some(DetailViewController::show(&self.store, champion_id)),
            },
        }
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Back => self.back(),
            _ => match self.navigation.current() {
                Route::List => self.handle_list(action),
                // Detail has no cursor; Activate on the not-found screen
                // triggers its back affordance
                Route::Detail { .. } => {
                    if action == Action::Activate
                        && self.detail.as_ref().is_some_and(|d| d.is_not_found())
                    {
                        self.back();
                    }
                }
            },
        }
    }

    fn handle_list(&mut self, action: Action) {
        match action {
            Action::Next => self.list.select_next(),
            Action::Previous => self.list.select_previous(),
            Action::First => self.list.select_first(),
            Action::Last => self.list.select_last(),
            Action::Activate => match self.list.tap_selected() {
                TapOutcome::OpenDetail(champion_id) => {
                    self.open_champion(champion_id);
                }
                TapOutcome::Toggled { .. } | TapOutcome::Ignored => {}
            },
            Action::Back | Action::Quit => {}
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
