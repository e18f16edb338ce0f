// Champion Codex - Core Library
// Catalog, store, view controllers and navigation; rendering lives in ui.rs

pub mod champion;
pub mod catalog;
pub mod store;
pub mod resources;
pub mod list_view;
pub mod detail_view;
pub mod navigation;
pub mod config;
pub mod app;

#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use champion::{Champion, ChampionId, ImageRef, TextRef};
pub use store::ChampionStore;
pub use resources::{BundledResolver, Portrait, Resolver};
pub use list_view::{ListRow, ListViewController, TapMode, TapOutcome, COLLAPSED_DESCRIPTION_LINES};
pub use detail_view::{DetailAffordance, DetailState, DetailViewController};
pub use navigation::{NavigationCoordinator, Route};
pub use config::AppConfig;
pub use app::{Action, App};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
