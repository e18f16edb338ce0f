// ⚙️ Runtime configuration

use crate::list_view::TapMode;
use std::path::PathBuf;

/// Default `tracing` filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Which list interaction model is active
    pub tap_mode: TapMode,

    /// `tracing` filter directive (e.g. "info", "champion_codex=debug")
    pub log_level: String,

    /// Where logs go while the terminal UI owns the screen.
    /// `None` disables logging in browse mode.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn with_tap_mode(mut self, tap_mode: TapMode) -> Self {
        self.tap_mode = tap_mode;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            tap_mode: TapMode::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.tap_mode, TapMode::OpenDetail);
        assert_eq!(config.log_level, "info");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_with_tap_mode() {
        let config = AppConfig::default().with_tap_mode(TapMode::ToggleExpand);
        assert_eq!(config.tap_mode, TapMode::ToggleExpand);
    }
}
