// 📋 List View Controller - rows, alternation, per-row expand state, cursor
//
// A row never owns its champion. It remembers the id and the position in the
// store's display order, so the store stays the single source of truth.

use crate::champion::{Champion, ChampionId};
use crate::store::ChampionStore;
use std::sync::Arc;
use tracing::debug;

/// Lines a description may occupy in a collapsed row
pub const COLLAPSED_DESCRIPTION_LINES: usize = 2;

// ============================================================================
// INTERACTION MODEL
// ============================================================================

/// What tapping a row does. Exactly one model is active per controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TapMode {
    /// Tapping navigates to the detail screen; rows never expand
    #[default]
    #[value(name = "open")]
    OpenDetail,

    /// Tapping expands/collapses the description in place; no navigation
    #[value(name = "expand")]
    ToggleExpand,
}

impl TapMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TapMode::OpenDetail => "open",
            TapMode::ToggleExpand => "expand",
        }
    }
}

/// Result of tapping a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Navigation intent carrying the tapped champion's id
    OpenDetail(ChampionId),

    /// The row's expand state flipped
    Toggled { index: usize, expanded: bool },

    /// Nothing was under the cursor
    Ignored,
}

// ============================================================================
// LIST ROW
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRow {
    pub champion_id: ChampionId,
    pub image_on_left: bool,
    pub expanded: bool,
}

impl ListRow {
    fn at(index: usize, champion: &Champion) -> Self {
        ListRow {
            champion_id: champion.id,
            image_on_left: index % 2 == 0,
            expanded: false,
        }
    }

    /// Maximum description lines for this row (`None` = unlimited)
    pub fn description_line_limit(&self) -> Option<usize> {
        if self.expanded {
            None
        } else {
            Some(COLLAPSED_DESCRIPTION_LINES)
        }
    }
}

// ============================================================================
// CONTROLLER
// ============================================================================

pub struct ListViewController {
    store: Arc<ChampionStore>,
    mode: TapMode,
    rows: Vec<ListRow>,
    selected: Option<usize>,
}

impl ListViewController {
    pub fn new(store: Arc<ChampionStore>, mode: TapMode) -> Self {
        let mut controller = ListViewController {
            store,
            mode,
            rows: Vec::new(),
            selected: None,
        };
        controller.refresh();
        controller
    }

    /// Rebuild rows from the store. Expand state is reset.
    pub fn refresh(&mut self) {
        self.rows = self
            .store
            .all_champions()
            .iter()
            .enumerate()
            .map(|(index, champion)| ListRow::at(index, champion))
            .collect();

        self.selected = if self.rows.is_empty() { None } else { Some(0) };
    }

    pub fn mode(&self) -> TapMode {
        self.mode
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&ListRow> {
        self.rows.get(index)
    }

    /// Champion rendered by a row, resolved through the store
    pub fn champion_at(&self, index: usize) -> Option<&Champion> {
        self.rows
            .get(index)
            .and_then(|row| self.store.find_by_id(row.champion_id))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // ------------------------------------------------------------------------
    // Expand state
    // ------------------------------------------------------------------------

    /// Flip one row's expanded flag. Other rows are untouched.
    ///
    /// Returns the new state, or `None` when the index is out of range.
    pub fn toggle_expanded(&mut self, index: usize) -> Option<bool> {
        let row = self.rows.get_mut(index)?;
        row.expanded = !row.expanded;
        Some(row.expanded)
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.rows.get(index).map(|row| row.expanded).unwrap_or(false)
    }

    // ------------------------------------------------------------------------
    // Tapping
    // ------------------------------------------------------------------------

    /// Tap a row according to the controller's interaction model
    pub fn tap(&mut self, index: usize) -> TapOutcome {
        let Some(row) = self.rows.get(index).copied() else {
            return TapOutcome::Ignored;
        };

        self.selected = Some(index);

        let outcome = match self.mode {
            TapMode::OpenDetail => TapOutcome::OpenDetail(row.champion_id),
            TapMode::ToggleExpand => match self.toggle_expanded(index) {
                Some(expanded) => TapOutcome::Toggled { index, expanded },
                None => TapOutcome::Ignored,
            },
        };

        debug!(index, champion_id = row.champion_id, ?outcome, "row tapped");
        outcome
    }

    pub fn tap_selected(&mut self) -> TapOutcome {
        match self.selected {
            Some(index) => self.tap(index),
            None => TapOutcome::Ignored,
        }
    }

    // ------------------------------------------------------------------------
    // Cursor
    // ------------------------------------------------------------------------

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_champion(&self) -> Option<&Champion> {
        self.selected.and_then(|index| self.champion_at(index))
    }

    pub fn select_next(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    pub fn select_previous(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.selected = Some(self.rows.len() - 1);
        }
    }

    /// Move the cursor onto a champion's row. Returns false if it is not listed.
    pub fn select_champion(&mut self, id: ChampionId) -> bool {
        match self.rows.iter().position(|row| row.champion_id == id) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }
}

// ============================================================================
// TEXT LAYOUT
// ============================================================================

/// Word-wrap `text` to `width` columns
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        let needed = if current_line.is_empty() {
            word.chars().count()
        } else {
            current_line.chars().count() + 1 + word.chars().count()
        };

        if needed <= width || current_line.is_empty() {
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line.push_str(word);
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Wrap a description and clip it to `limit` lines, ending with an ellipsis
/// when something was cut. The clipped last line stays within `width`.
pub fn description_lines(text: &str, width: usize, limit: Option<usize>) -> Vec<String> {
    let width = width.max(1);
    let mut lines = wrap_text(text, width);

    if let Some(limit) = limit {
        if lines.len() > limit {
            lines.truncate(limit);
            if let Some(last) = lines.last_mut() {
                while last.chars().count() >= width {
                    last.pop();
                }
                let kept = last.trim_end().len();
                last.truncate(kept);
                last.push('…');
            }
        }
    }

    lines
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn two_champion_store() -> Arc<ChampionStore> {
        Arc::new(
            ChampionStore::from_champions(vec![
                Champion::keyed(1, "ziggs_name", "ziggs_title", "ziggs_description", "ziggs"),
                Champion::keyed(2, "vi_name", "vi_title", "vi_description", "vi"),
            ])
            .unwrap(),
        )
    }

    fn catalog_controller(mode: TapMode) -> ListViewController {
        ListViewController::new(Arc::new(ChampionStore::new()), mode)
    }

    #[test]
    fn test_tap_mode_names() {
        use clap::ValueEnum;

        assert_eq!(TapMode::from_str("open", false), Ok(TapMode::OpenDetail));
        assert_eq!(TapMode::from_str("expand", false), Ok(TapMode::ToggleExpand));
        for mode in TapMode::value_variants() {
            assert_eq!(TapMode::from_str(mode.as_str(), false), Ok(*mode));
        }
    }

    #[test]
    fn test_rows_follow_catalog_order() {
        let controller = ListViewController::new(two_champion_store(), TapMode::OpenDetail);

        let ids: Vec<ChampionId> = controller.rows().iter().map(|r| r.champion_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(controller.rows()[0].image_on_left);
        assert!(!controller.rows()[1].image_on_left);
    }

    #[test]
    fn test_rows_start_collapsed() {
        let controller = catalog_controller(TapMode::ToggleExpand);

        assert!(controller.rows().iter().all(|row| !row.expanded));
        assert_eq!(
            controller.rows()[0].description_line_limit(),
            Some(COLLAPSED_DESCRIPTION_LINES)
        );
    }

    #[test]
    fn test_tap_in_open_mode_emits_navigation_intent() {
        let mut controller = catalog_controller(TapMode::OpenDetail);

        assert_eq!(controller.tap(1), TapOutcome::OpenDetail(2));
        assert!(!controller.is_expanded(1));
        assert_eq!(controller.selected(), Some(1));
    }

    #[test]
    fn test_tap_in_expand_mode_toggles_only_that_row() {
        let mut controller = catalog_controller(TapMode::ToggleExpand);

        assert_eq!(
            controller.tap(2),
            TapOutcome::Toggled { index: 2, expanded: true }
        );
        assert!(controller.is_expanded(2));
        assert_eq!(controller.rows()[2].description_line_limit(), None);
        assert!(!controller.is_expanded(1));
        assert!(!controller.is_expanded(3));

        assert_eq!(
            controller.tap(2),
            TapOutcome::Toggled { index: 2, expanded: false }
        );
    }

    #[test]
    fn test_tap_out_of_range_is_ignored() {
        let mut controller = catalog_controller(TapMode::ToggleExpand);

        assert_eq!(controller.tap(100), TapOutcome::Ignored);
        assert_eq!(controller.toggle_expanded(100), None);
    }

    #[test]
    fn test_refresh_resets_expand_state() {
        let mut controller = catalog_controller(TapMode::ToggleExpand);
        controller.toggle_expanded(0);
        controller.select_last();

        controller.refresh();

        assert!(!controller.is_expanded(0));
        assert_eq!(controller.selected(), Some(0));
    }

    #[test]
    fn test_cursor_wraps() {
        let mut controller = ListViewController::new(two_champion_store(), TapMode::OpenDetail);

        assert_eq!(controller.selected(), Some(0));
        controller.select_previous();
        assert_eq!(controller.selected(), Some(1));
        controller.select_next();
        assert_eq!(controller.selected(), Some(0));
        controller.select_last();
        assert_eq!(controller.selected_champion().map(|c| c.id), Some(2));
        controller.select_first();
        assert_eq!(controller.selected(), Some(0));
    }

    #[test]
    fn test_tap_selected_uses_cursor() {
        let mut controller = ListViewController::new(two_champion_store(), TapMode::OpenDetail);
        controller.select_next();

        assert_eq!(controller.tap_selected(), TapOutcome::OpenDetail(2));
    }

    #[test]
    fn test_select_champion() {
        let mut controller = catalog_controller(TapMode::OpenDetail);

        assert!(controller.select_champion(5));
        assert_eq!(controller.selected(), Some(4));
        assert!(!controller.select_champion(999));
        assert_eq!(controller.selected(), Some(4));
    }

    #[test]
    fn test_empty_list() {
        let store = Arc::new(ChampionStore::from_champions(Vec::new()).unwrap());
        let mut controller = ListViewController::new(store, TapMode::OpenDetail);

        assert!(controller.is_empty());
        assert_eq!(controller.selected(), None);
        controller.select_next();
        assert_eq!(controller.selected(), None);
        assert_eq!(controller.tap_selected(), TapOutcome::Ignored);
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("", 10), Vec::<String>::new());
        // A word longer than the width gets its own line
        assert_eq!(wrap_text("a hexplosives b", 5), vec!["a", "hexplosives", "b"]);
    }

    #[test]
    fn test_description_lines_clips_collapsed() {
        let text = "one two three four five six";

        let collapsed = description_lines(text, 7, Some(COLLAPSED_DESCRIPTION_LINES));
        assert_eq!(collapsed, vec!["one two", "three…"]);

        let expanded = description_lines(text, 7, None);
        assert_eq!(expanded, vec!["one two", "three", "four", "five", "six"]);
    }

    #[test]
    fn test_clipped_line_fits_width() {
        // "three four" fills the second line exactly
        let lines = description_lines("one two three four five", 10, Some(2));

        assert_eq!(lines, vec!["one two", "three fou…"]);
        for line in &lines {
            assert!(line.chars().count() <= 10, "{:?} is wider than 10", line);
        }
    }

    #[test]
    fn test_description_lines_short_text_untouched() {
        assert_eq!(description_lines("short", 20, Some(2)), vec!["short"]);
    }

    proptest! {
        #[test]
        fn prop_rows_alternate(len in 0usize..40) {
            let champions: Vec<Champion> = (0..len)
                .map(|i| Champion::keyed(i as ChampionId, "ziggs_name", "ziggs_title", "ziggs_description", "ziggs"))
                .collect();
            let store = Arc::new(ChampionStore::from_champions(champions).unwrap());
            let controller = ListViewController::new(store, TapMode::ToggleExpand);

            prop_assert_eq!(controller.len(), len);
            for (i, row) in controller.rows().iter().enumerate() {
                prop_assert_eq!(row.image_on_left, i % 2 == 0);
            }
        }

        #[test]
        fn prop_toggle_is_row_local(taps in proptest::collection::vec(0usize..8, 0..30), probe in 0usize..8) {
            let mut controller = catalog_controller(TapMode::ToggleExpand);

            for index in &taps {
                controller.toggle_expanded(*index);
            }

            let taps_on_probe = taps.iter().filter(|&&i| i == probe).count();
            prop_assert_eq!(controller.is_expanded(probe), taps_on_probe % 2 == 1);
        }
    }
}
