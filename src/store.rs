// 🗃️ Champion Store - owns the catalog, answers read queries
//
// The catalog never changes after construction, so the "observable" list
// is just a slice. There is nothing to subscribe to.

use crate::catalog;
use crate::champion::{Champion, ChampionId};
use anyhow::{bail, Result};
use std::collections::HashMap;
use tracing::debug;

// ============================================================================
// CHAMPION STORE
// ============================================================================

/// Read-only owner of the champion catalog
///
/// Constructed once by the application root and shared with the view
/// controllers. There are no insert/update/delete operations.
#[derive(Debug, Clone)]
pub struct ChampionStore {
    /// Display order
    champions: Vec<Champion>,

    /// id -> position in `champions`
    index: HashMap<ChampionId, usize>,
}

impl ChampionStore {
    /// Create a store over the compiled-in catalog
    pub fn new() -> Self {
        let champions = catalog::load();
        let index = champions
            .iter()
            .enumerate()
            .map(|(position, champion)| (champion.id, position))
            .collect();

        debug!(count = champions.len(), "champion catalog loaded");

        ChampionStore { champions, index }
    }

    /// Create a store over a caller-supplied catalog
    ///
    /// Fails if two champions share an id.
    pub fn from_champions(champions: Vec<Champion>) -> Result<Self> {
        let mut index = HashMap::with_capacity(champions.len());

        for (position, champion) in champions.iter().enumerate() {
            if index.insert(champion.id, position).is_some() {
                bail!("duplicate champion id {} in catalog", champion.id);
            }
        }

        Ok(ChampionStore { champions, index })
    }

    /// Full catalog in display order
    pub fn all_champions(&self) -> &[Champion] {
        &self.champions
    }

    /// Look up a champion by id. Absence is an expected outcome, not an error.
    pub fn find_by_id(&self, id: ChampionId) -> Option<&Champion> {
        self.index.get(&id).map(|&position| &self.champions[position])
    }

    /// Display index of a champion (used to restore the list cursor)
    pub fn position_of(&self, id: ChampionId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn contains(&self, id: ChampionId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn count(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }
}

impl Default for ChampionStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
