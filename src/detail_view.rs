// 🔎 Detail View Controller - resolves one champion by id
//
// Lookup is synchronous, so the controller goes straight to Found or
// NotFound. Both are terminal for the id they were built with.

use crate::champion::{Champion, ChampionId};
use crate::resources::{Resolver, NOT_FOUND_MESSAGE};
use crate::store::ChampionStore;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailState {
    /// The champion exists; its full description may be rendered
    Found(Champion),

    /// No champion has this id (e.g. a stale route parameter)
    NotFound { champion_id: ChampionId },
}

/// The single affordance offered by the not-found screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAffordance {
    Back,
}

#[derive(Debug, Clone)]
pub struct DetailViewController {
    champion_id: ChampionId,
    state: DetailState,
}

impl DetailViewController {
    /// Resolve `champion_id` against the store
    pub fn show(store: &ChampionStore, champion_id: ChampionId) -> Self {
        let state = match store.find_by_id(champion_id) {
            Some(champion) => {
                debug!(champion_id, "detail resolved");
                DetailState::Found(*champion)
            }
            None => {
                warn!(champion_id, "detail requested for unknown champion");
                DetailState::NotFound { champion_id }
            }
        };

        DetailViewController { champion_id, state }
    }

    /// Restart the state machine with another id. Same id is a no-op.
    pub fn reshow(&mut self, store: &ChampionStore, champion_id: ChampionId) {
        if champion_id != self.champion_id {
            *self = Self::show(store, champion_id);
        }
    }

    pub fn champion_id(&self) -> ChampionId {
        self.champion_id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn champion(&self) -> Option<&Champion> {
        match &self.state {
            DetailState::Found(champion) => Some(champion),
            DetailState::NotFound { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.state, DetailState::NotFound { .. })
    }

    /// User-facing message for the not-found state, localized through the
    /// resolver. The requested id fills the `{id}` slot, or is appended when
    /// the text has none.
    pub fn not_found_message(&self, resolver: &dyn Resolver) -> Option<String> {
        match self.state {
            DetailState::Found(_) => None,
            DetailState::NotFound { champion_id } => {
                let text = resolver.resolve_text(NOT_FOUND_MESSAGE);
                let id = champion_id.to_string();
                if text.contains("{id}") {
                    Some(text.replace("{id}", &id))
                } else {
                    Some(format!("{} (#{})", text, id))
                }
            }
        }
    }

    /// Affordances the screen offers besides ordinary back navigation
    pub fn affordances(&self) -> &'static [DetailAffordance] {
        match self.state {
            DetailState::Found(_) => &[],
            DetailState::NotFound { .. } => &[DetailAffordance::Back],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::BundledResolver;

    #[test]
    fn test_show_existing_champion() {
        let store = ChampionStore::new();
        let detail = DetailViewController::show(&store, 1);

        assert_eq!(detail.state(), &DetailState::Found(*store.find_by_id(1).unwrap()));
        assert_eq!(detail.champion().unwrap().name.key(), "ziggs_name");
        assert!(detail.not_found_message(&BundledResolver::new().unwrap()).is_none());
        assert!(detail.affordances().is_empty());
    }

    #[test]
    fn test_show_missing_champion() {
        let store = ChampionStore::new();
        let detail = DetailViewController::show(&store, 999);

        assert_eq!(detail.state(), &DetailState::NotFound { champion_id: 999 });
        assert!(detail.is_not_found());
        assert!(detail.champion().is_none());
        assert_eq!(
            detail.not_found_message(&BundledResolver::new().unwrap()).unwrap(),
            "No champion with id 999 exists."
        );
        assert_eq!(detail.affordances(), &[DetailAffordance::Back]);
    }

    #[test]
    fn test_not_found_message_without_id_slot() {
        let store = ChampionStore::new();
        let resolver = BundledResolver::from_json(
            r#"{"locale": "en", "strings": {"not_found_message": "Unknown champion"}}"#,
        )
        .unwrap();

        let detail = DetailViewController::show(&store, -1);

        assert_eq!(
            detail.not_found_message(&resolver).unwrap(),
            "Unknown champion (#-1)"
        );
    }

    #[test]
    fn test_reshow_restarts_with_new_id() {
        let store = ChampionStore::new();
        let mut detail = DetailViewController::show(&store, 999);

        detail.reshow(&store, 2);

        assert_eq!(detail.champion_id(), 2);
        assert_eq!(detail.champion().map(|c| c.id), Some(2));
    }
}
