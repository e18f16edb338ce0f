// 🌐 Resources - turns opaque handles into renderable content
//
// The core never knows what a string says or what an image looks like.
// Renderers receive a Resolver and ask it.

use crate::champion::{ImageRef, TextRef};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

const BUNDLED_STRINGS: &str = include_str!("../assets/strings.json");

/// Application title shown in the header
pub const APP_NAME: TextRef = TextRef("app_name");

/// Not-found screen message; `{id}` is replaced with the requested id
pub const NOT_FOUND_MESSAGE: TextRef = TextRef("not_found_message");

/// Label of the not-found screen's back affordance
pub const BACK_LABEL: TextRef = TextRef("back_label");

// ============================================================================
// RESOLVER
// ============================================================================

/// Capability that resolves text and image handles
///
/// Resolution never fails from the caller's point of view: a missing entry
/// comes back as a placeholder.
pub trait Resolver {
    fn resolve_text(&self, handle: TextRef) -> String;

    fn resolve_image(&self, handle: ImageRef) -> Portrait;
}

// ============================================================================
// PORTRAIT
// ============================================================================

/// Renderable stand-in for an image asset
///
/// The terminal cannot draw the artwork, so a portrait is a monogram plus
/// the asset path the artwork would be loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Portrait {
    pub key: String,
    pub monogram: String,
    pub asset_path: String,
}

impl Portrait {
    pub fn placeholder(handle: ImageRef) -> Self {
        let key = handle.key();
        let monogram = key
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string());

        Portrait {
            key: key.to_string(),
            monogram,
            asset_path: format!("drawable/{}.png", key),
        }
    }
}

// ============================================================================
// BUNDLED STRING TABLE
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
struct StringTable {
    locale: String,
    strings: HashMap<String, String>,
}

/// Resolver over the compiled-in English string table
#[derive(Debug, Clone)]
pub struct BundledResolver {
    locale: String,
    strings: HashMap<String, String>,
}

impl BundledResolver {
    /// Parse the bundled string table
    pub fn new() -> Result<Self> {
        Self::from_json(BUNDLED_STRINGS).context("bundled string table is malformed")
    }

    /// Parse a string table from JSON: `{"locale": "..", "strings": {key: text}}`
    pub fn from_json(json: &str) -> Result<Self> {
        let table: StringTable =
            serde_json::from_str(json).context("failed to parse string table")?;

        Ok(BundledResolver {
            locale: table.locale,
            strings: table.strings,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Raw lookup without placeholder fallback
    pub fn get(&self, handle: TextRef) -> Option<&str> {
        self.strings.get(handle.key()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Resolver for BundledResolver {
    fn resolve_text(&self, handle: TextRef) -> String {
        match self.get(handle) {
            Some(text) => text.to_string(),
            None => {
                warn!(key = handle.key(), locale = %self.locale, "missing string resource");
                format!("[{}]", handle.key())
            }
        }
    }

    fn resolve_image(&self, handle: ImageRef) -> Portrait {
        Portrait::placeholder(handle)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ChampionStore;

    #[test]
    fn test_bundled_table_parses() {
        let resolver = BundledResolver::new().unwrap();

        assert_eq!(resolver.locale(), "en");
        assert!(!resolver.is_empty());
    }

    #[test]
    fn test_every_catalog_handle_resolves() {
        let resolver = BundledResolver::new().unwrap();
        let store = ChampionStore::new();

        for champion in store.all_champions() {
            for handle in champion.text_refs() {
                assert!(
                    resolver.get(handle).is_some(),
                    "no string for {} (champion {})",
                    handle,
                    champion.id
                );
            }
        }
    }

    #[test]
    fn test_screen_strings_resolve() {
        let resolver = BundledResolver::new().unwrap();

        for handle in [APP_NAME, NOT_FOUND_MESSAGE, BACK_LABEL] {
            assert!(resolver.get(handle).is_some(), "no string for {}", handle);
        }
        assert!(resolver.resolve_text(NOT_FOUND_MESSAGE).contains("{id}"));
    }

    #[test]
    fn test_resolve_known_text() {
        let resolver = BundledResolver::new().unwrap();

        assert_eq!(resolver.resolve_text(TextRef("ziggs_name")), "Ziggs");
        assert_eq!(resolver.resolve_text(TextRef("vi_title")), "the Piltover Enforcer");
    }

    #[test]
    fn test_missing_text_becomes_placeholder() {
        let resolver = BundledResolver::new().unwrap();

        assert_eq!(resolver.resolve_text(TextRef("teemo_name")), "[teemo_name]");
    }

    #[test]
    fn test_resolve_image_placeholder() {
        let resolver = BundledResolver::new().unwrap();
        let portrait = resolver.resolve_image(ImageRef("heimerdinger"));

        assert_eq!(portrait.key, "heimerdinger");
        assert_eq!(portrait.monogram, "H");
        assert_eq!(portrait.asset_path, "drawable/heimerdinger.png");
    }

    #[test]
    fn test_empty_image_key_uses_question_mark() {
        assert_eq!(Portrait::placeholder(ImageRef("")).monogram, "?");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(BundledResolver::from_json("not json").is_err());
        assert!(BundledResolver::from_json(r#"{"strings": {}}"#).is_err());
    }
}
