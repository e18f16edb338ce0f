// 🛡️ Champion - Immutable value record
//
// A champion never owns display text or pixels. It carries opaque handles
// (TextRef / ImageRef) that a Resolver turns into something renderable.

use serde::Serialize;
use std::fmt;

/// Stable identity of a champion, used for lookup and as the route parameter
pub type ChampionId = i32;

// ============================================================================
// RESOURCE HANDLES
// ============================================================================

/// Handle to a localized string (e.g. "ziggs_title")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TextRef(pub &'static str);

impl TextRef {
    pub fn key(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TextRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@string/{}", self.0)
    }
}

/// Handle to a portrait / splash asset (e.g. "ziggs")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ImageRef(pub &'static str);

impl ImageRef {
    pub fn key(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@drawable/{}", self.0)
    }
}

// ============================================================================
// CHAMPION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Champion {
    pub id: ChampionId,
    pub name: TextRef,
    pub title: TextRef,
    pub description: TextRef,
    pub image: ImageRef,
}

impl Champion {
    /// Build a champion whose handles all follow the `<key>_name`,
    /// `<key>_title`, `<key>_description` and `<key>` resource convention.
    pub const fn keyed(
        id: ChampionId,
        name: &'static str,
        title: &'static str,
        description: &'static str,
        image: &'static str,
    ) -> Self {
        Champion {
            id,
            name: TextRef(name),
            title: TextRef(title),
            description: TextRef(description),
            image: ImageRef(image),
        }
    }

    /// All text handles, in render order
    pub fn text_refs(&self) -> [TextRef; 3] {
        [self.name, self.title, self.description]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_champion() {
        let ziggs = Champion::keyed(1, "ziggs_name", "ziggs_title", "ziggs_description", "ziggs");

        assert_eq!(ziggs.id, 1);
        assert_eq!(ziggs.name.key(), "ziggs_name");
        assert_eq!(ziggs.image.key(), "ziggs");
        assert_eq!(ziggs.text_refs().len(), 3);
    }

    #[test]
    fn test_handle_display() {
        assert_eq!(TextRef("vi_name").to_string(), "@string/vi_name");
        assert_eq!(ImageRef("vi").to_string(), "@drawable/vi");
    }
}
