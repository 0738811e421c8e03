//! Card instances - one physical tile on the board.
//!
//! A `Card` is dealt from a `CatalogEntry`. Its identity (`id`, `group`)
//! never changes during a session; only the face state does.

use serde::{Deserialize, Serialize};

use super::catalog::{CatalogEntry, GroupKey, MediaRef};

/// Unique identifier of a tile within a session (e.g. `"apple-1"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a card ID from a raw string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID of copy `copy` (1 or 2) of a group.
    #[must_use]
    pub fn for_copy(group: &GroupKey, copy: u8) -> Self {
        Self(format!("{}-{}", group, copy))
    }

    /// Get the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A card on the board.
///
/// ## Invariants
///
/// - `is_matched` implies `is_flipped`
/// - A matched card is never part of the pending selection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Tile identity, stable for the session.
    pub id: CardId,

    /// Pair identity.
    pub group: GroupKey,

    /// Display name.
    pub label: String,

    /// Face asset.
    pub media: MediaRef,

    /// Face currently shown.
    pub is_flipped: bool,

    /// Pair confirmed; stays face-up for the rest of the session.
    pub is_matched: bool,
}

impl Card {
    /// Deal copy `copy` of a catalog entry, face down.
    #[must_use]
    pub fn dealt(entry: &CatalogEntry, copy: u8) -> Self {
        Self {
            id: CardId::for_copy(&entry.group, copy),
            group: entry.group.clone(),
            label: entry.label.clone(),
            media: entry.media.clone(),
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Whether the card can currently be picked.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.is_flipped && !self.is_matched
    }

    /// Check if two cards form a pair.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.group == other.group
    }

    pub(crate) fn reveal(&mut self) {
        self.is_flipped = true;
    }

    pub(crate) fn hide(&mut self) {
        self.is_flipped = false;
    }

    pub(crate) fn confirm(&mut self) {
        self.is_flipped = true;
        self.is_matched = true;
    }
}
