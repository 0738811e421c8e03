//! Card catalog - the fixed content a deck is dealt from.
//!
//! A `CatalogEntry` describes one content group (e.g. "apple"). The
//! deck builder deals two cards per entry. Media and labels are carried
//! through to the cards but never inspected by the rules.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::CatalogError;

/// Identity that must agree for two cards to form a pair.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey(pub String);

impl GroupKey {
    /// Create a new group key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque reference to an image or other asset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaRef(pub String);

impl MediaRef {
    /// Create a new media reference.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }
}

/// One content group in a catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Pair identity.
    pub group: GroupKey,

    /// Display name shown under the picture.
    pub label: String,

    /// Asset shown on the card face.
    pub media: MediaRef,
}

impl CatalogEntry {
    /// Create a new entry.
    pub fn new(group: impl Into<String>, label: impl Into<String>, media: impl Into<String>) -> Self {
        Self {
            group: GroupKey::new(group),
            label: label.into(),
            media: MediaRef::new(media),
        }
    }
}

/// A validated catalog: at least two entries, non-empty unique group keys.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{Catalog, CatalogEntry};
///
/// let catalog = Catalog::new(vec![
///     CatalogEntry::new("dog", "Dog", "dog.png"),
///     CatalogEntry::new("fish", "Fish", "fish.png"),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.group_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CatalogEntry>", into = "Vec<CatalogEntry>")]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Minimum number of groups a playable catalog needs.
    pub const MIN_GROUPS: usize = 2;

    /// Validate and wrap a list of entries.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        if entries.len() < Self::MIN_GROUPS {
            return Err(CatalogError::TooFewGroups { found: entries.len() });
        }

        let mut seen = FxHashSet::default();
        for (index, entry) in entries.iter().enumerate() {
            if entry.group.as_str().is_empty() {
                return Err(CatalogError::EmptyGroupKey { index });
            }
            if !seen.insert(entry.group.as_str()) {
                return Err(CatalogError::DuplicateGroupKey(entry.group.0.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// The three-picture catalog the app ships with.
    #[must_use]
    pub fn starter() -> Self {
        Self {
            entries: vec![
                CatalogEntry::new("apple", "Apple", "apple.png"),
                CatalogEntry::new("cat", "Cat", "cat.png"),
                CatalogEntry::new("sun", "Sun", "sun.png"),
            ],
        }
    }

    /// Entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of distinct groups (N).
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.entries.len()
    }

    /// Look up an entry by group key.
    #[must_use]
    pub fn get(&self, group: &GroupKey) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| &e.group == group)
    }
}

impl TryFrom<Vec<CatalogEntry>> for Catalog {
    type Error = CatalogError;

    fn try_from(entries: Vec<CatalogEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<Catalog> for Vec<CatalogEntry> {
    fn from(catalog: Catalog) -> Self {
        catalog.entries
    }
}
