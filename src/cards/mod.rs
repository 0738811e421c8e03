//! Card system: catalog, card instances, and the deck builder.
//!
//! ## Key Types
//!
//! - `GroupKey`: Pair identity shared by exactly two cards
//! - `CatalogEntry` / `Catalog`: The content a deck is dealt from
//! - `CardId`: Tile identity (`"apple-1"`, `"apple-2"`)
//! - `Card`: Runtime tile state (flipped, matched)
//! - `build_deck`: Deal and shuffle

pub mod card;
pub mod catalog;
pub mod deck;

pub use card::{Card, CardId};
pub use catalog::{Catalog, CatalogEntry, GroupKey, MediaRef};
pub use deck::build_deck;
