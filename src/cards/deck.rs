//! Deck builder.
//!
//! Deals two face-down cards per catalog group and shuffles them once.
//! The resulting order is fixed for the rest of the session.

use im::Vector;

use super::card::Card;
use super::catalog::Catalog;
use crate::core::DeckRng;

/// Build a shuffled deck of `2 * catalog.group_count()` cards.
#[must_use]
pub fn build_deck(catalog: &Catalog, rng: &mut DeckRng) -> Vector<Card> {
    let mut cards: Vec<Card> = catalog
        .entries()
        .iter()
        .flat_map(|entry| [Card::dealt(entry, 1), Card::dealt(entry, 2)])
        .collect();

    rng.shuffle(&mut cards);
    cards.into_iter().collect()
}
