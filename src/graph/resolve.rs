//! Direct dependency/dependent lookup across the board.
//!
//! Unresolvable IDs are dropped, not reported: a card may keep a stale
//! `depends_on` reference after the referenced card was deleted, and that
//! must read as "no dependency" rather than an error.

use crate::board::Board;
use crate::domain::Card;

/// Cards this card depends on, in `depends_on` order.
pub fn dependencies_of<'a>(board: &'a Board, card: &Card) -> Vec<&'a Card> {
    card.depends_on
        .iter()
        .filter_map(|id| board.card(id))
        .collect()
}

/// Cards whose `depends_on` lists the given card.
pub fn dependents_of<'a>(board: &'a Board, card_id: &str) -> Vec<&'a Card> {
    board
        .cards
        .iter()
        .filter(|card| card.depends_on.iter().any(|dep| dep == card_id))
        .collect()
}
