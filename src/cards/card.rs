//! Dealt cards - runtime card state.
//!
//! A `Card` is one face-down tile on the board. Its identity and face are
//! fixed when the deck is dealt; only the `revealed` and `matched` flags
//! change during play.
//!
//! ## Flag States
//!
//! | revealed | matched | meaning                                    |
//! |----------|---------|--------------------------------------------|
//! | false    | false   | face-down                                  |
//! | true     | false   | face-up, waiting for its pair to resolve   |
//! | any      | true    | resolved; stays face-up for the round      |

use serde::{Deserialize, Serialize};

use super::category::Item;
use crate::core::CardId;

/// A card in a dealt deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique ID for this card.
    pub id: CardId,

    /// Pair key. Exactly two cards in a deck share it.
    pub pair_key: String,

    /// Glyph shown when face-up.
    pub glyph: String,

    /// Face-up and awaiting resolution.
    pub revealed: bool,

    /// Resolved as part of a matched pair.
    pub matched: bool,
}

impl Card {
    /// Create a face-down card showing `item`.
    #[must_use]
    pub fn new(id: CardId, item: &Item) -> Self {
        Self {
            id,
            pair_key: item.name.clone(),
            glyph: item.glyph.clone(),
            revealed: false,
            matched: false,
        }
    }

    /// Whether the face should be drawn.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.revealed || self.matched
    }

    /// Whether the card can still be revealed.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        !self.is_face_up()
    }

    /// Whether this card and `other` form a pair.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.pair_key == other.pair_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog(id: u32) -> Card {
        Card::new(CardId::new(id), &Item::new("Dog", "🐶"))
    }

    #[test]
    fn test_new_card_is_face_down() {
        let card = dog(1);
        assert_eq!(card.pair_key, "Dog");
        assert_eq!(card.glyph, "🐶");
        assert!(card.is_hidden());
        assert!(!card.matched);
    }

    #[test]
    fn test_face_up_states() {
        let mut card = dog(1);
        card.revealed = true;
        assert!(card.is_face_up());

        card.revealed = false;
        card.matched = true;
        assert!(card.is_face_up());
        assert!(!card.is_hidden());
    }

    #[test]
    fn test_pairs_with() {
        let a = dog(1);
        let b = dog(2);
        let cat = Card::new(CardId::new(3), &Item::new("Cat", "🐱"));

        assert!(a.pairs_with(&b));
        assert!(!a.pairs_with(&a));
        assert!(!a.pairs_with(&cat));
    }
}
