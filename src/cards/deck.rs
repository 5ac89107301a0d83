//! Dealing and holding the deck for one round.
//!
//! The deck is built once per round and its composition never changes:
//! sample N distinct items, duplicate each, shuffle, then hand out IDs in
//! board order. Handing IDs out after the shuffle keeps them from leaking
//! which cards pair up.

use im::Vector;
use rustc_hash::FxHashMap;

use super::card::Card;
use super::category::{Category, Item};
use crate::core::{CardId, CardIdAllocator, GameRng};
use crate::engine::EngineError;

/// The dealt cards of a round, in board order.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vector<Card>,
    index: FxHashMap<CardId, usize>,
    pair_count: usize,
}

impl Deck {
    /// Deal `pair_count` pairs from `category`.
    ///
    /// Fails with `NoPairsRequested` for zero pairs and `InsufficientItems`
    /// when the category is too small. No IDs are allocated on failure.
    pub fn deal(
        category: &Category,
        pair_count: usize,
        rng: &mut GameRng,
        ids: &mut CardIdAllocator,
    ) -> Result<Self, EngineError> {
        if pair_count == 0 {
            return Err(EngineError::NoPairsRequested);
        }
        if pair_count > category.len() {
            return Err(EngineError::InsufficientItems {
                category: category.name.clone(),
                requested: pair_count,
                available: category.len(),
            });
        }

        let picked = rng.sample(&category.items, pair_count);
        let mut faces: Vec<&Item> = picked.iter().chain(picked.iter()).copied().collect();
        rng.shuffle(&mut faces);

        Ok(Self::from_cards(
            faces.into_iter().map(|item| Card::new(ids.alloc(), item)),
        ))
    }

    /// Build a deck from dealt cards, kept in the given order.
    ///
    /// Callers pass freshly allocated ids with every pair key on exactly two
    /// cards; the pair count is half the card count.
    pub(crate) fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let cards: Vector<Card> = cards.into_iter().collect();
        let index: FxHashMap<CardId, usize> = cards
            .iter()
            .enumerate()
            .map(|(pos, card)| (card.id, pos))
            .collect();
        debug_assert_eq!(index.len(), cards.len(), "duplicate card id in deck");
        let pair_count = cards.len() / 2;

        Self {
            cards,
            index,
            pair_count,
        }
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in board order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Iterate over cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).and_then(|&pos| self.cards.get(pos))
    }

    /// Get a mutable card by ID.
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        match self.index.get(&id) {
            Some(&pos) => self.cards.get_mut(pos),
            None => None,
        }
    }

    /// Board position of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Check if a card belongs to this deck.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// IDs of the cards carrying `pair_key`.
    #[must_use]
    pub fn ids_for(&self, pair_key: &str) -> Vec<CardId> {
        self.cards
            .iter()
            .filter(|c| c.pair_key == pair_key)
            .map(|c| c.id)
            .collect()
    }

    /// Distinct pair keys in order of first appearance.
    #[must_use]
    pub fn pair_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::with_capacity(self.pair_count);
        for card in &self.cards {
            if !keys.contains(&card.pair_key.as_str()) {
                keys.push(&card.pair_key);
            }
        }
        keys
    }

    /// Number of fully matched pairs.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count() / 2
    }

    /// Whether every card has been matched.
    ///
    /// An empty deck is never complete.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::category;

    #[test]
    fn test_deal_size_and_pairs() {
        let mut rng = GameRng::new(42);
        let mut ids = CardIdAllocator::new();
        let deck = Deck::deal(&category::animals(), 4, &mut rng, &mut ids).unwrap();

        assert_eq!(deck.len(), 8);
        assert_eq!(deck.pair_count(), 4);
        assert_eq!(deck.pair_keys().len(), 4);
        for key in deck.pair_keys() {
            assert_eq!(deck.ids_for(key).len(), 2);
        }
    }

    #[test]
    fn test_ids_follow_board_order() {
        let mut rng = GameRng::new(3);
        let mut ids = CardIdAllocator::new();
        let deck = Deck::deal(&category::fruits(), 3, &mut rng, &mut ids).unwrap();

        let order: Vec<u32> = deck.iter().map(|c| c.id.raw()).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
        for (pos, card) in deck.iter().enumerate() {
            assert_eq!(deck.position(card.id), Some(pos));
        }
    }

    #[test]
    fn test_every_card_indexed_across_deals() {
        let mut rng = GameRng::new(6);
        let mut ids = CardIdAllocator::new();
        let first = Deck::deal(&category::animals(), 4, &mut rng, &mut ids).unwrap();
        let second = Deck::deal(&category::animals(), 4, &mut rng, &mut ids).unwrap();

        for deck in [&first, &second] {
            for (pos, card) in deck.iter().enumerate() {
                assert_eq!(deck.position(card.id), Some(pos));
            }
        }
        assert!(second.iter().all(|c| !first.contains(c.id)));
        assert_eq!(second.pair_count(), 4);
    }

    #[test]
    fn test_deal_is_deterministic() {
        let deal = |seed| {
            let mut rng = GameRng::new(seed);
            let mut ids = CardIdAllocator::new();
            let deck = Deck::deal(&category::animals(), 4, &mut rng, &mut ids).unwrap();
            deck.iter().map(|c| c.pair_key.clone()).collect::<Vec<_>>()
        };

        assert_eq!(deal(9), deal(9));
    }

    #[test]
    fn test_zero_pairs_rejected() {
        let mut rng = GameRng::new(1);
        let mut ids = CardIdAllocator::new();
        let err = Deck::deal(&category::animals(), 0, &mut rng, &mut ids).unwrap_err();
        assert!(matches!(err, EngineError::NoPairsRequested));
        assert_eq!(ids.peek(), CardId::new(0));
    }

    #[test]
    fn test_too_many_pairs_rejected() {
        let mut rng = GameRng::new(1);
        let mut ids = CardIdAllocator::new();
        let err = Deck::deal(&category::animals(), 9, &mut rng, &mut ids).unwrap_err();

        assert!(matches!(
            err,
            EngineError::InsufficientItems { requested: 9, available: 8, .. }
        ));
        assert_eq!(ids.peek(), CardId::new(0));
    }

    #[test]
    fn test_whole_category() {
        let fruits = category::fruits();
        let mut rng = GameRng::new(5);
        let mut ids = CardIdAllocator::new();
        let deck = Deck::deal(&fruits, 8, &mut rng, &mut ids).unwrap();

        let mut keys = deck.pair_keys();
        keys.sort_unstable();
        let mut expected: Vec<&str> = fruits.items.iter().map(|i| i.name.as_str()).collect();
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_match_tracking() {
        let mut rng = GameRng::new(11);
        let mut ids = CardIdAllocator::new();
        let mut deck = Deck::deal(&category::animals(), 2, &mut rng, &mut ids).unwrap();
        assert!(!deck.all_matched());

        let keys: Vec<String> = deck.pair_keys().into_iter().map(String::from).collect();
        for id in deck.ids_for(&keys[0]) {
            deck.get_mut(id).unwrap().matched = true;
        }
        assert_eq!(deck.matched_pairs(), 1);
        assert!(!deck.all_matched());

        for id in deck.ids_for(&keys[1]) {
            deck.get_mut(id).unwrap().matched = true;
        }
        assert!(deck.all_matched());
    }

    #[test]
    fn test_empty_deck_is_never_complete() {
        assert!(!Deck::default().all_matched());
    }

    #[test]
    fn test_unknown_id() {
        let mut rng = GameRng::new(11);
        let mut ids = CardIdAllocator::new();
        let mut deck = Deck::deal(&category::animals(), 2, &mut rng, &mut ids).unwrap();

        assert!(deck.get(CardId::new(99)).is_none());
        assert!(deck.get_mut(CardId::new(99)).is_none());
        assert!(!deck.contains(CardId::new(99)));
    }
}
