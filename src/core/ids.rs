//! Card and round identifiers.
//!
//! ## ID Allocation
//!
//! Card IDs are handed out by the engine from a single counter that is never
//! reset, so an ID is unique across every round an engine plays, not just
//! within one deck. A `CardId` captured from an earlier round never addresses
//! a card of the current one.
//!
//! ```
//! use memory_match::core::{CardId, RoundId};
//!
//! let card = CardId::new(7);
//! assert_eq!(card.raw(), 7);
//! assert_eq!(format!("{}", card), "Card(7)");
//!
//! let round = RoundId::FIRST;
//! assert_eq!(round.next(), RoundId::new(2));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a dealt card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier of one round, from deal to end.
///
/// Scheduled callbacks carry the round they were scheduled for. A callback
/// whose round is no longer current is ignored by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoundId(pub u32);

impl RoundId {
    /// The ID given to an engine's first round.
    pub const FIRST: Self = Self(1);

    /// Create a new round ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The ID of the round that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({})", self.0)
    }
}

/// Allocator for card IDs.
///
/// Lives on the engine for its whole lifetime; never rewound.
#[derive(Clone, Debug, Default)]
pub struct CardIdAllocator {
    next: u32,
}

impl CardIdAllocator {
    /// Create an allocator starting at `Card(0)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next card ID.
    pub fn alloc(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }

    /// Peek at the ID the next `alloc` will return.
    #[must_use]
    pub fn peek(&self) -> CardId {
        CardId(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
        assert_eq!(CardId::from(3), CardId::new(3));
    }

    #[test]
    fn test_round_id_sequence() {
        let first = RoundId::FIRST;
        assert_eq!(first.raw(), 1);
        assert_eq!(first.next().next(), RoundId::new(3));
        assert_eq!(format!("{}", first), "Round(1)");
    }

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = CardIdAllocator::new();
        assert_eq!(ids.peek(), CardId(0));

        let a = ids.alloc();
        let b = ids.alloc();
        let c = ids.alloc();

        assert_eq!((a, b, c), (CardId(0), CardId(1), CardId(2)));
        assert_eq!(ids.peek(), CardId(3));
    }

    #[test]
    fn test_serialization() {
        let id = CardId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
