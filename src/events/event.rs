//! Game event types.
//!
//! Events are what the engine tells the outside world. Each state change a
//! renderer cares about produces exactly one event, delivered to the
//! engine's [`GameObserver`](super::GameObserver) at the moment it happens.
//!
//! Match and mismatch events fire when the second card of a pair is
//! revealed, before the resolution delay. `PairResolved` fires when the delay
//! has elapsed and the cards have been locked or flipped back.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{CardId, RoundId};
use crate::engine::{PairKind, RoundSummary};

/// Something that happened during a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new deck was dealt and the ticker started.
    RoundStarted {
        round: RoundId,
        category: String,
        pair_count: usize,
        time_limit_secs: Option<u32>,
    },

    /// A card was turned face-up.
    CardRevealed { round: RoundId, card: Card },

    /// The second card of a pair matched the first.
    PairMatched {
        round: RoundId,
        pair_key: String,
        cards: [CardId; 2],
        moves: u32,
    },

    /// The second card of a pair did not match the first.
    PairMismatched {
        round: RoundId,
        cards: [CardId; 2],
        moves: u32,
    },

    /// The resolution delay elapsed and the pair was locked or flipped back.
    PairResolved {
        round: RoundId,
        cards: [CardId; 2],
        kind: PairKind,
    },

    /// The round is over.
    RoundEnded { summary: RoundSummary },
}

impl GameEvent {
    /// The round this event belongs to.
    #[must_use]
    pub fn round(&self) -> RoundId {
        match self {
            GameEvent::RoundStarted { round, .. }
            | GameEvent::CardRevealed { round, .. }
            | GameEvent::PairMatched { round, .. }
            | GameEvent::PairMismatched { round, .. }
            | GameEvent::PairResolved { round, .. } => *round,
            GameEvent::RoundEnded { summary } => summary.round,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::RoundStarted { .. } => "round_started",
            GameEvent::CardRevealed { .. } => "card_revealed",
            GameEvent::PairMatched { .. } => "pair_matched",
            GameEvent::PairMismatched { .. } => "pair_mismatched",
            GameEvent::PairResolved { .. } => "pair_resolved",
            GameEvent::RoundEnded { .. } => "round_ended",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Outcome;

    #[test]
    fn test_round_accessor() {
        let event = GameEvent::PairMismatched {
            round: RoundId::new(3),
            cards: [CardId::new(0), CardId::new(1)],
            moves: 1,
        };
        assert_eq!(event.round(), RoundId::new(3));
        assert_eq!(event.name(), "pair_mismatched");

        let ended = GameEvent::RoundEnded {
            summary: RoundSummary {
                round: RoundId::new(4),
                category: "Animals".to_string(),
                pair_count: 4,
                pairs_matched: 4,
                elapsed: 12,
                moves: 6,
                outcome: Outcome::Won,
            },
        };
        assert_eq!(ended.round(), RoundId::new(4));
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::PairMatched {
            round: RoundId::FIRST,
            pair_key: "Dog".to_string(),
            cards: [CardId::new(2), CardId::new(5)],
            moves: 3,
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
