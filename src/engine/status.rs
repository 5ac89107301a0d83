//! Outcomes of the engine's total operations.
//!
//! `reveal_card` and `tick` never fail. They report what they did instead,
//! including why an input was ignored.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::timers::{PairKind, ResolutionKey};
use crate::core::CardId;

/// Why a reveal was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No round has been dealt.
    NoRound,
    /// The round has ended.
    RoundOver,
    /// Two cards are face-up awaiting resolution.
    ResolutionPending,
    /// The ID is not a card of the current deck.
    UnknownCard,
    /// The card is already face-up.
    AlreadyRevealed,
    /// The card is part of a matched pair.
    AlreadyMatched,
}

/// What a reveal did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),

    /// The card is now the first of a pair.
    Revealed(CardId),

    /// The card completed a pair and a move was counted.
    ///
    /// The host must call `resolve_pending(key)` once `delay` has elapsed.
    PairFormed {
        key: ResolutionKey,
        cards: [CardId; 2],
        kind: PairKind,
        delay: Duration,
    },
}

impl RevealOutcome {
    /// Whether the reveal changed anything.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, RevealOutcome::Ignored(_))
    }

    /// Key of the resolution callback this reveal scheduled, if any.
    #[must_use]
    pub fn resolution_key(&self) -> Option<ResolutionKey> {
        match self {
            RevealOutcome::PairFormed { key, .. } => Some(*key),
            _ => None,
        }
    }
}

/// What a tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickStatus {
    /// No round in play; nothing changed.
    Ignored,
    /// The clock advanced.
    Running { elapsed: u32 },
    /// The clock reached the time limit and the round ended.
    Expired { elapsed: u32 },
}
