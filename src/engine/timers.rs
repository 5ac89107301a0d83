//! Scheduled-callback handles.
//!
//! The engine owns no wall-clock timers. It tracks two handles the host
//! schedules against:
//!
//! - `Ticker`: the once-per-second round clock. Started when a round is
//!   dealt, stopped when the round ends or a new one replaces it.
//! - `PendingResolution`: the single outstanding resolution callback after a
//!   pair has been revealed. At most one exists at a time.
//!
//! Both carry the round they belong to, so a callback that fires after its
//! round is gone is recognised and ignored. A resolution is further keyed by
//! the move that formed its pair, so a late callback for an earlier pair
//! cannot resolve a later one.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{CardId, RoundId};

/// State of the round clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ticker {
    /// No round has run yet.
    #[default]
    Idle,
    /// Ticking for the given round.
    Running(RoundId),
    /// Cancelled; the round it belonged to is over.
    Stopped(RoundId),
}

impl Ticker {
    /// Start ticking for `round`, replacing whatever ran before.
    pub fn start(&mut self, round: RoundId) {
        *self = Ticker::Running(round);
    }

    /// Cancel the ticker. No-op unless running.
    pub fn stop(&mut self) {
        if let Ticker::Running(round) = *self {
            *self = Ticker::Stopped(round);
        }
    }

    /// Whether the ticker is running at all.
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Ticker::Running(_))
    }

    /// Whether the ticker is running for `round`.
    #[must_use]
    pub fn is_running_for(self, round: RoundId) -> bool {
        self == Ticker::Running(round)
    }
}

/// Whether a revealed pair matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairKind {
    Match,
    Mismatch,
}

/// Identifies one resolution callback: the round and the move that formed
/// the pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionKey {
    pub round: RoundId,
    pub move_number: u32,
}

/// A revealed pair waiting out the resolution delay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResolution {
    pub round: RoundId,
    /// Move number that formed the pair; unique within the round.
    pub move_number: u32,
    /// The two cards, in reveal order.
    pub cards: [CardId; 2],
    pub kind: PairKind,
    pub delay: Duration,
}

impl PendingResolution {
    /// The key a callback must present to resolve this pair.
    #[must_use]
    pub fn key(&self) -> ResolutionKey {
        ResolutionKey {
            round: self.round,
            move_number: self.move_number,
        }
    }
}
