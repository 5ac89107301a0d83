//! Round phases and results.

use serde::{Deserialize, Serialize};

use crate::core::RoundId;

/// Where a round is in its lifecycle.
///
/// ```text
/// NotStarted → Playing → (Resolving ⇄ Playing)* → Ended
/// ```
///
/// `Resolving` is the window between the second reveal of a pair and its
/// resolution. The round is still in play: the clock keeps ticking but no
/// card can be revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    NotStarted,
    Playing,
    Resolving,
    Ended,
}

impl Phase {
    /// Playing or resolving: the round clock is live.
    #[must_use]
    pub fn is_in_play(self) -> bool {
        matches!(self, Phase::Playing | Phase::Resolving)
    }

    /// Whether the round is over.
    #[must_use]
    pub fn is_ended(self) -> bool {
        self == Phase::Ended
    }
}

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every pair was matched.
    Won,
    /// The time limit ran out first.
    TimedOut,
}

/// Result of a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: RoundId,
    pub category: String,
    pub pair_count: usize,
    pub pairs_matched: usize,
    /// Seconds on the clock when the round ended.
    pub elapsed: u32,
    /// Two-card comparisons made.
    pub moves: u32,
    pub outcome: Outcome,
}

impl RoundSummary {
    /// Matched pairs per move, as a whole percentage.
    ///
    /// A perfect round (every move a match) scores 100. A round with no
    /// moves scores 0.
    #[must_use]
    pub fn accuracy_pct(&self) -> u8 {
        if self.moves == 0 {
            return 0;
        }
        let pct = (self.pairs_matched as u64 * 100) / u64::from(self.moves);
        pct.min(100) as u8
    }

    /// Whether the round was won.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(pairs_matched: usize, moves: u32) -> RoundSummary {
        RoundSummary {
            round: RoundId::FIRST,
            category: "Animals".to_string(),
            pair_count: 4,
            pairs_matched,
            elapsed: 30,
            moves,
            outcome: Outcome::Won,
        }
    }

    #[test]
    fn test_phase_predicates() {
        assert!(!Phase::NotStarted.is_in_play());
        assert!(Phase::Playing.is_in_play());
        assert!(Phase::Resolving.is_in_play());
        assert!(!Phase::Ended.is_in_play());
        assert!(Phase::Ended.is_ended());
        assert_eq!(Phase::default(), Phase::NotStarted);
    }

    #[test]
    fn test_accuracy() {
        assert_eq!(summary(4, 4).accuracy_pct(), 100);
        assert_eq!(summary(4, 8).accuracy_pct(), 50);
        assert_eq!(summary(4, 6).accuracy_pct(), 66);
        assert_eq!(summary(0, 0).accuracy_pct(), 0);
        assert!(summary(4, 4).is_win());
    }
}
