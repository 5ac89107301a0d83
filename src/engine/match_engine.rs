//! The matching state machine.
//!
//! `MatchEngine` owns the deck and the round counters and is driven by four
//! inputs:
//!
//! - `start_round` / `restart`: deal a fresh deck
//! - `reveal_card`: a card was clicked
//! - `tick`: one second of round time elapsed
//! - `resolve_pending`: the resolution delay after a pair elapsed
//!
//! Every state change is reported to the engine's [`GameObserver`].
//!
//! ## Example
//!
//! ```
//! use memory_match::cards::CategoryRegistry;
//! use memory_match::core::{EngineConfig, GameRng};
//! use memory_match::engine::{MatchEngine, Phase};
//!
//! let mut engine = MatchEngine::new(
//!     CategoryRegistry::builtin(),
//!     EngineConfig::default(),
//!     GameRng::new(42),
//! );
//!
//! engine.start_round("Animals", 4).unwrap();
//! assert_eq!(engine.phase(), Phase::Playing);
//! assert_eq!(engine.deck().map(|d| d.len()), Some(8));
//!
//! // Reveal every pair, resolving each one as the host's timer would
//! let keys: Vec<String> = engine.deck().unwrap().pair_keys().into_iter().map(String::from).collect();
//! for key in keys {
//!     let ids = engine.deck().unwrap().ids_for(&key);
//!     engine.reveal_card(ids[0]);
//!     let pending = engine.reveal_card(ids[1]).resolution_key().unwrap();
//!     engine.resolve_pending(pending);
//! }
//!
//! assert_eq!(engine.phase(), Phase::Ended);
//! assert!(engine.end_summary().unwrap().is_win());
//! ```

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::EngineError;
use super::phase::{Outcome, Phase, RoundSummary};
use super::status::{IgnoreReason, RevealOutcome, TickStatus};
use super::timers::{PairKind, PendingResolution, ResolutionKey, Ticker};
use crate::cards::{Card, CategoryRegistry, Deck};
use crate::core::{CardId, CardIdAllocator, EngineConfig, GameRng, RoundId};
use crate::events::{GameEvent, GameObserver};

/// Cards currently face-up and unresolved. Never more than two.
pub type Selections = SmallVec<[CardId; 2]>;

/// State of one round. Replaced wholesale when the next round is dealt.
#[derive(Clone, Debug)]
struct Round {
    id: RoundId,
    category: String,
    deck: Deck,
    moves: u32,
    elapsed: u32,
    time_limit_secs: Option<u32>,
    resolution_delay: Duration,
    active: Selections,
    phase: Phase,
    pending: Option<PendingResolution>,
    summary: Option<RoundSummary>,
}

/// Read-only view of the current round for renderers.
///
/// Cheap to take: the card list is a persistent vector shared with the
/// engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub round: RoundId,
    pub phase: Phase,
    pub category: String,
    pub cards: Vector<Card>,
    pub active: Selections,
    pub moves: u32,
    pub elapsed: u32,
    pub time_limit_secs: Option<u32>,
}

impl RoundSnapshot {
    /// Seconds left before the time limit, if there is one.
    #[must_use]
    pub fn remaining_secs(&self) -> Option<u32> {
        self.time_limit_secs
            .map(|limit| limit.saturating_sub(self.elapsed))
    }
}

/// The memory-matching game engine.
///
/// Generic over its observer; `()` ignores every signal.
#[derive(Debug)]
pub struct MatchEngine<O: GameObserver = ()> {
    config: EngineConfig,
    registry: CategoryRegistry,
    rng: GameRng,
    ids: CardIdAllocator,
    next_round: RoundId,
    ticker: Ticker,
    round: Option<Round>,
    last_request: Option<(String, usize)>,
    observer: O,
}

impl MatchEngine<()> {
    /// Create an engine with no observer.
    #[must_use]
    pub fn new(registry: CategoryRegistry, config: EngineConfig, rng: GameRng) -> Self {
        Self::with_observer(registry, config, rng, ())
    }
}

impl<O: GameObserver> MatchEngine<O> {
    /// Create an engine reporting to `observer`.
    pub fn with_observer(
        registry: CategoryRegistry,
        config: EngineConfig,
        rng: GameRng,
        observer: O,
    ) -> Self {
        Self {
            config,
            registry,
            rng,
            ids: CardIdAllocator::new(),
            next_round: RoundId::FIRST,
            ticker: Ticker::Idle,
            round: None,
            last_request: None,
            observer,
        }
    }

    // === Round Setup ===

    /// Deal a new round of `pair_count` pairs from `category`.
    ///
    /// Replaces any current round, cancelling its ticker and any pending
    /// resolution, and starts the ticker for the new one. On error nothing
    /// changes.
    pub fn start_round(&mut self, category: &str, pair_count: usize) -> Result<RoundId, EngineError> {
        let source = self
            .registry
            .get(category)
            .ok_or_else(|| EngineError::InvalidCategory(category.to_string()))?;
        let deck = Deck::deal(source, pair_count, &mut self.rng, &mut self.ids)?;

        let id = self.next_round;
        self.next_round = id.next();

        if let Some(prev) = &self.round {
            if prev.phase.is_in_play() {
                tracing::debug!(round = %prev.id, "abandoning round in play");
            }
        }

        self.ticker.start(id);
        self.round = Some(Round {
            id,
            category: category.to_string(),
            deck,
            moves: 0,
            elapsed: 0,
            time_limit_secs: self.config.time_limit_secs,
            resolution_delay: self.config.resolution_delay(),
            active: Selections::new(),
            phase: Phase::Playing,
            pending: None,
            summary: None,
        });
        self.last_request = Some((category.to_string(), pair_count));

        tracing::info!(
            round = %id,
            category,
            pairs = pair_count,
            time_limit = ?self.config.time_limit_secs,
            "round started"
        );
        self.observer.notify(&GameEvent::RoundStarted {
            round: id,
            category: category.to_string(),
            pair_count,
            time_limit_secs: self.config.time_limit_secs,
        });

        Ok(id)
    }

    /// Deal a round from `category` with the configured pair count.
    pub fn deal(&mut self, category: &str) -> Result<RoundId, EngineError> {
        let pairs = self.config.pair_count;
        self.start_round(category, pairs)
    }

    /// Deal again with the previous round's category and pair count.
    pub fn restart(&mut self) -> Result<RoundId, EngineError> {
        let (category, pairs) = self
            .last_request
            .clone()
            .ok_or(EngineError::NoPreviousRound)?;
        self.start_round(&category, pairs)
    }

    // === Play ===

    /// Turn a card face-up.
    ///
    /// Ignored when no round is in play, while a pair is resolving, and for
    /// cards that are unknown, already face-up or matched. Revealing the
    /// second card of a pair counts a move, signals match or mismatch
    /// immediately and leaves the pair pending for the resolution delay.
    pub fn reveal_card(&mut self, id: CardId) -> RevealOutcome {
        let Some(round) = self.round.as_mut() else {
            return ignored(id, IgnoreReason::NoRound);
        };

        match round.phase {
            Phase::Playing => {}
            Phase::Resolving => return ignored(id, IgnoreReason::ResolutionPending),
            Phase::Ended => return ignored(id, IgnoreReason::RoundOver),
            Phase::NotStarted => return ignored(id, IgnoreReason::NoRound),
        }
        if round.active.len() >= 2 {
            return ignored(id, IgnoreReason::ResolutionPending);
        }

        let Some(card) = round.deck.get_mut(id) else {
            return ignored(id, IgnoreReason::UnknownCard);
        };
        if card.matched {
            return ignored(id, IgnoreReason::AlreadyMatched);
        }
        if card.revealed {
            return ignored(id, IgnoreReason::AlreadyRevealed);
        }

        card.revealed = true;
        let revealed = card.clone();
        round.active.push(id);

        tracing::debug!(round = %round.id, card = %id, key = %revealed.pair_key, "card revealed");
        self.observer.notify(&GameEvent::CardRevealed {
            round: round.id,
            card: revealed.clone(),
        });

        if round.active.len() < 2 {
            return RevealOutcome::Revealed(id);
        }

        let cards = [round.active[0], id];
        round.moves += 1;

        let kind = match round.deck.get(cards[0]) {
            Some(first) if first.pairs_with(&revealed) => PairKind::Match,
            _ => PairKind::Mismatch,
        };

        round.phase = Phase::Resolving;
        let pending = PendingResolution {
            round: round.id,
            move_number: round.moves,
            cards,
            kind,
            delay: round.resolution_delay,
        };
        let key = pending.key();
        round.pending = Some(pending);

        let event = match kind {
            PairKind::Match => {
                tracing::debug!(round = %round.id, key = %revealed.pair_key, moves = round.moves, "pair matched");
                GameEvent::PairMatched {
                    round: round.id,
                    pair_key: revealed.pair_key,
                    cards,
                    moves: round.moves,
                }
            }
            PairKind::Mismatch => {
                tracing::debug!(round = %round.id, moves = round.moves, "pair mismatched");
                GameEvent::PairMismatched {
                    round: round.id,
                    cards,
                    moves: round.moves,
                }
            }
        };
        self.observer.notify(&event);

        RevealOutcome::PairFormed {
            key,
            cards,
            kind,
            delay: round.resolution_delay,
        }
    }

    /// The resolution-delay callback.
    ///
    /// Locks a matched pair or flips a mismatched pair back, then clears the
    /// selections. Ignored (returns `None`) unless `key` names the pair
    /// pending right now: a callback from an earlier round, or for an earlier
    /// pair already resolved, changes nothing. Resolving the last pair ends
    /// the round as won.
    pub fn resolve_pending(&mut self, key: ResolutionKey) -> Option<PairKind> {
        let current = self.round.as_mut()?;
        let is_pending = current.id == key.round
            && !current.phase.is_ended()
            && current.pending.as_ref().is_some_and(|p| p.key() == key);
        if !is_pending {
            tracing::trace!(round = %key.round, move_number = key.move_number, "stale resolution ignored");
            return None;
        }
        let pending = current.pending.take()?;
        let round = pending.round;

        for id in pending.cards {
            if let Some(card) = current.deck.get_mut(id) {
                match pending.kind {
                    PairKind::Match => card.matched = true,
                    PairKind::Mismatch => card.revealed = false,
                }
            }
        }
        current.active.clear();
        current.phase = Phase::Playing;

        tracing::debug!(round = %round, kind = ?pending.kind, "pair resolved");
        self.observer.notify(&GameEvent::PairResolved {
            round,
            cards: pending.cards,
            kind: pending.kind,
        });

        if pending.kind == PairKind::Match && current.deck.all_matched() {
            self.finish(Outcome::Won);
        }

        Some(pending.kind)
    }

    /// Resolve whatever is pending in the current round, if anything.
    pub fn resolve_current(&mut self) -> Option<PairKind> {
        let key = self.round.as_ref()?.pending.as_ref()?.key();
        self.resolve_pending(key)
    }

    /// One second of round time elapsed.
    ///
    /// Keeps counting while a pair is resolving. Reaching the time limit
    /// clamps the clock to the limit, stops the ticker and ends the round as
    /// timed out. A no-op once the round is not in play.
    pub fn tick(&mut self) -> TickStatus {
        let Some(round) = self.round.as_mut() else {
            return TickStatus::Ignored;
        };
        if !round.phase.is_in_play() || !self.ticker.is_running_for(round.id) {
            return TickStatus::Ignored;
        }

        round.elapsed = round.elapsed.saturating_add(1);
        tracing::trace!(round = %round.id, elapsed = round.elapsed, "tick");

        let limit = round.time_limit_secs;
        match limit {
            Some(limit) if round.elapsed >= limit => {
                round.elapsed = limit;
                self.finish(Outcome::TimedOut);
                TickStatus::Expired { elapsed: limit }
            }
            _ => TickStatus::Running {
                elapsed: round.elapsed,
            },
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if round.phase.is_ended() {
            return;
        }

        self.ticker.stop();
        round.pending = None;
        round.active.clear();
        round.phase = Phase::Ended;

        let summary = RoundSummary {
            round: round.id,
            category: round.category.clone(),
            pair_count: round.deck.pair_count(),
            pairs_matched: round.deck.matched_pairs(),
            elapsed: round.elapsed,
            moves: round.moves,
            outcome,
        };
        round.summary = Some(summary.clone());

        tracing::info!(
            round = %summary.round,
            outcome = ?outcome,
            elapsed = summary.elapsed,
            moves = summary.moves,
            "round ended"
        );
        self.observer.notify(&GameEvent::RoundEnded { summary });
    }

    // === Queries ===

    /// Summary of the ended round.
    pub fn end_summary(&self) -> Result<RoundSummary, EngineError> {
        self.round
            .as_ref()
            .and_then(|r| r.summary.clone())
            .ok_or(EngineError::RoundNotEnded)
    }

    /// Current phase. `NotStarted` until the first round is dealt.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.round.as_ref().map_or(Phase::NotStarted, |r| r.phase)
    }

    /// ID of the current round.
    #[must_use]
    pub fn round_id(&self) -> Option<RoundId> {
        self.round.as_ref().map(|r| r.id)
    }

    /// Moves counted this round.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.round.as_ref().map_or(0, |r| r.moves)
    }

    /// Seconds elapsed this round.
    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.round.as_ref().map_or(0, |r| r.elapsed)
    }

    /// The current deck.
    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        self.round.as_ref().map(|r| &r.deck)
    }

    /// Look up a card of the current deck.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck().and_then(|d| d.get(id))
    }

    /// Cards face-up and awaiting resolution, in reveal order.
    #[must_use]
    pub fn active_selections(&self) -> &[CardId] {
        match &self.round {
            Some(r) => r.active.as_slice(),
            None => &[],
        }
    }

    /// The pair waiting out its resolution delay.
    #[must_use]
    pub fn pending_resolution(&self) -> Option<&PendingResolution> {
        self.round.as_ref().and_then(|r| r.pending.as_ref())
    }

    /// State of the round clock.
    #[must_use]
    pub fn ticker(&self) -> Ticker {
        self.ticker
    }

    /// Whether the round clock is running.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    /// Snapshot of the current round for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        self.round.as_ref().map(|r| RoundSnapshot {
            round: r.id,
            phase: r.phase,
            category: r.category.clone(),
            cards: r.deck.cards().clone(),
            active: r.active.clone(),
            moves: r.moves,
            elapsed: r.elapsed,
            time_limit_secs: r.time_limit_secs,
        })
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Mutable configuration. Changes apply from the next round dealt.
    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    /// Categories the engine deals from.
    #[must_use]
    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// The observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the engine and return its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}

fn ignored(id: CardId, reason: IgnoreReason) -> RevealOutcome {
    tracing::trace!(card = %id, ?reason, "reveal ignored");
    RevealOutcome::Ignored(reason)
}
