//! Observers - the engine's outbound seam.
//!
//! The engine pushes every [`GameEvent`] into its observer through
//! [`GameObserver::notify`]. The default `notify` fans each event out to a
//! per-signal method, so a renderer overrides only the signals it cares
//! about:
//!
//! ```
//! use memory_match::events::GameObserver;
//!
//! #[derive(Default)]
//! struct Sounds {
//!     chimes: u32,
//!     buzzes: u32,
//! }
//!
//! impl GameObserver for Sounds {
//!     fn on_match(&mut self, _pair_key: &str) {
//!         self.chimes += 1;
//!     }
//!
//!     fn on_mismatch(&mut self, _cards: [memory_match::core::CardId; 2]) {
//!         self.buzzes += 1;
//!     }
//! }
//! ```
//!
//! Observers that want the raw stream override `notify` instead, as
//! [`EventLog`] does.

use super::event::GameEvent;
use crate::cards::Card;
use crate::core::{CardId, RoundId};
use crate::engine::{PairKind, RoundSummary};

/// Receiver of engine signals.
///
/// All methods default to doing nothing.
pub trait GameObserver {
    /// Receive an event. Dispatches to the per-signal methods by default.
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoundStarted {
                round, pair_count, ..
            } => self.on_round_start(*round, *pair_count),
            GameEvent::CardRevealed { card, .. } => self.on_reveal(card),
            GameEvent::PairMatched { pair_key, .. } => self.on_match(pair_key),
            GameEvent::PairMismatched { cards, .. } => self.on_mismatch(*cards),
            GameEvent::PairResolved { cards, kind, .. } => self.on_resolved(*cards, *kind),
            GameEvent::RoundEnded { summary } => self.on_round_end(summary),
        }
    }

    /// A round was dealt.
    fn on_round_start(&mut self, _round: RoundId, _pair_count: usize) {}

    /// A card turned face-up.
    fn on_reveal(&mut self, _card: &Card) {}

    /// A pair matched. Fires before the resolution delay.
    fn on_match(&mut self, _pair_key: &str) {}

    /// A pair did not match. Fires before the resolution delay.
    fn on_mismatch(&mut self, _cards: [CardId; 2]) {}

    /// A pair finished resolving.
    fn on_resolved(&mut self, _cards: [CardId; 2], _kind: PairKind) {}

    /// The round ended.
    fn on_round_end(&mut self, _summary: &RoundSummary) {}
}

/// Observer that ignores everything.
impl GameObserver for () {}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn notify(&mut self, event: &GameEvent) {
        (**self).notify(event);
    }
}

impl<O: GameObserver + ?Sized> GameObserver for Box<O> {
    fn notify(&mut self, event: &GameEvent) {
        (**self).notify(event);
    }
}

/// Observer that records every event in order.
///
/// Useful for hosts that prefer to poll, for replays and for tests.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Remove and return all recorded events.
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Forget all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    /// Count events matching a predicate.
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&GameEvent) -> bool,
    {
        self.events.iter().filter(|e| predicate(e)).count()
    }
}

impl GameObserver for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        reveals: u32,
        matches: Vec<String>,
        mismatches: u32,
    }

    impl GameObserver for Counter {
        fn on_reveal(&mut self, _card: &Card) {
            self.reveals += 1;
        }

        fn on_match(&mut self, pair_key: &str) {
            self.matches.push(pair_key.to_string());
        }

        fn on_mismatch(&mut self, _cards: [CardId; 2]) {
            self.mismatches += 1;
        }
    }

    fn matched(key: &str) -> GameEvent {
        GameEvent::PairMatched {
            round: RoundId::FIRST,
            pair_key: key.to_string(),
            cards: [CardId::new(0), CardId::new(1)],
            moves: 1,
        }
    }

    #[test]
    fn test_default_notify_dispatches() {
        let mut counter = Counter::default();
        counter.notify(&matched("Cat"));
        counter.notify(&GameEvent::PairMismatched {
            round: RoundId::FIRST,
            cards: [CardId::new(0), CardId::new(1)],
            moves: 2,
        });

        assert_eq!(counter.matches, vec!["Cat".to_string()]);
        assert_eq!(counter.mismatches, 1);
        assert_eq!(counter.reveals, 0);
    }

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.notify(&matched("Dog"));
        log.notify(&matched("Cat"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.last(), Some(&matched("Cat")));
        assert_eq!(log.count(|e| matches!(e, GameEvent::PairMatched { .. })), 2);

        let drained: Vec<_> = log.drain().collect();
        assert_eq!(drained.len(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn test_forwarding_impls() {
        let mut log = EventLog::new();
        {
            let mut by_ref = &mut log;
            GameObserver::notify(&mut by_ref, &matched("Dog"));
        }
        let mut boxed: Box<dyn GameObserver> = Box::new(Counter::default());
        boxed.notify(&matched("Dog"));

        assert_eq!(log.len(), 1);
    }
}
