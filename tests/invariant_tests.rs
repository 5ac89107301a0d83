//! Property tests for deck and round invariants.
//!
//! Random seeds, pair counts and input sequences are thrown at the engine;
//! the invariants must hold after every step.

use proptest::prelude::*;

use memory_match::cards::CategoryRegistry;
use memory_match::core::{EngineConfig, GameRng};
use memory_match::engine::{IgnoreReason, MatchEngine, Phase, RevealOutcome, TickStatus};

#[derive(Clone, Debug)]
enum Input {
    Reveal(usize),
    Tick,
    Resolve,
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => (0usize..16).prop_map(Input::Reveal),
        2 => Just(Input::Tick),
        2 => Just(Input::Resolve),
    ]
}

proptest! {
    /// Every deal has 2×N cards with each pair key on exactly two of them.
    #[test]
    fn prop_deck_composition(seed in any::<u64>(), pairs in 1usize..=8) {
        let mut engine = MatchEngine::new(
            CategoryRegistry::builtin(),
            EngineConfig::default(),
            GameRng::new(seed),
        );
        engine.start_round("Animals", pairs).unwrap();
        let deck = engine.deck().unwrap();

        prop_assert_eq!(deck.len(), 2 * pairs);
        prop_assert_eq!(deck.pair_keys().len(), pairs);
        for key in deck.pair_keys() {
            prop_assert_eq!(deck.ids_for(key).len(), 2);
        }
    }

    /// Selections stay within bounds, counters never go backwards and
    /// matched cards are never touched by a reveal.
    #[test]
    fn prop_round_invariants(
        seed in any::<u64>(),
        pairs in 1usize..=8,
        limit in proptest::option::of(1u32..40),
        inputs in proptest::collection::vec(input(), 0..200),
    ) {
        let mut config = EngineConfig::default();
        config.time_limit_secs = limit;
        let mut engine = MatchEngine::new(CategoryRegistry::builtin(), config, GameRng::new(seed));
        engine.start_round("Fruits", pairs).unwrap();

        let ids: Vec<_> = engine.deck().unwrap().iter().map(|c| c.id).collect();
        let mut last_moves = 0;
        let mut last_elapsed = 0;

        for input in inputs {
            let matched_before: Vec<_> = engine
                .deck()
                .unwrap()
                .iter()
                .filter(|c| c.matched)
                .cloned()
                .collect();
            let phase_before = engine.phase();

            match input {
                Input::Reveal(idx) => {
                    let id = ids[idx % ids.len()];
                    let was_matched = engine.card(id).unwrap().matched;
                    let outcome = engine.reveal_card(id);
                    if was_matched && phase_before == Phase::Playing {
                        prop_assert_eq!(outcome, RevealOutcome::Ignored(IgnoreReason::AlreadyMatched));
                    }
                }
                Input::Tick => {
                    let status = engine.tick();
                    if phase_before == Phase::Ended {
                        prop_assert_eq!(status, TickStatus::Ignored);
                    }
                }
                Input::Resolve => {
                    engine.resolve_current();
                }
            }

            prop_assert!(engine.active_selections().len() <= 2);
            prop_assert!(engine.moves() >= last_moves);
            prop_assert!(engine.elapsed() >= last_elapsed);
            if let Some(limit) = limit {
                prop_assert!(engine.elapsed() <= limit);
            }
            if phase_before == Phase::Ended {
                prop_assert_eq!(engine.phase(), Phase::Ended);
                prop_assert_eq!(engine.moves(), last_moves);
                prop_assert_eq!(engine.elapsed(), last_elapsed);
            }

            // Matched cards keep every flag as it was
            for card in &matched_before {
                prop_assert_eq!(engine.card(card.id), Some(card));
            }

            last_moves = engine.moves();
            last_elapsed = engine.elapsed();
        }

        // Won rounds have every card matched
        if let Ok(summary) = engine.end_summary() {
            if summary.is_win() {
                prop_assert!(engine.deck().unwrap().all_matched());
            }
        }
    }
}
