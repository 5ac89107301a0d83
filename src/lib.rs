//! # memory-match
//!
//! Engine for a memory-matching card game: a grid of face-down cards, the
//! player flips two at a time, matched pairs stay face-up, and the round ends
//! when every pair is matched or the clock runs out.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: The engine never reads a clock or global
//!    randomness. Time arrives through `tick`/`resolve_pending`; shuffles
//!    come from an injected, seeded `GameRng`.
//!
//! 2. **Total Inputs**: Clicks and ticks at the wrong moment are ignored
//!    with a reason, never errors. Only round setup can fail.
//!
//! 3. **Signals, Not Rendering**: State changes go out through a
//!    `GameObserver`. Sounds, confetti and popups are the host's business.
//!
//! ## Modules
//!
//! - `core`: IDs, RNG, configuration
//! - `cards`: categories, cards and the deck
//! - `engine`: the matching state machine
//! - `events`: events and observers
//! - `driver`: virtual-time scheduling

pub mod cards;
pub mod core;
pub mod driver;
pub mod engine;
pub mod events;

// Re-export commonly used types
pub use crate::core::{CardId, EngineConfig, GameRng, GameRngState, RoundId};

pub use crate::cards::{Card, Category, CategoryError, CategoryRegistry, Deck, Item};

pub use crate::engine::{
    EngineError, IgnoreReason, MatchEngine, Outcome, PairKind, PendingResolution, Phase,
    ResolutionKey, RevealOutcome, RoundSnapshot, RoundSummary, TickStatus, Ticker,
};

pub use crate::events::{EventLog, GameEvent, GameObserver};

pub use crate::driver::{Fired, VirtualClock};
