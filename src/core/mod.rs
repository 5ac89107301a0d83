//! Core engine types: IDs, RNG, configuration.
//!
//! These are the building blocks shared by the deck, the engine and the
//! driver.

pub mod config;
pub mod ids;
pub mod rng;

pub use config::{EngineConfig, DEFAULT_PAIR_COUNT, DEFAULT_RESOLUTION_DELAY_MS, TICK_PERIOD};
pub use ids::{CardId, CardIdAllocator, RoundId};
pub use rng::{GameRng, GameRngState};
