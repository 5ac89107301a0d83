//! The game engine: deck, flip state, counters and end conditions.
//!
//! - `MatchEngine`: the state machine itself
//! - `Phase`, `Outcome`, `RoundSummary`: lifecycle and results
//! - `RevealOutcome`, `TickStatus`: what each input did
//! - `Ticker`, `PendingResolution`, `ResolutionKey`: handles the host schedules callbacks from
//!
//! The engine is deterministic: it never reads a clock. Hosts call `tick`
//! once per second and `resolve_pending` once the resolution delay has
//! elapsed, either from real timers or through
//! [`VirtualClock`](crate::driver::VirtualClock).

mod error;
mod match_engine;
mod phase;
mod status;
mod timers;

pub use error::EngineError;
pub use match_engine::{MatchEngine, RoundSnapshot, Selections};
pub use phase::{Outcome, Phase, RoundSummary};
pub use status::{IgnoreReason, RevealOutcome, TickStatus};
pub use timers::{PairKind, PendingResolution, ResolutionKey, Ticker};
