//! Host-side scheduling.
//!
//! The engine exposes its timers as handles; something has to fire them.
//! `VirtualClock` does so in virtual time, for tests, replays and headless
//! hosts. A host with real timers schedules `tick` every
//! [`TICK_PERIOD`](crate::core::TICK_PERIOD) and `resolve_pending` after the
//! delay returned by `reveal_card`, following the same ordering rules.

mod clock;

pub use clock::{Fired, VirtualClock};
