//! Virtual-time scheduler for driving an engine.
//!
//! `VirtualClock` plays the part of the host's timers without touching a
//! real clock. It watches the engine's ticker and pending resolution and,
//! when advanced, fires `tick` and `resolve_pending` at the virtual instants
//! they fall due, in chronological order.
//!
//! When a resolution and a tick fall due at the same instant the resolution
//! fires first, so a final match that completes exactly as time runs out
//! wins the round.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::cards::CategoryRegistry;
//! use memory_match::core::{EngineConfig, GameRng};
//! use memory_match::driver::VirtualClock;
//! use memory_match::engine::{MatchEngine, Outcome};
//!
//! let mut engine = MatchEngine::new(
//!     CategoryRegistry::builtin(),
//!     EngineConfig::default().with_time_limit(25),
//!     GameRng::new(1),
//! );
//! let mut clock = VirtualClock::new();
//!
//! engine.start_round("Fruits", 4).unwrap();
//! clock.advance(&mut engine, Duration::from_secs(30));
//!
//! let summary = engine.end_summary().unwrap();
//! assert_eq!(summary.outcome, Outcome::TimedOut);
//! assert_eq!(summary.elapsed, 25);
//! ```

use std::time::Duration;

use crate::core::{RoundId, TICK_PERIOD};
use crate::engine::{MatchEngine, PairKind, ResolutionKey, Ticker, TickStatus};
use crate::events::GameObserver;

/// A callback the clock fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fired {
    /// `tick` ran at `at`.
    Tick { at: Duration, status: TickStatus },
    /// `resolve_pending` ran at `at`.
    Resolution { at: Duration, kind: Option<PairKind> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ScheduledTick {
    round: RoundId,
    due: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ScheduledResolution {
    key: ResolutionKey,
    due: Duration,
}

/// Deterministic scheduler in virtual time.
#[derive(Clone, Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    tick: Option<ScheduledTick>,
    resolution: Option<ScheduledResolution>,
}

impl VirtualClock {
    /// Create a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// When the next tick is due, if the ticker is running.
    #[must_use]
    pub fn next_tick(&self) -> Option<Duration> {
        self.tick.map(|t| t.due)
    }

    /// When the pending resolution is due, if one is scheduled.
    #[must_use]
    pub fn next_resolution(&self) -> Option<Duration> {
        self.resolution.map(|r| r.due)
    }

    /// Pick up ticker and resolution changes made since the last call.
    ///
    /// A newly started ticker first fires one period from now; a newly
    /// pending resolution fires its delay from now. Handles the engine has
    /// dropped are cancelled.
    pub fn sync<O: GameObserver>(&mut self, engine: &MatchEngine<O>) {
        self.tick = match engine.ticker() {
            Ticker::Running(round) => match self.tick {
                Some(tick) if tick.round == round => Some(tick),
                _ => Some(ScheduledTick {
                    round,
                    due: self.now + TICK_PERIOD,
                }),
            },
            Ticker::Idle | Ticker::Stopped(_) => None,
        };

        self.resolution = match engine.pending_resolution() {
            Some(pending) => match self.resolution {
                Some(res) if res.key == pending.key() => Some(res),
                _ => Some(ScheduledResolution {
                    key: pending.key(),
                    due: self.now + pending.delay,
                }),
            },
            None => None,
        };
    }

    /// Advance virtual time by `by`, firing every callback that falls due.
    pub fn advance<O: GameObserver>(&mut self, engine: &mut MatchEngine<O>, by: Duration) -> Vec<Fired> {
        let target = self.now + by;
        let mut fired = Vec::new();

        loop {
            self.sync(engine);

            let resolution = self.resolution.filter(|r| r.due <= target);
            let tick = self.tick.filter(|t| t.due <= target);

            match (resolution, tick) {
                (Some(res), Some(tick)) if res.due <= tick.due => {
                    fired.push(self.fire_resolution(engine, res));
                }
                (Some(res), None) => fired.push(self.fire_resolution(engine, res)),
                (_, Some(tick)) => fired.push(self.fire_tick(engine, tick)),
                (None, None) => break,
            }
        }

        self.now = target;
        fired
    }

    /// Advance just far enough for the pending resolution to fire.
    ///
    /// Ticks falling due on the way fire too. Does nothing when no
    /// resolution is pending.
    pub fn settle<O: GameObserver>(&mut self, engine: &mut MatchEngine<O>) -> Vec<Fired> {
        self.sync(engine);
        match self.resolution {
            Some(res) => {
                let by = res.due.saturating_sub(self.now);
                self.advance(engine, by)
            }
            None => Vec::new(),
        }
    }

    fn fire_resolution<O: GameObserver>(
        &mut self,
        engine: &mut MatchEngine<O>,
        res: ScheduledResolution,
    ) -> Fired {
        self.now = res.due;
        self.resolution = None;
        let kind = engine.resolve_pending(res.key);
        tracing::trace!(at = ?self.now, ?kind, "virtual resolution fired");
        Fired::Resolution { at: res.due, kind }
    }

    fn fire_tick<O: GameObserver>(&mut self, engine: &mut MatchEngine<O>, tick: ScheduledTick) -> Fired {
        self.now = tick.due;
        self.tick = Some(ScheduledTick {
            round: tick.round,
            due: tick.due + TICK_PERIOD,
        });
        let status = engine.tick();
        Fired::Tick { at: tick.due, status }
    }
}
