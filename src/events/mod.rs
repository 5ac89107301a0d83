//! Event-driven signals from the engine to the rendering layer.
//!
//! ## Design Philosophy
//!
//! The engine never touches presentation. It reports what happened through
//! a [`GameObserver`]; the host maps those signals to sounds, animations and
//! popups.

pub mod event;
pub mod observer;

pub use event::GameEvent;
pub use observer::{EventLog, GameObserver};
