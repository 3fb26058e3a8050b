//! Animation playback: a finite-state machine over a precomputed rate
//! schedule, driven by discrete commands and a cooperative per-tick step.
//!
//! The surrounding event loop owns scheduling; the controller never sleeps.
//! Cancellation (Pause/Stop) is observed at frame boundaries, so its worst
//! case latency is one pacing interval.

pub mod command;
pub mod controller;
pub mod schedule;
pub mod session;

pub use command::AnimationCommand;
pub use controller::{ANIMATION_AXIS_LIMIT, AnimationController, TickReport};
pub use schedule::{ANIMATION_STEPS, RateSchedule, SCHEDULE_START_RATE};
pub use session::{AnimationPhase, AnimationSession};
