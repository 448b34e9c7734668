//! Timed reveal playback: items become visible one at a time on a
//! repeating timer supplied by an injectable [`Scheduler`].

/// Repeating-timer capability and its manual/wall-clock implementations.
pub mod scheduler;
/// Play/pause/step/rewind state machine emitting visibility events.
pub mod sequencer;

pub use scheduler::{IntervalClock, ManualScheduler, Scheduler, TimerId};
pub use sequencer::{PlaybackEvent, PlaybackSequencer, PlaybackState};
