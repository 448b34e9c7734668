use web_time::Duration;

use super::scheduler::{Scheduler, TimerId};
use crate::options::PlaybackOptions;

/// Notification for the host, drained with
/// [`PlaybackSequencer::drain_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Make the item at this index visible.
    Reveal(usize),
    /// Hide the item at this index.
    Hide(usize),
    /// Hide every item.
    HideAll,
    /// Revealed-item count changed.
    Progress {
        /// Number of items currently revealed.
        current: usize,
        /// Total number of items.
        total: usize,
    },
    /// Playback stopped advancing, by request or at the end of the list.
    Paused,
    /// Time between reveals changed.
    SpeedChanged {
        /// New interval in milliseconds.
        interval_ms: u64,
    },
}

/// Coarse playback state for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing revealed and not advancing.
    Stopped,
    /// Timer armed; revealing one item per tick.
    Playing,
    /// Some items revealed, not advancing.
    Paused,
}

/// Reveals items one at a time on a repeating timer.
///
/// The sequencer holds the only timer handle; it is `Some` exactly while
/// playing, and every re-arm disarms the previous timer first so at most one
/// tick stream exists.
#[derive(Debug)]
pub struct PlaybackSequencer<S: Scheduler> {
    item_count: usize,
    current_index: usize,
    interval_ms: u64,
    timer: Option<TimerId>,
    options: PlaybackOptions,
    scheduler: S,
    events: Vec<PlaybackEvent>,
}

impl<S: Scheduler> PlaybackSequencer<S> {
    /// Sequencer over `item_count` items, stopped at index 0.
    #[must_use]
    pub fn new(
        item_count: usize,
        options: &PlaybackOptions,
        scheduler: S,
    ) -> Self {
        let options = options.normalized();
        Self {
            item_count,
            current_index: 0,
            interval_ms: options.default_interval_ms,
            timer: None,
            options,
            scheduler,
            events: Vec::new(),
        }
    }

    /// Number of items revealed so far.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Total number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Whether a timer is armed.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    /// Current time between reveals.
    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Handle of the armed timer, if playing.
    #[must_use]
    pub fn active_timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Coarse state for UI display.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        if self.is_playing() {
            PlaybackState::Playing
        } else if self.current_index == 0 {
            PlaybackState::Stopped
        } else {
            PlaybackState::Paused
        }
    }

    /// The injected scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler, e.g. to poll a clock for due ticks.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Take every event emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start revealing. No-op when already playing or nothing is left.
    pub fn play(&mut self) {
        if self.current_index >= self.item_count || self.is_playing() {
            return;
        }
        self.arm();
    }

    /// Stop revealing. Always reports `Paused`, even if already paused.
    pub fn pause(&mut self) {
        self.disarm();
        self.events.push(PlaybackEvent::Paused);
    }

    /// Pause when playing, otherwise play.
    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Hide the most recently revealed item.
    ///
    /// Leaves the play state alone; stepping back while playing lets the
    /// next tick re-reveal the same item.
    pub fn step_back(&mut self) {
        if self.current_index == 0 {
            return;
        }
        self.current_index -= 1;
        self.events.push(PlaybackEvent::Hide(self.current_index));
        self.push_progress();
    }

    /// Pause, hide everything and return to the first item.
    pub fn rewind(&mut self) {
        self.pause();
        self.events.push(PlaybackEvent::HideAll);
        self.current_index = 0;
        self.push_progress();
    }

    /// Map a slider value onto the reveal interval.
    ///
    /// Out-of-range values are clamped. A running timer is replaced so the
    /// new interval applies from the next tick.
    pub fn set_speed(&mut self, speed_value: f32) {
        self.interval_ms = self.options.interval_for_speed(speed_value);
        if self.is_playing() {
            self.disarm();
            self.arm();
        }
        self.events.push(PlaybackEvent::SpeedChanged {
            interval_ms: self.interval_ms,
        });
    }

    /// Deliver one tick from the scheduler.
    ///
    /// Ticks from anything but the currently armed timer are ignored.
    pub fn on_timer(&mut self, id: TimerId) {
        if self.timer != Some(id) {
            log::warn!("ignoring tick from stale timer {id:?}");
            return;
        }
        if self.current_index >= self.item_count {
            self.pause();
            return;
        }
        self.events.push(PlaybackEvent::Reveal(self.current_index));
        self.current_index += 1;
        self.push_progress();
        if self.current_index == self.item_count {
            log::debug!(
                "playback reached the end of {} items",
                self.item_count
            );
            self.pause();
        }
    }

    /// Release the timer and drop undelivered events.
    ///
    /// Must run when the view closes; dropping the sequencer does the same.
    pub fn dispose(&mut self) {
        self.disarm();
        self.events.clear();
    }

    fn arm(&mut self) {
        let id = self
            .scheduler
            .arm(Duration::from_millis(self.interval_ms));
        log::debug!("playback timer {id:?} armed at {} ms", self.interval_ms);
        self.timer = Some(id);
    }

    fn disarm(&mut self) {
        if let Some(id) = self.timer.take() {
            self.scheduler.disarm(id);
            log::debug!("playback timer {id:?} disarmed");
        }
    }

    fn push_progress(&mut self) {
        self.events.push(PlaybackEvent::Progress {
            current: self.current_index,
            total: self.item_count,
        });
    }
}

impl<S: Scheduler> Drop for PlaybackSequencer<S> {
    fn drop(&mut self) {
        self.disarm();
    }
}
