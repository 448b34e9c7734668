//! Repeating-timer capability injected into the playback sequencer.
//!
//! The sequencer never sleeps or spawns; it asks a [`Scheduler`] to arm a
//! repeating timer and is told about ticks through
//! [`PlaybackSequencer::on_timer`](super::PlaybackSequencer::on_timer).

use web_time::{Duration, Instant};

/// Handle for one armed repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Arms and cancels repeating timers.
pub trait Scheduler {
    /// Start a repeating timer firing every `interval`.
    fn arm(&mut self, interval: Duration) -> TimerId;
    /// Cancel a timer. Unknown or already-cancelled ids are ignored.
    fn disarm(&mut self, id: TimerId);
}

impl<T: Scheduler + ?Sized> Scheduler for &mut T {
    fn arm(&mut self, interval: Duration) -> TimerId {
        (**self).arm(interval)
    }

    fn disarm(&mut self, id: TimerId) {
        (**self).disarm(id);
    }
}

/// Scheduler that never fires on its own; tests and hosts with their own
/// event loop deliver ticks explicitly.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    armed: Vec<(TimerId, Duration)>,
}

impl ManualScheduler {
    /// Scheduler with nothing armed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently armed timers with their intervals, oldest first.
    #[must_use]
    pub fn armed(&self) -> &[(TimerId, Duration)] {
        &self.armed
    }

    /// Interval of an armed timer.
    #[must_use]
    pub fn interval_of(&self, id: TimerId) -> Option<Duration> {
        self.armed
            .iter()
            .find(|(armed, _)| *armed == id)
            .map(|(_, interval)| *interval)
    }
}

impl Scheduler for ManualScheduler {
    fn arm(&mut self, interval: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.armed.push((id, interval));
        id
    }

    fn disarm(&mut self, id: TimerId) {
        self.armed.retain(|(armed, _)| *armed != id);
    }
}

#[derive(Debug)]
struct ClockTimer {
    id: TimerId,
    interval: Duration,
    next_due: Instant,
}

/// Wall-clock scheduler polled once per frame.
///
/// A timer fires at most once per [`due`](Self::due) call; if a frame was
/// late the next deadline is pushed out instead of firing a burst.
#[derive(Debug)]
pub struct IntervalClock {
    now: Instant,
    next_id: u64,
    timers: Vec<ClockTimer>,
}

impl Default for IntervalClock {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl IntervalClock {
    /// Clock whose notion of "now" starts at `start`.
    #[must_use]
    pub fn new(start: Instant) -> Self {
        Self {
            now: start,
            next_id: 0,
            timers: Vec::new(),
        }
    }

    /// Number of armed timers.
    #[must_use]
    pub fn armed_count(&self) -> usize {
        self.timers.len()
    }

    /// Advance to `now` and return every timer that fired.
    pub fn due(&mut self, now: Instant) -> Vec<TimerId> {
        if now > self.now {
            self.now = now;
        }
        let now = self.now;
        let mut fired = Vec::new();
        for timer in &mut self.timers {
            if timer.next_due > now {
                continue;
            }
            fired.push(timer.id);
            timer.next_due += timer.interval;
            if timer.next_due <= now {
                timer.next_due = now + timer.interval;
            }
        }
        fired
    }
}

impl Scheduler for IntervalClock {
    fn arm(&mut self, interval: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let interval = interval.max(Duration::from_millis(1));
        self.timers.push(ClockTimer {
            id,
            interval,
            next_due: self.now + interval,
        });
        log::debug!("timer {id:?} armed every {interval:?}");
        id
    }

    fn disarm(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_scheduler_tracks_armed_timers() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.arm(Duration::from_millis(500));
        let b = scheduler.arm(Duration::from_millis(100));
        assert_ne!(a, b);
        assert_eq!(scheduler.armed().len(), 2);

        scheduler.disarm(a);
        scheduler.disarm(a);
        assert_eq!(scheduler.armed(), &[(b, Duration::from_millis(100))]);
        assert_eq!(scheduler.interval_of(a), None);
    }

    #[test]
    fn clock_fires_once_per_interval() {
        let start = Instant::now();
        let mut clock = IntervalClock::new(start);
        let id = clock.arm(Duration::from_millis(100));

        assert!(clock.due(start + Duration::from_millis(99)).is_empty());
        assert_eq!(clock.due(start + Duration::from_millis(100)), vec![id]);
        assert!(clock.due(start + Duration::from_millis(150)).is_empty());
        assert_eq!(clock.due(start + Duration::from_millis(200)), vec![id]);
    }

    #[test]
    fn late_poll_does_not_burst() {
        let start = Instant::now();
        let mut clock = IntervalClock::new(start);
        let id = clock.arm(Duration::from_millis(100));

        assert_eq!(clock.due(start + Duration::from_millis(1000)), vec![id]);
        assert!(clock.due(start + Duration::from_millis(1050)).is_empty());
        assert_eq!(clock.due(start + Duration::from_millis(1100)), vec![id]);
    }

    #[test]
    fn disarmed_clock_timer_never_fires() {
        let start = Instant::now();
        let mut clock = IntervalClock::new(start);
        let id = clock.arm(Duration::from_millis(10));
        clock.disarm(id);
        assert_eq!(clock.armed_count(), 0);
        assert!(clock.due(start + Duration::from_secs(5)).is_empty());
    }
}
