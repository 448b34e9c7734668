//! One interactive packing view: camera, gestures and reveal playback.
//!
//! [`PackingView`] is the single object a host keeps per rendered view. It
//! owns every piece of mutable state, so several views can coexist and
//! nothing lives in globals.

/// Playback commands triggered by host UI.
pub mod command;

pub use command::PlaybackCommand;

use crate::camera::{CameraController, CameraPose};
use crate::input::{GestureAdapter, InputEvent, Viewport};
use crate::options::Options;
use crate::playback::{
    IntervalClock, PlaybackEvent, PlaybackSequencer, Scheduler, TimerId,
};
use crate::scene::Container;

/// Camera navigation plus reveal playback for one container view.
///
/// # Frame loop
///
/// ```ignore
/// for event in window_events {
///     view.handle_input(&event);
/// }
/// view.poll_clock(Instant::now());
/// for event in view.drain_events() {
///     host.apply_visibility(event);
/// }
/// host.set_camera(view.frame());
/// ```
#[derive(Debug)]
pub struct PackingView<S: Scheduler = IntervalClock> {
    camera: CameraController,
    gestures: GestureAdapter,
    playback: PlaybackSequencer<S>,
    viewport: Viewport,
}

impl<S: Scheduler> PackingView<S> {
    /// View of `container` holding `item_count` placed items.
    ///
    /// The camera starts in the default corner position orbiting the
    /// container centre.
    #[must_use]
    pub fn new(
        container: &Container,
        item_count: usize,
        viewport: Viewport,
        options: &Options,
        scheduler: S,
    ) -> Self {
        log::debug!(
            "new packing view: {item_count} items in {:?}",
            container.size
        );
        Self {
            camera: CameraController::for_container(container, &options.camera),
            gestures: GestureAdapter::new(),
            playback: PlaybackSequencer::new(
                item_count,
                &options.playback,
                scheduler,
            ),
            viewport,
        }
    }

    /// The camera controller.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Mutable camera access for framing or runtime option changes.
    pub fn camera_mut(&mut self) -> &mut CameraController {
        &mut self.camera
    }

    /// The reveal sequencer.
    #[must_use]
    pub fn playback(&self) -> &PlaybackSequencer<S> {
        &self.playback
    }

    /// Mutable sequencer access.
    pub fn playback_mut(&mut self) -> &mut PlaybackSequencer<S> {
        &mut self.playback
    }

    /// Current viewport size.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record a new render-surface size.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Feed one raw input event through the gesture adapter into the camera.
    ///
    /// Returns `true` if the event produced camera motion.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let delta =
            self.gestures
                .handle_event(event, self.viewport, self.camera.options());
        match delta {
            Some(delta) => {
                self.camera.apply_gesture(&delta);
                true
            }
            None => false,
        }
    }

    /// Fold this frame's input into the camera; call once per rendered frame.
    pub fn frame(&mut self) -> CameraPose {
        self.camera.update()
    }

    /// Run a playback command.
    pub fn execute(&mut self, command: PlaybackCommand) {
        match command {
            PlaybackCommand::Play => self.playback.play(),
            PlaybackCommand::Pause => self.playback.pause(),
            PlaybackCommand::TogglePlayback => self.playback.toggle(),
            PlaybackCommand::StepBack => self.playback.step_back(),
            PlaybackCommand::Rewind => self.playback.rewind(),
            PlaybackCommand::SetSpeed { value } => {
                self.playback.set_speed(value);
            }
        }
    }

    /// Deliver a tick from the scheduler.
    pub fn on_timer(&mut self, id: TimerId) {
        self.playback.on_timer(id);
    }

    /// Playback events emitted since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.playback.drain_events()
    }

    /// Tear the view down: cancel the timer, forget any in-progress gesture
    /// and discard undelivered events.
    pub fn dispose(mut self) {
        self.playback.dispose();
        self.gestures.reset();
        log::debug!("packing view disposed");
    }
}

impl PackingView<IntervalClock> {
    /// Fire every playback tick that came due by `now`.
    pub fn poll_clock(&mut self, now: web_time::Instant) {
        for id in self.playback.scheduler_mut().due(now) {
            self.playback.on_timer(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};
    use web_time::{Duration, Instant};

    use super::*;
    use crate::input::MouseButton;
    use crate::playback::ManualScheduler;

    fn view(item_count: usize) -> PackingView<ManualScheduler> {
        PackingView::new(
            &Container::new(100.0, 40.0, 60.0),
            item_count,
            Viewport::new(800.0, 600.0),
            &Options::default(),
            ManualScheduler::new(),
        )
    }

    #[test]
    fn camera_starts_orbiting_container_center() {
        let v = view(3);
        assert_eq!(v.camera().state().target, Vec3::new(50.0, 20.0, 30.0));
        assert!(v
            .camera()
            .state()
            .position
            .abs_diff_eq(Vec3::splat(50.0), 1e-3));
    }

    #[test]
    fn drag_moves_camera_on_next_frame() {
        let mut v = view(0);
        let before = v.frame();
        assert!(!v.handle_input(&InputEvent::PointerDown {
            x: 100.0,
            y: 100.0,
            button: MouseButton::Left,
        }));
        assert!(
            v.handle_input(&InputEvent::PointerMove { x: 180.0, y: 100.0 })
        );
        let after = v.frame();
        assert!(!after.position.abs_diff_eq(before.position, 1e-3));
        assert_eq!(after.target, before.target);
    }

    #[test]
    fn pinch_zoom_halves_distance() {
        let mut v = view(0);
        let start = v.camera().state().spherical.radius;
        let _ = v.handle_input(&InputEvent::TouchStart {
            touches: vec![Vec2::new(300.0, 300.0), Vec2::new(400.0, 300.0)],
        });
        assert!(v.handle_input(&InputEvent::TouchMove {
            touches: vec![Vec2::new(250.0, 300.0), Vec2::new(450.0, 300.0)],
        }));
        let _ = v.frame();
        let radius = v.camera().state().spherical.radius;
        assert!((radius - start / 2.0).abs() < 1e-2);
    }

    #[test]
    fn commands_drive_playback() {
        let mut v = view(2);
        v.execute(PlaybackCommand::SetSpeed { value: 2000.0 });
        v.execute(PlaybackCommand::TogglePlayback);
        let id = v.playback().active_timer().unwrap();
        v.on_timer(id);
        v.execute(PlaybackCommand::StepBack);
        v.execute(PlaybackCommand::Rewind);

        let events = v.drain_events();
        assert_eq!(
            events,
            vec![
                PlaybackEvent::SpeedChanged { interval_ms: 100 },
                PlaybackEvent::Reveal(0),
                PlaybackEvent::Progress {
                    current: 1,
                    total: 2
                },
                PlaybackEvent::Hide(0),
                PlaybackEvent::Progress {
                    current: 0,
                    total: 2
                },
                PlaybackEvent::Paused,
                PlaybackEvent::HideAll,
                PlaybackEvent::Progress {
                    current: 0,
                    total: 2
                },
            ]
        );
    }

    #[test]
    fn wall_clock_view_reveals_on_schedule() {
        let start = Instant::now();
        let mut v = PackingView::new(
            &Container::new(10.0, 10.0, 10.0),
            2,
            Viewport::default(),
            &Options::default(),
            IntervalClock::new(start),
        );
        v.execute(PlaybackCommand::Play);

        v.poll_clock(start + Duration::from_millis(499));
        assert!(v.drain_events().is_empty());
        v.poll_clock(start + Duration::from_millis(500));
        v.poll_clock(start + Duration::from_millis(1000));
        let events = v.drain_events();
        assert!(events.contains(&PlaybackEvent::Reveal(1)));
        assert_eq!(events.last(), Some(&PlaybackEvent::Paused));
        assert_eq!(v.playback().scheduler().armed_count(), 0);
    }

    #[test]
    fn dispose_cancels_the_timer() {
        let mut scheduler = ManualScheduler::new();
        let mut v = PackingView::new(
            &Container::new(10.0, 10.0, 10.0),
            4,
            Viewport::default(),
            &Options::default(),
            &mut scheduler,
        );
        v.execute(PlaybackCommand::Play);
        v.dispose();
        assert!(scheduler.armed().is_empty());
    }
}
