//! Device-independent gesture recognition.
//!
//! The `GestureAdapter` owns the only device-specific state in the crate:
//! which button or how many fingers are down and where the last sample was.
//! Everything it emits is a [`GestureDelta`] the camera understands without
//! knowing where it came from.

use std::f32::consts::TAU;

use glam::Vec2;

use super::event::{InputEvent, MouseButton, Viewport};
use crate::options::CameraOptions;

/// Pinch spans shorter than this (in pixels) never produce a zoom ratio.
const MIN_PINCH_SPAN: f32 = 1.0;

/// One input frame's worth of camera motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureDelta {
    /// Orbit change `(d_theta, d_phi)` in radians.
    pub rotate: Vec2,
    /// Screen-space pan offset, already scaled by the pan speed.
    pub pan: Vec2,
    /// Multiplicative zoom; `> 1` moves closer, `1` is no zoom.
    pub zoom_ratio: f32,
}

impl GestureDelta {
    /// Delta that moves nothing.
    pub const NONE: Self = Self {
        rotate: Vec2::ZERO,
        pan: Vec2::ZERO,
        zoom_ratio: 1.0,
    };

    /// Pure orbit delta.
    #[must_use]
    pub fn rotate(d_theta: f32, d_phi: f32) -> Self {
        Self {
            rotate: Vec2::new(d_theta, d_phi),
            ..Self::NONE
        }
    }

    /// Pure zoom delta.
    #[must_use]
    pub fn zoom(ratio: f32) -> Self {
        Self {
            zoom_ratio: ratio,
            ..Self::NONE
        }
    }

    /// Whether applying this delta would leave the camera untouched.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        *self == Self::NONE
    }
}

impl Default for GestureDelta {
    fn default() -> Self {
        Self::NONE
    }
}

/// What the active pointer or fingers are currently doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// Nothing pressed.
    Idle,
    /// Primary button or a single finger is dragging an orbit.
    Rotating {
        /// Last sampled screen position.
        anchor: Vec2,
    },
    /// Secondary or middle button is dragging a pan.
    Panning {
        /// Last sampled screen position.
        anchor: Vec2,
    },
    /// Two fingers are panning and pinching together.
    PanZoom {
        /// Last sampled midpoint between the two fingers.
        centroid: Vec2,
        /// Last sampled distance between the two fingers.
        span: f32,
    },
}

/// Converts raw pointer/touch/wheel events into [`GestureDelta`]s.
///
/// Deltas are incremental: every emitted move re-anchors at the current
/// sample, so nothing accumulates across frames inside the adapter.
#[derive(Debug, Clone)]
pub struct GestureAdapter {
    state: GestureState,
    /// Button driving the current pointer drag, if any.
    pointer_button: Option<MouseButton>,
}

impl Default for GestureAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureAdapter {
    /// Create an adapter in the `Idle` state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
            pointer_button: None,
        }
    }

    /// Current recognizer state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Drop any in-progress gesture.
    pub fn reset(&mut self) {
        self.transition(GestureState::Idle);
        self.pointer_button = None;
    }

    /// Process one raw event and return the camera delta it produces, if
    /// any.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        viewport: Viewport,
        options: &CameraOptions,
    ) -> Option<GestureDelta> {
        let delta = match event {
            InputEvent::PointerDown { x, y, button } => {
                self.pointer_down(Vec2::new(*x, *y), *button);
                None
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer_move(Vec2::new(*x, *y), viewport, options)
            }
            InputEvent::PointerUp { button } => {
                if self.pointer_button == Some(*button) {
                    self.reset();
                }
                None
            }
            InputEvent::TouchStart { touches } => {
                self.touch_start(touches);
                None
            }
            InputEvent::TouchMove { touches } => {
                self.touch_move(touches, viewport, options)
            }
            InputEvent::TouchEnd { touches } => {
                self.touch_end(touches);
                None
            }
            InputEvent::Wheel { delta_y } => wheel_delta(*delta_y, options),
        };
        delta.filter(|d| !d.is_noop())
    }

    fn pointer_down(&mut self, pos: Vec2, button: MouseButton) {
        self.pointer_button = Some(button);
        match button {
            MouseButton::Left => {
                self.transition(GestureState::Rotating { anchor: pos });
            }
            MouseButton::Right | MouseButton::Middle => {
                self.transition(GestureState::Panning { anchor: pos });
            }
        }
    }

    fn pointer_move(
        &mut self,
        pos: Vec2,
        viewport: Viewport,
        options: &CameraOptions,
    ) -> Option<GestureDelta> {
        if self.pointer_button.is_none() {
            return None;
        }
        match self.state {
            GestureState::Rotating { anchor } => {
                self.state = GestureState::Rotating { anchor: pos };
                Some(rotate_delta(pos - anchor, viewport, options))
            }
            GestureState::Panning { anchor } => {
                self.state = GestureState::Panning { anchor: pos };
                Some(GestureDelta {
                    pan: pan_offset(pos - anchor, viewport, options),
                    ..GestureDelta::NONE
                })
            }
            GestureState::Idle | GestureState::PanZoom { .. } => None,
        }
    }

    fn touch_start(&mut self, touches: &[Vec2]) {
        self.pointer_button = None;
        match touches {
            [] => {}
            [single] => {
                self.transition(GestureState::Rotating { anchor: *single });
            }
            [a, b, ..] => self.begin_pinch(*a, *b),
        }
    }

    fn touch_move(
        &mut self,
        touches: &[Vec2],
        viewport: Viewport,
        options: &CameraOptions,
    ) -> Option<GestureDelta> {
        if self.pointer_button.is_some() {
            return None;
        }
        match (self.state, touches) {
            (GestureState::Rotating { anchor }, [single]) => {
                self.state = GestureState::Rotating { anchor: *single };
                Some(rotate_delta(*single - anchor, viewport, options))
            }
            // A second finger we never saw start: switch without a delta.
            (GestureState::Rotating { .. }, [a, b, ..]) => {
                self.begin_pinch(*a, *b);
                None
            }
            (GestureState::PanZoom { centroid, span }, [a, b, ..]) => {
                let new_centroid = (*a + *b) / 2.0;
                let new_span = a.distance(*b);
                self.state = GestureState::PanZoom {
                    centroid: new_centroid,
                    span: new_span,
                };
                let zoom_ratio =
                    if span >= MIN_PINCH_SPAN && new_span >= MIN_PINCH_SPAN {
                        new_span / span
                    } else {
                        1.0
                    };
                Some(GestureDelta {
                    rotate: Vec2::ZERO,
                    pan: pan_offset(new_centroid - centroid, viewport, options),
                    zoom_ratio,
                })
            }
            _ => None,
        }
    }

    fn touch_end(&mut self, remaining: &[Vec2]) {
        if self.pointer_button.is_some() {
            return;
        }
        let required = match self.state {
            GestureState::Idle => return,
            GestureState::Rotating { .. } | GestureState::Panning { .. } => 1,
            GestureState::PanZoom { .. } => 2,
        };
        match (self.state, remaining) {
            _ if remaining.len() < required => self.reset(),
            // The pair may have changed; measure the next move from it.
            (GestureState::PanZoom { .. }, [a, b, ..]) => {
                self.begin_pinch(*a, *b);
            }
            _ => {}
        }
    }

    fn begin_pinch(&mut self, a: Vec2, b: Vec2) {
        self.transition(GestureState::PanZoom {
            centroid: (a + b) / 2.0,
            span: a.distance(b),
        });
    }

    fn transition(&mut self, next: GestureState) {
        if std::mem::discriminant(&self.state) != std::mem::discriminant(&next)
        {
            log::debug!("gesture {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }
}

/// Orbit delta for a screen-space drag: one viewport width is a full turn.
fn rotate_delta(
    moved: Vec2,
    viewport: Viewport,
    options: &CameraOptions,
) -> GestureDelta {
    let turns = moved / viewport.extent();
    GestureDelta::rotate(
        -TAU * turns.x * options.rotate_speed,
        -TAU * turns.y * options.rotate_speed,
    )
}

/// Screen-space pan offset for a drag, normalized by the viewport size.
fn pan_offset(
    moved: Vec2,
    viewport: Viewport,
    options: &CameraOptions,
) -> Vec2 {
    let extent = viewport.extent();
    Vec2::new(
        -2.0 * moved.x * options.pan_speed / extent.x,
        2.0 * moved.y * options.pan_speed / extent.y,
    )
}

/// One wheel notch: scrolling up (negative) multiplies the zoom ratio by
/// `zoom_scale`, scrolling down divides by it.
fn wheel_delta(delta_y: f32, options: &CameraOptions) -> Option<GestureDelta> {
    if delta_y < 0.0 {
        Some(GestureDelta::zoom(options.zoom_scale))
    } else if delta_y > 0.0 {
        Some(GestureDelta::zoom(1.0 / options.zoom_scale))
    } else {
        None
    }
}
