use glam::{Vec2, Vec3};

use crate::camera::core::CameraPose;
use crate::camera::spherical::Spherical;
use crate::input::gesture::GestureDelta;
use crate::options::CameraOptions;
use crate::scene::Container;

/// Smallest orbit radius, in multiples of the target's f32 spacing.
///
/// Below this the camera position rounds onto the target and the offset
/// direction is lost.
const MIN_RADIUS_ULPS: f32 = 1024.0;

/// Radius floor that keeps `target + offset` distinguishable from `target`.
fn min_orbit_radius(target: Vec3) -> f32 {
    f32::EPSILON * MIN_RADIUS_ULPS * target.abs().max_element().max(1.0)
}

/// Camera placement owned by a [`CameraController`].
///
/// `position` always equals `target + spherical.to_vec3()` after an
/// [`update`](CameraController::update).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationState {
    /// Orbit centre.
    pub target: Vec3,
    /// Camera offset from `target`.
    pub spherical: Spherical,
    /// Camera position in world space.
    pub position: Vec3,
}

/// Input accumulated between two updates.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingInput {
    rotate: Vec2,
    pan: Vec2,
    scale: f32,
}

impl Default for PendingInput {
    fn default() -> Self {
        Self {
            rotate: Vec2::ZERO,
            pan: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

/// Orbit/pan/zoom camera driven by device-independent gesture deltas.
///
/// All `apply_*` calls only accumulate; [`update`](Self::update) folds the
/// pending input into the camera once per frame and enforces the radius and
/// polar clamps.
#[derive(Debug, Clone)]
pub struct CameraController {
    state: NavigationState,
    pending: PendingInput,
    options: CameraOptions,
}

impl CameraController {
    /// Camera at `position` orbiting `target`.
    #[must_use]
    pub fn new(position: Vec3, target: Vec3, options: &CameraOptions) -> Self {
        let mut controller = Self {
            state: NavigationState {
                target,
                spherical: Spherical::from_vec3(position - target),
                position,
            },
            pending: PendingInput::default(),
            options: options.normalized(),
        };
        let _ = controller.update();
        controller
    }

    /// Camera in the default corner position looking at the container
    /// centre.
    #[must_use]
    pub fn for_container(
        container: &Container,
        options: &CameraOptions,
    ) -> Self {
        Self::new(Vec3::splat(50.0), container.center(), options)
    }

    /// Current navigation state.
    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Active (normalized) options.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Replace the options; clamps take effect on the next update.
    pub fn set_options(&mut self, options: &CameraOptions) {
        self.options = options.normalized();
    }

    /// Move the orbit centre, keeping the camera position.
    pub fn set_target(&mut self, target: Vec3) {
        self.state.target = target;
    }

    /// Move the camera, keeping the orbit centre.
    pub fn set_position(&mut self, position: Vec3) {
        self.state.position = position;
    }

    /// Orbit the target by `d_theta` / `d_phi` radians on the next update.
    pub fn apply_rotate(&mut self, d_theta: f32, d_phi: f32) {
        if d_theta.is_finite() && d_phi.is_finite() {
            self.pending.rotate += Vec2::new(d_theta, d_phi);
        }
    }

    /// Pan by a screen-space offset on the next update.
    ///
    /// The offset is rotated into the camera's right/up plane at update time.
    pub fn apply_pan(&mut self, dx: f32, dy: f32) {
        if dx.is_finite() && dy.is_finite() {
            self.pending.pan += Vec2::new(dx, dy);
        }
    }

    /// Zoom by a pinch ratio; `ratio > 1` moves the camera closer.
    pub fn apply_zoom(&mut self, ratio: f32) {
        if ratio.is_finite() && ratio > 0.0 {
            self.pending.scale *= ratio;
        }
    }

    /// Route one gesture delta to the matching `apply_*` calls.
    pub fn apply_gesture(&mut self, delta: &GestureDelta) {
        if delta.rotate != Vec2::ZERO {
            self.apply_rotate(delta.rotate.x, delta.rotate.y);
        }
        if delta.pan != Vec2::ZERO {
            self.apply_pan(delta.pan.x, delta.pan.y);
        }
        if delta.zoom_ratio != 1.0 {
            self.apply_zoom(delta.zoom_ratio);
        }
    }

    /// Fold pending input into the camera and return the resulting pose.
    ///
    /// Run once per frame even without input so external target changes are
    /// picked up. Radius is clamped before rotation is added; phi is clamped
    /// after.
    pub fn update(&mut self) -> CameraPose {
        let pending = std::mem::take(&mut self.pending);
        let state = &mut self.state;

        if pending.pan != Vec2::ZERO {
            let current = CameraPose::look_at(state.position, state.target);
            let shift = current.pan_to_world(pending.pan);
            state.target += shift;
            state.position += shift;
        }

        let floor = min_orbit_radius(state.target);
        let offset = state.position - state.target;
        let mut spherical = if offset.length() < floor * 0.5 {
            // Position collapsed onto the target; keep the last direction.
            Spherical {
                radius: floor,
                ..state.spherical
            }
        } else {
            Spherical::from_vec3(offset)
        };

        if pending.scale != 1.0 && pending.scale.is_normal() {
            spherical.radius /= pending.scale;
        }
        spherical.radius = spherical.radius.clamp(
            self.options.min_distance.max(floor),
            self.options.max_radius().max(floor),
        );

        spherical.theta += pending.rotate.x;
        spherical.phi += pending.rotate.y;
        spherical.phi = spherical
            .phi
            .clamp(self.options.phi_min, self.options.phi_max);
        spherical = spherical.make_safe();

        state.spherical = spherical;
        state.position = state.target + spherical.to_vec3();
        CameraPose::look_at(state.position, state.target)
    }

    /// Pose for the current state without consuming pending input.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose::look_at(self.state.position, self.state.target)
    }

    /// Centre the orbit on the container, keeping the current view direction.
    pub fn look_at_container(&mut self, container: &Container) {
        self.set_target(container.center());
    }

    /// Centre on the container and back off until its bounding sphere fits
    /// the vertical field of view.
    pub fn fit_to_container(&mut self, container: &Container) {
        let center = container.center();
        let radius = container.bounding_radius();
        let half_fov = self.options.fovy.to_radians() / 2.0;
        let fit_distance = radius / half_fov.sin();

        let direction = (self.state.position - self.state.target)
            .try_normalize()
            .unwrap_or(Vec3::ONE.normalize());
        self.state.target = center;
        self.state.position = center + direction * fit_distance;
        log::debug!(
            "fit camera to container {container:?}: distance {fit_distance}"
        );
    }
}
