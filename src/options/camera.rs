use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::spherical::POLE_EPSILON;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit limits and gesture sensitivity.
pub struct CameraOptions {
    /// Closest the camera may get to its target.
    #[schemars(title = "Min Distance", range(min = 0.0))]
    pub min_distance: f32,
    /// Farthest the camera may get from its target (`None` = unrestricted).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(title = "Max Distance")]
    pub max_distance: Option<f32>,
    /// Lowest polar angle in radians (keeps the camera off the +Y pole).
    #[schemars(title = "Min Polar Angle", range(min = 0.0, max = 3.1416), extend("step" = 0.01))]
    pub phi_min: f32,
    /// Highest polar angle in radians (keeps the camera off the -Y pole).
    #[schemars(title = "Max Polar Angle", range(min = 0.0, max = 3.1416), extend("step" = 0.01))]
    pub phi_max: f32,
    /// Rotation sensitivity multiplier (1.0 = one full turn per viewport).
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.05, max = 4.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Radius factor applied per wheel notch.
    #[schemars(title = "Zoom Scale", range(min = 0.5, max = 0.99), extend("step" = 0.01))]
    pub zoom_scale: f32,
    /// Vertical field of view in degrees, used when framing a container.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            min_distance: 0.0,
            max_distance: None,
            phi_min: 0.1,
            phi_max: PI - 0.1,
            rotate_speed: 1.0,
            pan_speed: 0.3,
            zoom_scale: 0.95,
            fovy: 60.0,
        }
    }
}

impl CameraOptions {
    /// Upper radius bound, `f32::INFINITY` when unrestricted.
    #[must_use]
    pub fn max_radius(&self) -> f32 {
        self.max_distance.unwrap_or(f32::INFINITY)
    }

    /// Copy with every bound made self-consistent.
    ///
    /// Polar limits are pulled strictly inside `(0, π)` and swapped when
    /// inverted; a max distance below the min collapses onto the min.
    /// Non-finite or non-positive speeds fall back to their defaults.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let defaults = Self::default();
        let mut out = self.clone();

        let min_distance = if out.min_distance.is_finite() {
            out.min_distance.max(0.0)
        } else {
            0.0
        };
        out.min_distance = min_distance;
        out.max_distance = out
            .max_distance
            .filter(|d| !d.is_nan())
            .map(|d| d.max(min_distance));

        let lo = sanitize_angle(out.phi_min, defaults.phi_min);
        let hi = sanitize_angle(out.phi_max, defaults.phi_max);
        (out.phi_min, out.phi_max) = if lo <= hi { (lo, hi) } else { (hi, lo) };

        out.rotate_speed = positive_or(out.rotate_speed, defaults.rotate_speed);
        out.pan_speed = positive_or(out.pan_speed, defaults.pan_speed);
        out.zoom_scale = positive_or(out.zoom_scale, defaults.zoom_scale);
        out.fovy = positive_or(out.fovy, defaults.fovy).min(179.0);

        if out != *self {
            log::warn!("camera options normalized: {self:?} -> {out:?}");
        }
        out
    }
}

fn sanitize_angle(angle: f32, fallback: f32) -> f32 {
    if angle.is_finite() {
        angle.clamp(POLE_EPSILON, PI - POLE_EPSILON)
    } else {
        fallback
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
