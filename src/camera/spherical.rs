use std::f32::consts::PI;

use glam::Vec3;

/// Smallest distance kept between `phi` and either pole.
pub const POLE_EPSILON: f32 = 1e-6;

/// Camera offset from its target in spherical form (Y-up).
///
/// `theta` is the azimuth around +Y measured from +Z toward +X, `phi` the
/// polar angle from +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Distance from the target.
    pub radius: f32,
    /// Azimuthal angle in radians (unbounded).
    pub theta: f32,
    /// Polar angle in radians, in `[0, π]`.
    pub phi: f32,
}

impl Default for Spherical {
    fn default() -> Self {
        Self {
            radius: 1.0,
            theta: 0.0,
            phi: 0.0,
        }
    }
}

impl Spherical {
    /// Spherical coordinate from its three components.
    #[must_use]
    pub const fn new(radius: f32, theta: f32, phi: f32) -> Self {
        Self { radius, theta, phi }
    }

    /// Convert a Cartesian offset to spherical form.
    ///
    /// A zero-length offset maps to `radius = 0` with both angles zero.
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    /// Convert back to a Cartesian offset.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Keep `phi` strictly off the poles.
    #[must_use]
    pub fn make_safe(self) -> Self {
        Self {
            phi: self.phi.clamp(POLE_EPSILON, PI - POLE_EPSILON),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn round_trips_through_cartesian() {
        let cases = [
            Spherical::new(1.0, 0.0, FRAC_PI_2),
            Spherical::new(150.0, 1.2, 0.3),
            Spherical::new(0.5, -2.9, 2.8),
            Spherical::new(42.0, 3.0, 0.1),
        ];
        for s in cases {
            let back = Spherical::from_vec3(s.to_vec3());
            assert!((back.radius - s.radius).abs() < 1e-3 * s.radius);
            assert!((back.theta - s.theta).abs() < 1e-4, "{s:?} -> {back:?}");
            assert!((back.phi - s.phi).abs() < 1e-4, "{s:?} -> {back:?}");
        }
    }

    #[test]
    fn axes_map_to_expected_angles() {
        let up = Spherical::from_vec3(Vec3::Y * 3.0);
        assert_eq!(up.radius, 3.0);
        assert_eq!(up.phi, 0.0);

        let plus_x = Spherical::from_vec3(Vec3::X);
        assert!((plus_x.theta - FRAC_PI_2).abs() < 1e-6);
        assert!((plus_x.phi - FRAC_PI_2).abs() < 1e-6);

        let plus_z = Spherical::from_vec3(Vec3::Z);
        assert_eq!(plus_z.theta, 0.0);
    }

    #[test]
    fn zero_offset_is_degenerate_not_nan() {
        let s = Spherical::from_vec3(Vec3::ZERO);
        assert_eq!(s, Spherical::new(0.0, 0.0, 0.0));
        assert_eq!(s.to_vec3(), Vec3::ZERO);
    }

    #[test]
    fn make_safe_moves_phi_off_poles() {
        assert!(Spherical::new(1.0, 0.0, 0.0).make_safe().phi > 0.0);
        assert!(Spherical::new(1.0, 0.0, PI).make_safe().phi < PI);
        let mid = Spherical::new(1.0, 0.4, 1.0);
        assert_eq!(mid.make_safe(), mid);
    }
}
