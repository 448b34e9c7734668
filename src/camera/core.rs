use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

/// Camera placement handed to the host once per frame.
///
/// Derived from the controller's target and spherical offset; never stored
/// on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Camera orientation looking from `position` toward `target`, Y-up.
    pub orientation: Quat,
}

impl CameraPose {
    /// Pose at `position` looking at `target` with +Y as world up.
    #[must_use]
    pub fn look_at(position: Vec3, target: Vec3) -> Self {
        let basis = CameraBasis::look_at(position, target);
        Self {
            position,
            target,
            orientation: Quat::from_mat3(&Mat3::from_cols(
                basis.right,
                basis.up,
                -basis.forward,
            ))
            .normalize(),
        }
    }

    /// Right-handed view matrix for this pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up())
    }

    /// Camera up direction.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Camera right direction.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Unit direction from `position` toward `target`.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// World-space translation for a screen-space pan offset.
    ///
    /// The offset is rotated into the camera's right/up plane; the view axis
    /// component is always zero.
    #[must_use]
    pub fn pan_to_world(&self, offset: Vec2) -> Vec3 {
        self.right() * offset.x + self.up() * offset.y
    }
}

/// Orthonormal camera axes for a look-at orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    /// Unit vector toward screen right.
    pub right: Vec3,
    /// Unit vector toward screen up.
    pub up: Vec3,
    /// Unit vector along the view direction.
    pub forward: Vec3,
}

impl CameraBasis {
    /// Basis for a camera at `eye` looking at `target` with +Y as world up.
    ///
    /// Falls back to the identity basis when eye and target coincide, and to
    /// +X as right when looking straight along the Y axis.
    #[must_use]
    pub fn look_at(eye: Vec3, target: Vec3) -> Self {
        let Some(forward) = (target - eye).try_normalize() else {
            return Self {
                right: Vec3::X,
                up: Vec3::Y,
                forward: Vec3::NEG_Z,
            };
        };
        let right = forward.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::X);
        let up = right.cross(forward);
        Self { right, up, forward }
    }
}
