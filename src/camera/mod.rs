//! Camera system for orbiting a packed container.
//!
//! Provides spherical-coordinate math, the derived camera pose, and the
//! orbit/pan/zoom controller that consumes gesture deltas.

/// Orbit/pan/zoom controller and its navigation state.
pub mod controller;
/// Camera pose and look-at basis.
pub mod core;
/// Cartesian ↔ spherical conversion.
pub mod spherical;

pub use self::controller::{CameraController, NavigationState};
pub use self::core::{CameraBasis, CameraPose};
pub use self::spherical::Spherical;
