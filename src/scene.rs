//! Host-supplied packing data.
//!
//! The host builds the visual boxes itself; this crate only needs the item
//! count for playback and the container extent for framing the camera.

use glam::Vec3;

/// Axis-aligned container with its minimum corner at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    /// Extent along X, Y and Z.
    pub size: Vec3,
}

impl Container {
    /// Container of the given width (X), height (Y) and depth (Z).
    #[must_use]
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            size: Vec3::new(width, height, depth),
        }
    }

    /// Geometric centre, the default orbit target.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.size / 2.0
    }

    /// Radius of the sphere through all eight corners.
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        self.size.length() / 2.0
    }
}

/// One placed item: `position` is its minimum corner inside the container.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    /// Host identifier, shown on the item's label.
    pub id: String,
    /// Minimum corner in container space.
    pub position: Vec3,
    /// Extent along X, Y and Z.
    pub size: Vec3,
}

impl PlacedItem {
    /// Item with minimum corner `position` and extent `size`.
    #[must_use]
    pub fn new(id: impl Into<String>, position: Vec3, size: Vec3) -> Self {
        Self {
            id: id.into(),
            position,
            size,
        }
    }

    /// Centre of the item's box, where the host places its mesh.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.position + self.size / 2.0
    }

    /// Whether the item lies fully inside `container`.
    #[must_use]
    pub fn fits_in(&self, container: &Container) -> bool {
        self.position.cmpge(Vec3::ZERO).all()
            && (self.position + self.size).cmple(container.size).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_center_is_offset_by_half_size() {
        let item = PlacedItem::new(
            "7",
            Vec3::new(10.0, 0.0, 5.0),
            Vec3::new(4.0, 2.0, 6.0),
        );
        assert_eq!(item.center(), Vec3::new(12.0, 1.0, 8.0));
    }

    #[test]
    fn container_center_and_radius() {
        let container = Container::new(6.0, 4.0, 12.0);
        assert_eq!(container.center(), Vec3::new(3.0, 2.0, 6.0));
        assert!((container.bounding_radius() - 7.0).abs() < 1e-6);
    }

    #[test]
    fn fit_check_respects_all_faces() {
        let container = Container::new(10.0, 10.0, 10.0);
        let inside = PlacedItem::new("a", Vec3::ZERO, Vec3::splat(10.0));
        let overhang =
            PlacedItem::new("b", Vec3::new(8.0, 0.0, 0.0), Vec3::splat(3.0));
        let negative =
            PlacedItem::new("c", Vec3::new(-1.0, 0.0, 0.0), Vec3::ONE);
        assert!(inside.fits_in(&container));
        assert!(!overhang.fits_in(&container));
        assert!(!negative.fits_in(&container));
    }
}
