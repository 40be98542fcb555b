//! Scene representation.
//!
//! A scene is nothing more than an ordered list of unit-sphere offsets; the
//! floor plane, sky, and light live in the renderer's environment instead.

use glint_math::Vec3;

/// A complete scene: every unit sphere's offset, in a stable order.
///
/// An offset is the translation added to a ray origin to move the ray into
/// that sphere's local frame, so a sphere centered at world point `c` is
/// stored as `-c`. Order never affects the rendered image, but keeping it
/// stable keeps renders reproducible under a fixed seed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    offsets: Vec<Vec3>,
}

impl Scene {
    /// Create a scene from sphere offsets.
    pub fn new(offsets: Vec<Vec3>) -> Self {
        Self { offsets }
    }

    /// The sphere offsets, in scan order.
    pub fn offsets(&self) -> &[Vec3] {
        &self.offsets
    }

    /// Get the sphere count.
    pub fn sphere_count(&self) -> usize {
        self.offsets.len()
    }

    /// Check whether the scene contains no spheres at all.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
