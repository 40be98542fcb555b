//! Camera for ray generation.

use glint_math::{normalized, Vec3};
use rand::RngCore;

use crate::{gen_f32, Ray};

/// Lens axis length; sets both the pixel pitch and the depth-of-field blur.
const APERTURE: f32 = 0.002;

/// Up reference used to derive the lens axes.
const UP: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Camera for generating rays into the scene.
///
/// The basis is derived once from the gaze: two short lens axes orthogonal
/// to it, and a film shift that recenters the image plane ahead of the eye.
/// Primary rays jitter their origin across the lens for depth of field and
/// their target inside the pixel for anti-aliasing.
#[derive(Clone, Debug)]
pub struct Camera {
    eye: Vec3,
    lens_u: Vec3,
    lens_v: Vec3,
    film_shift: Vec3,
    pixel_scale: f32,
}

impl Camera {
    /// Create a camera at `eye` looking along `gaze` for a `width` pixel
    /// wide image.
    ///
    /// Panics if `gaze` has zero length or points straight up or down,
    /// since no lens basis exists there.
    pub fn new(eye: Vec3, gaze: Vec3, width: u32) -> Self {
        let gaze = normalized(gaze);
        let lens_u = normalized(UP.cross(gaze)) * APERTURE;
        let lens_v = normalized(gaze.cross(lens_u)) * APERTURE;
        let film_shift = (lens_u + lens_v) * -256.0 + gaze;

        Self {
            eye,
            lens_u,
            lens_v,
            film_shift,
            pixel_scale: 512.0 / width as f32,
        }
    }

    /// Generate a primary ray through pixel (x, y) with fresh lens and
    /// pixel jitter.
    pub fn primary_ray(&self, x: u32, y: u32, rng: &mut dyn RngCore) -> Ray {
        let jitter = self.lens_u * ((gen_f32(rng) - 0.5) * 99.0)
            + self.lens_v * ((gen_f32(rng) - 0.5) * 99.0);

        let target = self.lens_u * (gen_f32(rng) + x as f32 * self.pixel_scale)
            + self.lens_v * (gen_f32(rng) + y as f32 * self.pixel_scale)
            + self.film_shift;

        Ray::new(self.eye + jitter, normalized(target * 16.0 - jitter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EYE: Vec3 = Vec3::new(-5.0, 16.0, 8.0);
    const GAZE: Vec3 = Vec3::new(-3.1, -16.0, 1.9);

    #[test]
    fn test_lens_axes() {
        let camera = Camera::new(EYE, GAZE, 512);
        let gaze = normalized(GAZE);

        assert!((camera.lens_u.length() - APERTURE).abs() < 1e-7);
        assert!((camera.lens_v.length() - APERTURE).abs() < 1e-7);
        assert!(camera.lens_u.dot(gaze).abs() < 1e-6);
        assert!(camera.lens_v.dot(gaze).abs() < 1e-6);
        assert!(camera.lens_u.dot(camera.lens_v).abs() < 1e-6);
    }

    #[test]
    fn test_film_shift() {
        // Axis-aligned gaze keeps the basis simple enough to check by hand.
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0), 512);

        assert!((camera.lens_u - Vec3::new(APERTURE, 0.0, 0.0)).length() < 1e-7);
        assert!((camera.lens_v - Vec3::new(0.0, 0.0, APERTURE)).length() < 1e-7);
        assert!((camera.film_shift - Vec3::new(-0.512, -1.0, -0.512)).length() < 1e-5);
    }

    #[test]
    fn test_primary_ray_is_unit() {
        let camera = Camera::new(EYE, GAZE, 512);
        let mut rng = StdRng::seed_from_u64(42);

        for (x, y) in [(0, 0), (511, 0), (0, 511), (255, 255)] {
            let ray = camera.primary_ray(x, y, &mut rng);
            assert!((ray.direction.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_primary_ray_deterministic() {
        let camera = Camera::new(EYE, GAZE, 512);
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);

        assert_eq!(camera.primary_ray(10, 20, &mut a), camera.primary_ray(10, 20, &mut b));
    }

    #[test]
    #[should_panic(expected = "zero-length")]
    fn test_vertical_gaze_panics() {
        Camera::new(Vec3::ZERO, Vec3::Z, 512);
    }
}
