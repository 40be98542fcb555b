// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod ray;
pub use ray::Ray;

/// Normalize `v` to unit length.
///
/// Panics if `v` has zero length. Every direction handed to the tracer must
/// be a unit vector, so a zero-length input is a bug at the call site and is
/// reported immediately instead of propagating NaNs through the image.
pub fn normalized(v: Vec3) -> Vec3 {
    let len_sq = v.dot(v);
    assert!(len_sq > 0.0, "cannot normalize a zero-length vector");
    v * len_sq.sqrt().recip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_unit_length() {
        for v in [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-3.1, -16.0, 1.9),
            Vec3::new(0.0, 0.0, 0.5),
        ] {
            let n = normalized(v);
            assert!((n.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_normalized_preserves_direction() {
        let n = normalized(Vec3::new(0.0, 0.0, 4.0));
        assert!((n - Vec3::Z).length() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "zero-length")]
    fn test_normalized_zero_panics() {
        normalized(Vec3::ZERO);
    }

    #[test]
    fn test_cross_orthogonal() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        let c = a.cross(b);
        assert!(c.dot(a).abs() < 1e-5);
        assert!(c.dot(b).abs() < 1e-5);
    }
}
