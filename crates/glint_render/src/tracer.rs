//! Ray intersection and shading.
//!
//! The tracer knows exactly three kinds of surface:
//! - the sky, shaded as a vertical gradient
//! - an infinite checkered floor in the z = 0 plane
//! - unit spheres, shaded with a specular glint plus a mirror bounce

use glint_math::{normalized, Vec3};
use rand::RngCore;

use crate::{gen_f32, Color, Ray};

/// Hits closer than this are ignored, so a bounced ray cannot re-hit the
/// surface it just left.
const MIN_DISTANCE: f32 = 0.01;

/// Sentinel distance reported for rays that reach the sky.
const SKY_DISTANCE: f32 = 1e9;

/// What a ray ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Escaped without hitting anything.
    Sky,
    /// The floor plane at z = 0.
    Floor,
    /// One of the scene's unit spheres.
    Sphere,
}

/// An intersection: what was hit, how far along the ray, and the normal.
///
/// For `Sky` the distance holds the 1e9 sentinel and the normal is
/// meaningless.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub surface: Surface,
    pub t: f32,
    pub normal: Vec3,
}

/// Fixed look of the world around the spheres.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Sky color before the vertical gradient is applied.
    pub sky: Color,
    /// Checkerboard tile where ceil(x) + ceil(y) is even.
    pub floor_even: Color,
    /// Checkerboard tile where ceil(x) + ceil(y) is odd.
    pub floor_odd: Color,
    /// Point the jittered shadow rays aim for.
    pub light: Vec3,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            sky: Color::new(1.0, 1.0, 1.0),
            floor_even: Color::new(3.0, 3.0, 3.0),
            floor_odd: Color::new(3.0, 1.0, 1.0),
            light: Vec3::new(9.0, 9.0, 16.0),
        }
    }
}

/// Intersects and shades rays against one scene.
pub struct Tracer<'a> {
    spheres: &'a [Vec3],
    env: &'a Environment,
    max_bounces: u32,
}

impl<'a> Tracer<'a> {
    /// Create a tracer over `spheres`, given as the offsets added to ray
    /// origins (a sphere centered at world point `c` is stored as `-c`).
    pub fn new(spheres: &'a [Vec3], env: &'a Environment, max_bounces: u32) -> Self {
        Self {
            spheres,
            env,
            max_bounces,
        }
    }

    /// Find the nearest surface along `ray`.
    pub fn trace(&self, ray: &Ray) -> Hit {
        let o = ray.origin;
        let d = ray.direction;

        let mut surface = Surface::Sky;
        let mut best = SKY_DISTANCE;
        let mut normal = Vec3::ZERO;

        let t = -o.z / d.z;
        if t > MIN_DISTANCE {
            surface = Surface::Floor;
            best = t;
            normal = Vec3::Z;
        }

        // Each offset translates the ray into that sphere's local frame,
        // where the quadratic is against a unit sphere at the origin.
        let mut local = Vec3::ZERO;
        for &offset in self.spheres {
            let p = o + offset;
            let b = p.dot(d);
            let c = p.dot(p) - 1.0;
            let q = b * b - c;

            if q > 0.0 {
                let s = -b - q.sqrt();
                if s > MIN_DISTANCE && s < best {
                    surface = Surface::Sphere;
                    best = s;
                    local = p;
                }
            }
        }

        // Only the winning sphere needs its normal.
        if surface == Surface::Sphere {
            normal = normalized(local + d * best);
        }

        Hit {
            surface,
            t: best,
            normal,
        }
    }

    /// Estimate the color arriving along `ray`.
    ///
    /// Sky and floor hits terminate a path; sphere hits add a specular
    /// glint and continue along the mirror direction at half weight, up to
    /// `max_bounces` reflections. The light direction is jittered on every
    /// surface event, which is where the soft shadows come from.
    pub fn sample(&self, ray: Ray, rng: &mut dyn RngCore) -> Color {
        let mut ray = ray;
        let mut color = Color::ZERO;
        let mut weight = 1.0;

        for _ in 0..=self.max_bounces {
            let hit = self.trace(&ray);

            if hit.surface == Surface::Sky {
                color += self.env.sky * (1.0 - ray.direction.z) * weight;
                break;
            }

            let h = ray.at(hit.t);
            let l = normalized(self.env.light + Vec3::new(gen_f32(rng), gen_f32(rng), 0.0) - h);

            // Diffuse factor, zeroed when facing away from the light or in
            // shadow. The probe is skipped entirely for back faces.
            let mut b = l.dot(hit.normal);
            if b < 0.0 || self.trace(&Ray::new(h, l)).surface != Surface::Sky {
                b = 0.0;
            }

            if hit.surface == Surface::Floor {
                let tile = h * 0.2;
                let parity = (tile.x.ceil() + tile.y.ceil()) as i32 & 1;
                let floor = if parity == 1 {
                    self.env.floor_odd
                } else {
                    self.env.floor_even
                };
                color += floor * (b * 0.2 + 0.1) * weight;
                break;
            }

            let r = reflect(ray.direction, hit.normal);
            let glint = if b > 0.0 { l.dot(r) } else { 0.0 };
            let p = pow33(glint);
            color += Color::new(p, p, p) * weight;

            weight *= 0.5;
            ray = Ray::new(h, r);
        }

        color
    }
}

/// Reflect `d` off a surface with normal `n`.
#[inline]
pub fn reflect(d: Vec3, n: Vec3) -> Vec3 {
    d - n * (2.0 * n.dot(d))
}

/// x^33 by repeated squaring.
#[inline]
fn pow33(x: f32) -> f32 {
    let x2 = x * x;
    let x4 = x2 * x2;
    let x8 = x4 * x4;
    let x16 = x8 * x8;
    let x32 = x16 * x16;
    x32 * x
}
