//! Glint renderer - stochastic CPU ray tracing.
//!
//! A stochastic ray tracer for scenes of unit spheres floating over an
//! infinite checkered floor. Depth of field and soft shadows fall out of
//! jittered sampling; sphere surfaces carry a specular glint and a mirror
//! bounce and nothing else.

mod camera;
mod frame;
mod renderer;
mod tracer;

pub use camera::Camera;
pub use frame::Frame;
pub use renderer::{render, RenderConfig, RenderError, RenderResult};
pub use tracer::{reflect, Environment, Hit, Surface, Tracer};

/// Re-export common math types from glint_math
pub use glint_math::{normalized, Ray, Vec3};

/// Colors are plain vectors: one channel per component.
pub type Color = Vec3;

use rand::{Rng, RngCore};

/// Draw a uniform random float in [0, 1).
#[inline]
pub(crate) fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}
