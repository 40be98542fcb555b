//! Parallel frame rendering.
//!
//! Image rows are dealt round-robin to a fixed pool of workers; each worker
//! owns its rows outright and accumulates jittered samples per pixel, so
//! the only synchronization is the join at the end of the pass.

use glint_core::Scene;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::tracer::{Environment, Tracer};
use crate::{Camera, Color, Frame};

/// Base color every pixel starts from before samples accumulate.
const AMBIENT: Color = Color::new(13.0, 13.0, 13.0);

/// Weight of each sample added on top of the ambient base.
const SAMPLE_GAIN: f32 = 3.5;

/// Errors that can occur while rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("thread count must be at least 1")]
    NoThreads,

    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Stochastic samples per pixel
    pub samples_per_pixel: u32,
    /// Cap on mirror reflections per sample
    pub max_bounces: u32,
    /// Worker thread count
    pub threads: usize,
    /// Base seed for the per-worker generators; None draws from entropy
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            samples_per_pixel: 64,
            max_bounces: 50,
            threads: num_cpus::get(),
            seed: None,
        }
    }
}

/// Which worker owns image row `y`.
#[inline]
fn stripe_of(y: u32, threads: usize) -> usize {
    y as usize % threads
}

/// Render `scene` through `camera` into a fresh frame.
///
/// Worker `w` renders every image row `y` with `y % threads == w`, writing
/// into the buffer bottom-up (image row 0 lands in the last buffer row).
/// Each worker seeds its own generator from the base seed plus its index,
/// so a fixed seed and thread count reproduce a frame byte for byte.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    env: &Environment,
    config: &RenderConfig,
) -> RenderResult<Frame> {
    if config.threads == 0 {
        return Err(RenderError::NoThreads);
    }

    let mut frame = Frame::new(config.width, config.height);
    if config.width == 0 || config.height == 0 {
        return Ok(frame);
    }

    let tracer = Tracer::new(scene.offsets(), env, config.max_bounces);
    let base_seed = config.seed.unwrap_or_else(rand::random);
    log::debug!(
        "render pass: {}x{}, {} sample(s)/px, {} worker(s), base seed {:#018x}",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.threads,
        base_seed
    );

    let height = config.height;
    let mut stripes: Vec<Vec<(u32, &mut [u8])>> =
        (0..config.threads).map(|_| Vec::new()).collect();
    for (buffer_row, row) in frame.rows_mut().enumerate() {
        let y = height - 1 - buffer_row as u32;
        stripes[stripe_of(y, config.threads)].push((y, row));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    // One task per worker; the scope is the join barrier, and a panicking
    // worker aborts the whole pass when the scope unwinds.
    pool.in_place_scope(|scope| {
        for (worker, stripe) in stripes.into_iter().enumerate() {
            let seed = base_seed.wrapping_add(worker as u64);
            let tracer = &tracer;
            scope.spawn(move |_| {
                let mut rng = StdRng::seed_from_u64(seed);
                for (y, row) in stripe {
                    render_row(tracer, camera, config, y, row, &mut rng);
                }
            });
        }
    });

    Ok(frame)
}

/// Render one image row into its buffer slice.
fn render_row(
    tracer: &Tracer,
    camera: &Camera,
    config: &RenderConfig,
    y: u32,
    row: &mut [u8],
    rng: &mut StdRng,
) {
    // x runs high to low while bytes fill left to right, so the frame comes
    // out mirrored horizontally.
    for (pixel, x) in row.chunks_exact_mut(3).zip((0..config.width).rev()) {
        let mut p = AMBIENT;
        for _ in 0..config.samples_per_pixel {
            let ray = camera.primary_ray(x, y, rng);
            p += tracer.sample(ray, rng) * SAMPLE_GAIN;
        }

        // Truncating, saturating cast: fractions drop, overshoot pins at
        // 255, and negatives pin at 0.
        pixel[0] = p.x as u8;
        pixel[1] = p.y as u8;
        pixel[2] = p.z as u8;
    }
}
