use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use glint_core::Art;
use glint_math::Vec3;
use glint_render::{render, Camera, Environment, RenderConfig};

mod report;
mod sink;

use report::Timings;

/// Where the eye sits.
const EYE: Vec3 = Vec3::new(-5.0, 16.0, 8.0);

/// Where the eye looks.
const GAZE: Vec3 = Vec3::new(-3.1, -16.0, 1.9);

/// Render a sphere-art scene and benchmark the passes.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Megapixels of the rendered image
    #[arg(short, long, default_value_t = 1.0)]
    megapixels: f64,

    /// Times to repeat the benchmark
    #[arg(short, long, default_value_t = 1)]
    times: u32,

    /// Number of render workers
    #[arg(short = 'p', long, default_value_t = num_cpus::get())]
    threads: usize,

    /// Stochastic samples per pixel
    #[arg(long, default_value_t = 64)]
    samples: u32,

    /// Base seed for reproducible renders
    #[arg(long)]
    seed: Option<u64>,

    /// Art file to render; the built-in sparkle when omitted
    #[arg(short, long)]
    art: Option<PathBuf>,

    /// Output image (.png by extension, binary PPM otherwise)
    #[arg(short, long, default_value = "render.ppm")]
    output: PathBuf,

    /// Benchmark report file
    #[arg(short, long, default_value = "result.json")]
    report: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    if args.threads == 0 {
        bail!("threads ({}) needs to be >= 1", args.threads);
    }

    let art = match &args.art {
        Some(path) => Art::from_path(path)?,
        None => Art::default(),
    };
    let scene = art.scene();
    log::info!("Scene holds {} sphere(s)", scene.sphere_count());

    let size = (args.megapixels * 1_000_000.0).sqrt() as u32;
    let config = RenderConfig {
        width: size,
        height: size,
        samples_per_pixel: args.samples,
        threads: args.threads,
        seed: args.seed,
        ..RenderConfig::default()
    };
    let camera = Camera::new(EYE, GAZE, size);
    let env = Environment::default();

    log::info!("Will render {} time(s)", args.times);

    let mut timings = Timings::default();
    let mut frame = None;
    for pass in 1..=args.times {
        log::info!(
            "Starting render #{pass} of size {} MP ({size}x{size}) with {} worker(s)",
            args.megapixels,
            args.threads
        );

        let start = Instant::now();
        let rendered = render(&scene, &camera, &env, &config)?;
        let duration = start.elapsed().as_secs_f64();

        log::info!("Time taken for render {duration:.3}s");
        timings.push(duration);
        frame = Some(rendered);
    }

    log::info!("Average time {:.3}s", timings.average());
    timings
        .save(&args.report)
        .with_context(|| format!("failed to write report to {}", args.report.display()))?;

    if let Some(frame) = frame {
        sink::save(&frame, &args.output)
            .with_context(|| format!("failed to save image to {}", args.output.display()))?;
    }

    Ok(())
}
