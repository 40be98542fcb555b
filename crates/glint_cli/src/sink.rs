//! Image file output.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Result;
use glint_render::Frame;

/// Save `frame` to `path`, encoding PNG when the extension says so and
/// binary PPM otherwise.
pub fn save(frame: &Frame, path: &Path) -> Result<()> {
    let is_png = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("png"));

    if is_png {
        image::save_buffer(
            path,
            frame.data(),
            frame.width(),
            frame.height(),
            image::ColorType::Rgb8,
        )?;
    } else {
        let file = File::create(path)?;
        let mut w = BufWriter::new(file);
        frame.write_ppm(&mut w)?;
    }

    log::info!("Saved {}", path.display());
    Ok(())
}
