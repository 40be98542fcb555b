//! Art rasters.
//!
//! An [`Art`] is a 2D character grid read top row first. Every non-blank
//! cell places one unit sphere; blank cells are empty space. The raster is
//! purely positional, so any visible character works equally well as ink.

use std::fs;
use std::path::{Path, PathBuf};

use glint_math::Vec3;
use thiserror::Error;

use crate::scene::Scene;

/// A small sparkle, rendered when no art file is given.
const DEFAULT_ART: &str = "     1
     1
  1  1  1
   11111
11111111111
   11111
  1  1  1
     1
     1";

/// Errors that can occur while reading art.
#[derive(Error, Debug)]
pub enum ArtError {
    #[error("failed to read art from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for art operations.
pub type ArtResult<T> = Result<T, ArtError>;

/// A character raster describing where spheres sit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Art {
    rows: Vec<String>,
}

impl Art {
    /// Parse a raster from text, one row per line, top row first.
    ///
    /// Any text is valid art; a raster with no visible characters simply
    /// yields an empty scene.
    pub fn parse(text: &str) -> Self {
        Self {
            rows: text.lines().map(str::to_owned).collect(),
        }
    }

    /// Read a raster from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> ArtResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ArtError::Io {
            path: path.to_owned(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Number of rows in the raster.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Scan the raster into a [`Scene`].
    ///
    /// A non-blank cell at row `j` (top first), column `k` becomes the
    /// sphere offset `(k, 6.5, -(rows - j) - 1)`: the translation the
    /// tracer adds to a ray origin to move it into that sphere's local
    /// frame. Offsets come out in row-major scan order.
    pub fn scene(&self) -> Scene {
        let rows = self.rows.len();
        let mut offsets = Vec::new();
        for (j, row) in self.rows.iter().enumerate() {
            for (k, cell) in row.chars().enumerate() {
                if cell != ' ' {
                    offsets.push(Vec3::new(k as f32, 6.5, -((rows - j) as f32) - 1.0));
                }
            }
        }
        log::debug!(
            "art raster of {} row(s) produced {} sphere(s)",
            rows,
            offsets.len()
        );
        Scene::new(offsets)
    }
}

impl Default for Art {
    fn default() -> Self {
        Self::parse(DEFAULT_ART)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_rows_in_order() {
        let art = Art::parse("ab\n cd\n");
        assert_eq!(art.row_count(), 2);
    }

    #[test]
    fn test_scene_offsets() {
        let art = Art::parse("1\n 1");
        let scene = art.scene();

        // Two rows: top cell sits one unit further from the floor plane.
        assert_eq!(
            scene.offsets(),
            &[Vec3::new(0.0, 6.5, -3.0), Vec3::new(1.0, 6.5, -2.0)]
        );
    }

    #[test]
    fn test_any_visible_character_is_ink() {
        let scene = Art::parse("*x9").scene();
        assert_eq!(scene.sphere_count(), 3);
    }

    #[test]
    fn test_blank_art_yields_empty_scene() {
        let scene = Art::parse("   \n\n  ").scene();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_default_art() {
        let scene = Art::default().scene();
        assert_eq!(scene.sphere_count(), 31);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Art::from_path("/definitely/not/here.txt").unwrap_err();
        let ArtError::Io { path, .. } = err;
        assert_eq!(path, PathBuf::from("/definitely/not/here.txt"));
    }
}
