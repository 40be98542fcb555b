//! Image buffer and PPM output.

use std::io::{self, Write};

/// An 8-bit RGB image buffer, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// Create a frame filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; 3 * width as usize * height as usize],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGB bytes, three per pixel.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view of the rows, each `3 * width` bytes, top row first.
    ///
    /// Must not be called on a zero-width frame.
    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, u8> {
        self.data.chunks_mut(3 * self.width as usize)
    }

    /// Write the frame as a binary PPM image.
    pub fn write_ppm<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "P6\n{} {}\n255\n", self.width, self.height)?;
        w.write_all(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_dimensions() {
        let frame = Frame::new(4, 3);
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 3);
        assert_eq!(frame.data().len(), 36);
    }

    #[test]
    fn test_rows() {
        let mut frame = Frame::new(4, 3);
        let rows: Vec<_> = frame.rows_mut().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 12));
    }

    #[test]
    fn test_ppm_output() {
        let frame = Frame::new(2, 3);
        let mut out = Vec::new();
        frame.write_ppm(&mut out).unwrap();

        assert!(out.starts_with(b"P6\n2 3\n255\n"));
        assert_eq!(out.len(), b"P6\n2 3\n255\n".len() + 18);
    }
}
