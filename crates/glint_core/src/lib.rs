//! Glint core - art rasters and sphere scenes.
//!
//! This crate provides:
//!
//! - **Art rasters**: [`Art`], a 2D character grid where every non-blank
//!   cell marks one unit sphere
//! - **Scene**: [`Scene`], the ordered sphere offsets handed to the renderer
//!
//! # Example
//!
//! ```
//! use glint_core::Art;
//!
//! let scene = Art::parse("1 1\n 1").scene();
//! assert_eq!(scene.sphere_count(), 3);
//! ```

pub mod art;
pub mod scene;

// Re-export commonly used types
pub use art::{Art, ArtError, ArtResult};
pub use scene::Scene;
