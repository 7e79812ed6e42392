//! Heightmap debug visualization: colour-banded 2D previews of a
//! [`ScalarGrid`](crate::ScalarGrid), exportable as PNG.

mod image;
mod renderers;

pub use self::image::{DebugImage, ImageExportError};
pub use renderers::{height_to_color, normalize_height, render_heightmap_debug};
