//! Heightmap renderer.

use super::image::DebugImage;
use crate::grid::ScalarGrid;

/// Map `value` into `[0, 1]` over `range`. A flat or empty range maps to `0.5`;
/// NaN stays NaN.
pub fn normalize_height(value: f32, range: Option<(f32, f32)>) -> f32 {
    match range {
        Some((lo, hi)) if hi > lo && (hi - lo).is_finite() => {
            ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
        }
        _ if value.is_nan() => f32::NAN,
        _ => 0.5,
    }
}

/// Map a normalized height `[0, 1]` to an RGB color.
///
/// Color bands: deep water → shallow water → beach → lowlands → mountains →
/// snow. NaN renders magenta so broken cells stand out.
pub fn height_to_color(normalized: f32) -> (u8, u8, u8) {
    if normalized.is_nan() {
        return (255, 0, 255);
    }

    if normalized < 0.2 {
        // Deep water: dark blue
        (0, 0, 128)
    } else if normalized < 0.35 {
        // Shallow water: blue
        (30, 80, 200)
    } else if normalized < 0.38 {
        // Beach: sandy yellow
        (220, 200, 130)
    } else if normalized < 0.6 {
        // Lowlands: green
        let t = (normalized - 0.38) / 0.22;
        (
            (30.0 + t * 80.0) as u8,
            (160.0 - t * 40.0) as u8,
            (30.0 + t * 20.0) as u8,
        )
    } else if normalized < 0.8 {
        // Mountains: brown
        let t = (normalized - 0.6) / 0.2;
        (
            (110.0 + t * 40.0) as u8,
            (120.0 - t * 50.0) as u8,
            (50.0 + t * 20.0) as u8,
        )
    } else {
        // Snow peaks: white
        let t = ((normalized - 0.8) / 0.2).min(1.0);
        let base = 150.0 + t * 105.0;
        (base as u8, base as u8, base as u8)
    }
}

/// Render a heightmap one pixel per cell, normalized over the grid's own
/// min/max. Pixel `(x, y)` shows `grid[x][y]`.
pub fn render_heightmap_debug(grid: &ScalarGrid) -> DebugImage {
    let (width, height) = grid.dimensions();
    let mut image = DebugImage::new(width as u32, height as u32);
    let range = grid.min_max();

    for x in 0..width {
        for y in 0..height {
            let (r, g, b) = height_to_color(normalize_height(grid.get(x, y), range));
            image.set_pixel(x as u32, y as u32, r, g, b, 255);
        }
    }

    image
}
