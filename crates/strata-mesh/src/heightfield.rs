//! Heightfield to triangle mesh conversion.
//!
//! Vertices are laid out x-major: vertex `(x, y)` lives at linear index
//! `x * height + y`. Triangulation and normal generation both rely on that
//! layout, so it is the only place the index is computed.

use crate::buffers::MeshBuffers;
use crate::normals::flat_normals;

/// A rectangular grid of sample heights.
pub trait Heightfield {
    /// Sample count along X.
    fn width(&self) -> usize;
    /// Sample count along Y.
    fn height(&self) -> usize;
    /// Height at `(x, y)`. Callers stay within `width() × height()`.
    fn height_at(&self, x: usize, y: usize) -> f32;
}

/// Linear vertex index of grid point `(x, y)` in a grid `height` samples tall.
///
/// # Panics
///
/// Panics if the index does not fit the `u32` index buffer, i.e. the grid has
/// more than `u32::MAX` vertices.
#[inline]
pub fn vertex_index(x: usize, y: usize, height: usize) -> u32 {
    u32::try_from(x * height + y).expect("vertex index exceeds u32 index buffer range")
}

/// Texture coordinate of grid point `(x, y)`.
///
/// An axis with a single sample maps to `0` instead of dividing by zero.
#[inline]
pub fn grid_uv(x: usize, y: usize, width: usize, height: usize) -> [f32; 2] {
    let axis = |i: usize, n: usize| {
        if n > 1 {
            i as f32 / (n - 1) as f32
        } else {
            0.0
        }
    };
    [axis(x, width), axis(y, height)]
}

/// Index list for a `width × height` vertex grid, two triangles per cell.
///
/// Each cell emits `(bottom_left, top_left, top_right)` followed by
/// `(bottom_left, top_right, bottom_right)`. Grids narrower than two samples
/// on either axis have no cells and produce an empty list.
pub fn triangulate_grid(width: usize, height: usize) -> Vec<u32> {
    let cells_x = width.saturating_sub(1);
    let cells_y = height.saturating_sub(1);
    let mut indices = Vec::with_capacity(6 * cells_x * cells_y);

    for x in 0..cells_x {
        for y in 0..cells_y {
            let bottom_left = vertex_index(x, y, height);
            let bottom_right = vertex_index(x + 1, y, height);
            let top_left = vertex_index(x, y + 1, height);
            let top_right = vertex_index(x + 1, y + 1, height);

            indices.extend_from_slice(&[
                bottom_left,
                top_left,
                top_right,
                bottom_left,
                top_right,
                bottom_right,
            ]);
        }
    }

    indices
}

/// Build flat-shaded mesh buffers from a heightfield.
///
/// Vertex `(x, y)` is placed at `(x * scale, y * scale, h(x, y) * depth)`.
pub fn build_mesh(field: &impl Heightfield, scale: f32, depth: f32) -> MeshBuffers {
    let width = field.width();
    let height = field.height();
    let mut mesh = MeshBuffers::with_grid_capacity(width, height);

    for x in 0..width {
        for y in 0..height {
            let z = field.height_at(x, y) * depth;
            mesh.positions
                .push([x as f32 * scale, y as f32 * scale, z]);
            mesh.uvs.push(grid_uv(x, y, width, height));
        }
    }

    mesh.indices = triangulate_grid(width, height);
    mesh.normals = flat_normals(&mesh.positions, &mesh.indices);

    tracing::debug!(
        "Meshed {width}x{height} heightfield: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    mesh
}
