//! Flat (per-triangle) normals.

use glam::Vec3;

/// Unit normal of the triangle `(a, b, c)`: `normalize(cross(b - a, c - a))`.
///
/// Degenerate triangles (collinear or coincident corners) yield the zero
/// vector rather than NaN.
#[inline]
pub fn triangle_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

/// Compute one normal per index entry, replicating each triangle's normal
/// across its three corners.
///
/// A trailing partial triangle is ignored. Indices must be in range for
/// `positions`.
pub fn flat_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut normals = Vec::with_capacity(indices.len());
    for tri in indices.chunks_exact(3) {
        let v0 = Vec3::from(positions[tri[0] as usize]);
        let v1 = Vec3::from(positions[tri[1] as usize]);
        let v2 = Vec3::from(positions[tri[2] as usize]);
        let n = triangle_normal(v0, v1, v2).to_array();
        normals.extend_from_slice(&[n, n, n]);
    }
    normals
}
