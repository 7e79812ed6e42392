//! Parallel vertex/index/normal/UV buffers produced by heightfield meshing.

/// Ways in which a [`MeshBuffers`] can violate its positional correspondence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshConsistencyError {
    /// UV count differs from vertex count.
    #[error("{uvs} UVs for {vertices} vertices")]
    UvCountMismatch { vertices: usize, uvs: usize },

    /// Index list is not a whole number of triangles.
    #[error("index count {0} is not a multiple of 3")]
    PartialTriangle(usize),

    /// Normal count differs from index count.
    #[error("{normals} normals for {indices} indices")]
    NormalCountMismatch { indices: usize, normals: usize },

    /// An index points past the end of the vertex buffer.
    #[error("index {index} at position {position} exceeds vertex count {vertices}")]
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertices: usize,
    },
}

/// Mesh output of a heightfield build.
///
/// `positions[i]` and `uvs[i]` describe vertex `i`. `normals[k]` belongs to the
/// triangle corner `indices[k]`: every triangle's flat normal is stored three
/// times, so the normal list is as long as the index list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions, `x*height + y` ordered.
    pub positions: Vec<[f32; 3]>,
    /// Texture coordinates in `[0, 1]`, one per vertex.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle list, three indices per triangle.
    pub indices: Vec<u32>,
    /// Flat normals, one per index entry.
    pub normals: Vec<[f32; 3]>,
}

impl MeshBuffers {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates empty buffers sized for a `width × height` vertex grid.
    pub fn with_grid_capacity(width: usize, height: usize) -> Self {
        let vertices = width * height;
        let indices = 6 * width.saturating_sub(1) * height.saturating_sub(1);
        Self {
            positions: Vec::with_capacity(vertices),
            uvs: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
            normals: Vec::with_capacity(indices),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` if the mesh has no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check that the four buffers agree with each other.
    pub fn validate(&self) -> Result<(), MeshConsistencyError> {
        let vertices = self.positions.len();
        if self.uvs.len() != vertices {
            return Err(MeshConsistencyError::UvCountMismatch {
                vertices,
                uvs: self.uvs.len(),
            });
        }
        if self.indices.len() % 3 != 0 {
            return Err(MeshConsistencyError::PartialTriangle(self.indices.len()));
        }
        if self.normals.len() != self.indices.len() {
            return Err(MeshConsistencyError::NormalCountMismatch {
                indices: self.indices.len(),
                normals: self.normals.len(),
            });
        }
        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &i)| i as usize >= vertices)
        {
            return Err(MeshConsistencyError::IndexOutOfRange {
                position,
                index,
                vertices,
            });
        }
        Ok(())
    }

    /// Vertex positions as raw bytes for GPU upload.
    pub fn positions_as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Index buffer as raw bytes for GPU upload.
    pub fn indices_as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
