//! Heightfield meshing: grid triangulation, flat normals, and the mesh-section
//! boundary through which finished meshes leave the generator.

pub mod buffers;
pub mod heightfield;
pub mod normals;
pub mod section;

pub use buffers::{MeshBuffers, MeshConsistencyError};
pub use heightfield::{Heightfield, build_mesh, grid_uv, triangulate_grid, vertex_index};
pub use normals::{flat_normals, triangle_normal};
pub use section::{MeshSection, MeshSectionSink, MeshSectionStore, MeshTangent};
