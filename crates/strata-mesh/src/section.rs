//! Mesh sections: the hand-off point between the generator and whatever
//! uploads, renders, or derives collision from the mesh.

use std::collections::HashMap;

use crate::buffers::MeshBuffers;

/// Per-vertex tangent frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshTangent {
    /// Tangent direction.
    pub tangent: [f32; 3],
    /// Whether the bitangent is flipped.
    pub flip_bitangent: bool,
}

/// A complete mesh section as handed to a [`MeshSectionSink`].
#[derive(Clone, Debug, PartialEq)]
pub struct MeshSection {
    /// Vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Triangle list.
    pub indices: Vec<u32>,
    /// One normal per index entry.
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates, one per vertex.
    pub uvs: Vec<[f32; 2]>,
    /// Per-vertex RGBA colours. Terrain leaves this empty.
    pub colors: Vec<[u8; 4]>,
    /// Per-vertex tangents. Terrain leaves this empty.
    pub tangents: Vec<MeshTangent>,
    /// Whether the consumer should derive collision geometry.
    pub enable_collision: bool,
}

impl MeshSection {
    /// Wrap terrain buffers: no colours, no tangents, collision enabled.
    pub fn from_buffers(buffers: MeshBuffers) -> Self {
        let MeshBuffers {
            positions,
            uvs,
            indices,
            normals,
        } = buffers;
        Self {
            positions,
            indices,
            normals,
            uvs,
            colors: Vec::new(),
            tangents: Vec::new(),
            enable_collision: true,
        }
    }
}

/// Receiver of finished mesh sections, keyed by section index.
pub trait MeshSectionSink {
    /// Take ownership of a section, replacing any previous one at `index`.
    fn create_mesh_section(&mut self, index: u32, section: MeshSection);

    /// Bind a material reference to the section at `index`.
    fn set_material(&mut self, index: u32, material: &str);
}

/// In-memory [`MeshSectionSink`] that simply keeps what it is given.
#[derive(Debug, Default)]
pub struct MeshSectionStore {
    sections: HashMap<u32, MeshSection>,
    materials: HashMap<u32, String>,
}

impl MeshSectionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Section stored at `index`, if any.
    pub fn section(&self, index: u32) -> Option<&MeshSection> {
        self.sections.get(&index)
    }

    /// Material bound to `index`, if any.
    pub fn material(&self, index: u32) -> Option<&str> {
        self.materials.get(&index).map(String::as_str)
    }

    /// Number of stored sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Remove and return the section at `index`.
    pub fn take_section(&mut self, index: u32) -> Option<MeshSection> {
        self.sections.remove(&index)
    }
}

impl MeshSectionSink for MeshSectionStore {
    fn create_mesh_section(&mut self, index: u32, section: MeshSection) {
        self.sections.insert(index, section);
    }

    fn set_material(&mut self, index: u32, material: &str) {
        self.materials.insert(index, material.to_string());
    }
}
