//! Wavefront OBJ export of a terrain mesh section.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use strata_mesh::MeshSection;
use strata_terrain::debug_viz::ImageExportError;

/// Errors while writing build outputs.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Failed to create or write an output file.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to write the heightmap preview.
    #[error(transparent)]
    Image(#[from] ImageExportError),

    /// No mesh section was registered at the expected index.
    #[error("mesh section {0} was never created")]
    MissingSection(u32),
}

/// Write `section` as OBJ: one `v` and `vt` per vertex, one `vn` per
/// triangle, and `f v/vt/vn` faces with 1-based indices.
pub fn write_obj<W: Write>(section: &MeshSection, mut out: W) -> Result<(), ExportError> {
    writeln!(out, "# strata terrain")?;
    writeln!(
        out,
        "# {} vertices, {} triangles",
        section.positions.len(),
        section.indices.len() / 3
    )?;

    for [x, y, z] in &section.positions {
        writeln!(out, "v {x} {y} {z}")?;
    }
    for [u, v] in &section.uvs {
        writeln!(out, "vt {u} {v}")?;
    }
    // Normals are stored per index entry; the three of a triangle are equal.
    for [x, y, z] in section.normals.iter().step_by(3) {
        writeln!(out, "vn {x} {y} {z}")?;
    }

    for (face, tri) in section.indices.chunks_exact(3).enumerate() {
        let n = face + 1;
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        writeln!(out, "f {a}/{a}/{n} {b}/{b}/{n} {c}/{c}/{n}")?;
    }

    out.flush()?;
    Ok(())
}

/// Write `section` as OBJ to `path`.
pub fn export_obj(section: &MeshSection, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_obj(section, BufWriter::new(file))?;
    tracing::info!(
        "Exported {} triangles to {}",
        section.indices.len() / 3,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_mesh::{MeshBuffers, build_mesh};
    use strata_terrain::ScalarGrid;

    fn quad_section() -> MeshSection {
        let grid = ScalarGrid::from_fn(2, 2, |x, y| (x + y) as f32);
        MeshSection::from_buffers(build_mesh(&grid, 1.0, 1.0))
    }

    fn obj_text(section: &MeshSection) -> String {
        let mut bytes = Vec::new();
        write_obj(section, &mut bytes).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_obj_line_counts() {
        let text = obj_text(&quad_section());
        let count = |prefix: &str| text.lines().filter(|l| l.starts_with(prefix)).count();
        assert_eq!(count("v "), 4);
        assert_eq!(count("vt "), 4);
        assert_eq!(count("vn "), 2);
        assert_eq!(count("f "), 2);
    }

    #[test]
    fn test_obj_faces_are_one_based() {
        let section = quad_section();
        let text = obj_text(&section);
        let faces: Vec<&str> = text.lines().filter(|l| l.starts_with("f ")).collect();

        let [a, b, c] = [section.indices[0], section.indices[1], section.indices[2]];
        assert_eq!(
            faces[0],
            format!("f {0}/{0}/1 {1}/{1}/1 {2}/{2}/1", a + 1, b + 1, c + 1)
        );
        assert!(faces[1].ends_with("/2"), "second face: {}", faces[1]);
        assert!(!text.contains("/0 ") && !text.contains(" 0/"));
    }

    #[test]
    fn test_obj_vertex_positions() {
        let text = obj_text(&quad_section());
        let first = text.lines().find(|l| l.starts_with("v ")).unwrap();
        assert_eq!(first, "v 0 0 0");
        assert!(text.lines().any(|l| l == "v 1 1 2"));
    }

    #[test]
    fn test_empty_section_writes_header_only() {
        let section = MeshSection::from_buffers(MeshBuffers::new());
        let text = obj_text(&section);
        assert!(text.lines().all(|l| l.starts_with('#')));
    }

    #[test]
    fn test_export_obj_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terrain.obj");
        export_obj(&quad_section(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# strata terrain"));
    }

    #[test]
    fn test_export_obj_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("terrain.obj");
        let result = export_obj(&quad_section(), &path);
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
