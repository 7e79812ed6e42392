use proptest::prelude::*;
use strata_mesh::{Heightfield, build_mesh, vertex_index};

#[derive(Debug)]
struct VecField {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl Heightfield for VecField {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn height_at(&self, x: usize, y: usize) -> f32 {
        self.data[x * self.height + y]
    }
}

fn arb_field() -> impl Strategy<Value = VecField> {
    (0usize..20, 0usize..20).prop_flat_map(|(width, height)| {
        prop::collection::vec(-1000.0f32..1000.0, width * height).prop_map(move |data| VecField {
            width,
            height,
            data,
        })
    })
}

fn arb_scale() -> impl Strategy<Value = f32> {
    prop_oneof![Just(0.0f32), 0.01f32..50.0]
}

proptest! {
    #[test]
    fn prop_buffer_lengths(field in arb_field(), scale in 0.0f32..50.0, depth in -100.0f32..100.0) {
        let mesh = build_mesh(&field, scale, depth);
        let cells = field.width.saturating_sub(1) * field.height.saturating_sub(1);
        prop_assert_eq!(mesh.vertex_count(), field.width * field.height);
        prop_assert_eq!(mesh.uvs.len(), mesh.vertex_count());
        prop_assert_eq!(mesh.indices.len(), 6 * cells);
        prop_assert_eq!(mesh.normals.len(), mesh.indices.len());
    }

    #[test]
    fn prop_indices_in_range(field in arb_field()) {
        let mesh = build_mesh(&field, 1.0, 1.0);
        let n = (field.width * field.height) as u32;
        prop_assert!(mesh.indices.iter().all(|&i| i < n));
        prop_assert!(mesh.validate().is_ok());
    }

    #[test]
    fn prop_normals_unit_or_zero(field in arb_field(), scale in arb_scale()) {
        let mesh = build_mesh(&field, scale, 1.0);
        for n in &mesh.normals {
            prop_assert!(n.iter().all(|c| c.is_finite()));
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            prop_assert!(len == 0.0 || (len - 1.0).abs() < 1e-4, "normal length {}", len);
        }
    }

    #[test]
    fn prop_uvs_in_unit_square(field in arb_field()) {
        let mesh = build_mesh(&field, 1.0, 1.0);
        for uv in &mesh.uvs {
            prop_assert!((0.0..=1.0).contains(&uv[0]) && (0.0..=1.0).contains(&uv[1]));
        }
    }

    #[test]
    fn prop_vertex_height_matches_field(field in arb_field(), depth in -10.0f32..10.0) {
        let mesh = build_mesh(&field, 1.0, depth);
        for x in 0..field.width {
            for y in 0..field.height {
                let v = mesh.positions[vertex_index(x, y, field.height) as usize];
                prop_assert_eq!(v[2], field.height_at(x, y) * depth);
            }
        }
    }
}
