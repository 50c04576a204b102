use glam::Vec3;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z]
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// 6 floats per vertex: position(3) + normal(3)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 6
    }

    /// Interleave positions and normals into the renderer layout
    pub fn from_parts(positions: &[[f32; 3]], normals: &[[f32; 3]], indices: Vec<u32>) -> Self {
        let mut vertices = Vec::with_capacity(positions.len() * 6);
        for (p, n) in positions.iter().zip(normals) {
            vertices.extend_from_slice(&[p[0], p[1], p[2], n[0], n[1], n[2]]);
        }
        Self { vertices, indices }
    }
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Compute the bounds of one mesh (6 floats per vertex: pos+normal)
    pub fn from_mesh(data: &MeshData) -> Self {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);

        let verts = &data.vertices;
        let stride = 6;
        let count = verts.len() / stride;

        for i in 0..count {
            let base = i * stride;
            let x = verts[base];
            let y = verts[base + 1];
            let z = verts[base + 2];
            min.x = min.x.min(x);
            min.y = min.y.min(y);
            min.z = min.z.min(z);
            max.x = max.x.max(x);
            max.y = max.y.max(y);
            max.z = max.z.max(z);
        }

        Self { min, max }
    }

    /// Combined bounds of all meshes; None when there are no vertices
    pub fn from_meshes(meshes: &[MeshData]) -> Option<Self> {
        let mut result: Option<Aabb> = None;
        for mesh in meshes {
            if mesh.vertex_count() == 0 {
                continue;
            }
            let aabb = Aabb::from_mesh(mesh);
            result = Some(match result {
                Some(acc) => Aabb {
                    min: acc.min.min(aabb.min),
                    max: acc.max.max(aabb.max),
                },
                None => aabb,
            });
        }
        result
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Radius of the bounding sphere around the center
    pub fn radius(&self) -> f32 {
        (self.max - self.min).length() * 0.5
    }
}

/// Smooth per-vertex normals for an indexed triangle list: accumulate the
/// face normal of every incident triangle, then normalize.
pub fn compute_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        if i0 >= positions.len() || i1 >= positions.len() || i2 >= positions.len() {
            continue;
        }
        let p0 = Vec3::from(positions[i0]);
        let p1 = Vec3::from(positions[i1]);
        let p2 = Vec3::from(positions[i2]);
        let face = (p1 - p0).cross(p2 - p0);
        normals[i0] += face;
        normals[i1] += face;
        normals[i2] += face;
    }

    normals
        .into_iter()
        .map(|n| {
            let n = n.normalize_or_zero();
            [n.x, n.y, n.z]
        })
        .collect()
}

// ── Floor grid ───────────────────────────────────────────────

/// Ground-plane grid under the model, faint lines with a slightly
/// stronger pair through the origin.
pub fn grid(range: i32, cell_size: f32, opacity: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let grid_color = [0.78_f32, 0.78, 0.80, opacity];
    let origin_color = [0.62_f32, 0.62, 0.66, opacity];

    let extent = range as f32 * cell_size;

    for i in -range..=range {
        let f = i as f32 * cell_size;
        let color = if i == 0 { origin_color } else { grid_color };
        // Line along Z
        push_line_vert(&mut vertices, f, 0.0, -extent, color);
        push_line_vert(&mut vertices, f, 0.0, extent, color);
        // Line along X
        push_line_vert(&mut vertices, -extent, 0.0, f, color);
        push_line_vert(&mut vertices, extent, 0.0, f, color);
    }

    LineMeshData { vertices }
}

fn push_line_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, c: [f32; 4]) {
    v.extend_from_slice(&[px, py, pz, c[0], c[1], c[2], c[3]]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> MeshData {
        let positions = [
            [0.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [2.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ];
        let normals = [[0.0, 0.0, 1.0]; 4];
        MeshData::from_parts(&positions, &normals, vec![0, 1, 2, 0, 2, 3])
    }

    #[test]
    fn test_from_parts_interleaves() {
        let mesh = quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(&mesh.vertices[0..6], &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(&mesh.vertices[6..9], &[2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_aabb_from_mesh() {
        let aabb = Aabb::from_mesh(&quad());
        assert_eq!(aabb.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(aabb.center(), Vec3::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn test_aabb_from_meshes_combines() {
        let mut far = quad();
        for i in 0..far.vertex_count() {
            far.vertices[i * 6] += 10.0;
        }
        let aabb = Aabb::from_meshes(&[quad(), far]).unwrap();
        assert_eq!(aabb.min.x, 0.0);
        assert_eq!(aabb.max.x, 12.0);

        assert!(Aabb::from_meshes(&[]).is_none());
    }

    #[test]
    fn test_compute_normals_flat_quad() {
        let positions = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ];
        let normals = compute_normals(&positions, &[0, 1, 2, 0, 2, 3]);
        for n in &normals {
            // counter-clockwise in the XY plane faces +Z
            assert!((n[2] - 1.0).abs() < 1e-6, "normal {:?}", n);
        }
    }

    #[test]
    fn test_compute_normals_ignores_out_of_range_indices() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let normals = compute_normals(&positions, &[0, 1, 99]);
        assert_eq!(normals.len(), 3);
        // the bad triangle contributes nothing
        assert_eq!(normals[0], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_grid_line_count() {
        let lines = grid(2, 1.0, 0.5);
        // (2*range+1) positions × 2 directions × 2 endpoints × 7 floats
        assert_eq!(lines.vertices.len(), 5 * 2 * 2 * 7);
    }
}
