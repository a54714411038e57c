use glam::Vec3;

/// GPU-ready vertex: position then normal, 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed triangle mesh. Triangles wind counter-clockwise when viewed
/// from outside; normals are derived from the faces, one per vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub normals: Vec<Vec3>,
}

impl Mesh {
    /// Build a mesh and compute its vertex normals.
    pub fn from_triangles(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        debug_assert!(indices.len() % 3 == 0, "index count must be a multiple of 3");
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < positions.len()),
            "index out of range"
        );
        let normals = compute_vertex_normals(&positions, &indices);
        Self {
            positions,
            indices,
            normals,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Corner positions of triangle `tri`.
    pub fn triangle(&self, tri: usize) -> [Vec3; 3] {
        let i = tri * 3;
        [
            self.positions[self.indices[i] as usize],
            self.positions[self.indices[i + 1] as usize],
            self.positions[self.indices[i + 2] as usize],
        ]
    }

    /// Unit normal of triangle `tri` following its winding.
    pub fn face_normal(&self, tri: usize) -> Vec3 {
        let [a, b, c] = self.triangle(tri);
        (b - a).cross(c - a).normalize_or_zero()
    }

    /// Interleave positions and normals for upload.
    pub fn to_gpu_vertices(&self) -> Vec<GpuVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(p, n)| GpuVertex {
                position: p.to_array(),
                normal: n.to_array(),
            })
            .collect()
    }
}

/// Per-vertex normals: sum of the unnormalized (area-weighted) normals of
/// every triangle touching the vertex, then normalized.
pub fn compute_vertex_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut accum = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let (a, b, c) = (positions[ia], positions[ib], positions[ic]);
        let n = (b - a).cross(c - a);
        accum[ia] += n;
        accum[ib] += n;
        accum[ic] += n;
    }
    accum.into_iter().map(Vec3::normalize_or_zero).collect()
}
