//! Hand-authored geometry of the table: a thin slab on four box legs.
//!
//! Positions are in model space with the slab's underside at `y = 0` and the
//! floor at `y = -1`.

#[rustfmt::skip]
pub const TABLE_POSITIONS: [[f32; 3]; 40] = [
    // Tabletop
    [-2.0, 0.1,  2.0], // 0: front left top
    [-2.0, 0.1, -2.0], // 1: back left top
    [ 2.0, 0.1, -2.0], // 2: back right top
    [ 2.0, 0.1,  2.0], // 3: front right top
    [-2.0, 0.0,  2.0], // 4: front left bottom
    [-2.0, 0.0, -2.0], // 5: back left bottom
    [ 2.0, 0.0, -2.0], // 6: back right bottom
    [ 2.0, 0.0,  2.0], // 7: front right bottom

    // Front left leg
    [-1.4,  0.0, 1.4],
    [-1.4, -1.0, 1.4],
    [-1.2, -1.0, 1.4],
    [-1.2,  0.0, 1.4],
    [-1.4,  0.0, 1.6],
    [-1.4, -1.0, 1.6],
    [-1.2, -1.0, 1.6],
    [-1.2,  0.0, 1.6],

    // Front right leg
    [ 1.4,  0.0, 1.4],
    [ 1.4, -1.0, 1.4],
    [ 1.2, -1.0, 1.4],
    [ 1.2,  0.0, 1.4],
    [ 1.4,  0.0, 1.6],
    [ 1.4, -1.0, 1.6],
    [ 1.2, -1.0, 1.6],
    [ 1.2,  0.0, 1.6],

    // Back left leg
    [-1.4,  0.0, -1.4],
    [-1.4, -1.0, -1.4],
    [-1.2, -1.0, -1.4],
    [-1.2,  0.0, -1.4],
    [-1.4,  0.0, -1.6],
    [-1.4, -1.0, -1.6],
    [-1.2, -1.0, -1.6],
    [-1.2,  0.0, -1.6],

    // Back right leg
    [ 1.4,  0.0, -1.4],
    [ 1.4, -1.0, -1.4],
    [ 1.2, -1.0, -1.4],
    [ 1.2,  0.0, -1.4],
    [ 1.4,  0.0, -1.6],
    [ 1.4, -1.0, -1.6],
    [ 1.2, -1.0, -1.6],
    [ 1.2,  0.0, -1.6],
];

#[rustfmt::skip]
pub const TABLE_INDICES: [u16; 180] = [
    // Tabletop: top, bottom, left, right, front, back
    0, 1, 2, 0, 2, 3,
    4, 5, 6, 4, 6, 7,
    0, 1, 4, 0, 4, 5,
    3, 2, 6, 3, 6, 7,
    0, 3, 7, 0, 7, 4,
    1, 2, 6, 1, 6, 5,

    // Front left leg
    8, 9, 10, 8, 10, 11,
    12, 13, 14, 12, 14, 15,
    8, 9, 12, 12, 9, 13,
    11, 10, 14, 11, 14, 15,
    8, 11, 12, 11, 13, 12,
    9, 10, 14, 9, 14, 13,

    // Front right leg
    16, 17, 18, 16, 18, 19,
    20, 21, 22, 20, 22, 23,
    16, 17, 20, 16, 20, 21,
    19, 18, 22, 19, 22, 23,
    16, 19, 23, 16, 23, 20,
    17, 18, 22, 17, 22, 21,

    // Back left leg
    24, 25, 26, 24, 26, 27,
    28, 29, 30, 28, 30, 31,
    24, 25, 28, 24, 28, 29,
    27, 26, 30, 27, 30, 31,
    24, 27, 31, 24, 31, 28,
    25, 26, 30, 25, 30, 29,

    // Back right leg
    32, 33, 34, 32, 34, 35,
    36, 37, 38, 36, 38, 39,
    32, 33, 36, 32, 36, 37,
    35, 34, 38, 35, 38, 39,
    32, 35, 39, 32, 39, 36,
    33, 34, 38, 33, 38, 37,
];

/// Bottom left, top left, top right, bottom right.
pub const TEX_COORD_QUAD: [[f32; 2]; 4] = [
    [0.0, 0.0],
    [0.0, 1.0],
    [1.0, 1.0],
    [1.0, 0.0],
];

/// One copy of [`TEX_COORD_QUAD`] per cube face.
pub const TEX_COORD_REPEAT: usize = 6;

/// CPU-side copy of the table geometry, flattened the way the GPU buffers
/// want it. Built once and never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct TableMesh {
    positions: Vec<f32>,
    tex_coords: Vec<f32>,
    indices: Vec<u16>,
}

impl TableMesh {
    pub fn new() -> Self {
        let positions = TABLE_POSITIONS.iter().flatten().copied().collect();
        let tex_coords = TEX_COORD_QUAD
            .iter()
            .cycle()
            .take(TEX_COORD_QUAD.len() * TEX_COORD_REPEAT)
            .flatten()
            .copied()
            .collect();

        Self {
            positions,
            tex_coords,
            indices: TABLE_INDICES.to_vec(),
        }
    }

    /// `x, y, z` triples, one per vertex.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// The six-fold replicated UV table, `u, v` pairs.
    pub fn tex_coords(&self) -> &[f32] {
        &self.tex_coords
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// UV stream with one pair per vertex, as bound to the texture coordinate
    /// attribute. The six-fold table only covers the first 24 vertices, so it
    /// is continued with the same quad pattern up to the vertex count: vertex
    /// `i` samples quad corner `i % 4`.
    pub fn vertex_tex_coords(&self) -> Vec<f32> {
        self.tex_coords
            .chunks_exact(2)
            .cycle()
            .take(self.vertex_count())
            .flatten()
            .copied()
            .collect()
    }

    /// Axis-aligned `(min, max)` corners of the mesh.
    pub fn bounds(&self) -> ([f32; 3], [f32; 3]) {
        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];
        for vertex in self.positions.chunks_exact(3) {
            for axis in 0..3 {
                min[axis] = min[axis].min(vertex[axis]);
                max[axis] = max[axis].max(vertex[axis]);
            }
        }
        (min, max)
    }
}

impl Default for TableMesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_index_points_at_a_vertex() {
        let mesh = TableMesh::new();
        let vertex_count = mesh.vertex_count();
        assert_eq!(vertex_count, 40);
        for &index in mesh.indices() {
            assert!((index as usize) < vertex_count, "index {} out of range", index);
        }
    }

    #[test]
    fn indices_form_whole_triangles() {
        let mesh = TableMesh::new();
        assert_eq!(mesh.index_count() % 3, 0);
        assert_eq!(mesh.triangle_count() * 3, mesh.index_count());
        // slab plus four legs, twelve triangles per box
        assert_eq!(mesh.triangle_count(), 5 * 12);
    }

    #[test]
    fn uv_table_is_six_quads() {
        let mesh = TableMesh::new();
        let quad_len = TEX_COORD_QUAD.len() * 2;
        assert_eq!(mesh.tex_coords().len(), TEX_COORD_REPEAT * quad_len);
        for quad in mesh.tex_coords().chunks_exact(quad_len) {
            assert_eq!(quad, &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn vertex_uv_stream_covers_every_vertex() {
        let mesh = TableMesh::new();
        let stream = mesh.vertex_tex_coords();
        assert_eq!(stream.len(), mesh.vertex_count() * 2);
        assert_eq!(&stream[..mesh.tex_coords().len()], mesh.tex_coords());
        // vertex 39 is the last corner of a quad
        assert_eq!(&stream[78..80], &[1.0, 0.0]);
    }

    #[test]
    fn bounds_span_tabletop_and_legs() {
        let (min, max) = TableMesh::new().bounds();
        assert_eq!(min, [-2.0, -1.0, -2.0]);
        assert_eq!(max, [2.0, 0.1, 2.0]);
    }

    #[test]
    fn legs_sit_under_the_tabletop() {
        for vertex in &TABLE_POSITIONS[8..] {
            assert!(vertex[1] <= 0.0);
            assert!(vertex[0].abs() >= 1.2 && vertex[0].abs() <= 1.4);
            assert!(vertex[2].abs() >= 1.4 && vertex[2].abs() <= 1.6);
        }
    }
}
