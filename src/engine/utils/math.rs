use crate::engine::config::MatrixLayout;

pub type Mat4x4 = [f32; 16];

pub fn mat4x4_identity() -> Mat4x4 {
    [
      1.0, 0.0, 0.0, 0.0,
      0.0, 1.0, 0.0, 0.0,
      0.0, 0.0, 1.0, 0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn mat4x4_transpose(matrix: Mat4x4) -> Mat4x4 {
    let mut ret = [0.0; 16];
    for i in 0..16 {
        let row = i / 4;
        let col = i % 4;
        ret[col * 4 + row] = matrix[row * 4 + col];
    }
    ret
}

/// Brings a caller matrix into the column-major order `glUniformMatrix4fv`
/// expects with `transpose = false`, the only value GL ES 2.0 accepts.
pub fn mat4x4_to_column_major(matrix: &Mat4x4, layout: MatrixLayout) -> Mat4x4 {
    match layout {
        MatrixLayout::ColumnMajor => *matrix,
        MatrixLayout::RowMajor => mat4x4_transpose(*matrix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting() -> Mat4x4 {
        let mut m = [0.0; 16];
        for (i, v) in m.iter_mut().enumerate() {
            *v = i as f32;
        }
        m
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let t = mat4x4_transpose(counting());
        assert_eq!(t[1], 4.0);
        assert_eq!(t[4], 1.0);
        assert_eq!(t[3], 12.0);
        assert_eq!(t[15], 15.0);
        assert_eq!(mat4x4_transpose(t), counting());
    }

    #[test]
    fn identity_is_symmetric() {
        assert_eq!(mat4x4_transpose(mat4x4_identity()), mat4x4_identity());
    }

    #[test]
    fn column_major_input_is_passed_through() {
        let m = counting();
        assert_eq!(mat4x4_to_column_major(&m, MatrixLayout::ColumnMajor), m);
    }

    #[test]
    fn row_major_translation_moves_to_last_column_slots() {
        // Row-major translation keeps x, y, z in elements 3, 7, 11;
        // column-major keeps them in 12, 13, 14.
        let mut row_major = mat4x4_identity();
        row_major[3] = 1.5;
        row_major[7] = -2.0;
        row_major[11] = 4.0;
        let col_major = mat4x4_to_column_major(&row_major, MatrixLayout::RowMajor);
        assert_eq!(&col_major[12..15], &[1.5, -2.0, 4.0]);
        assert_eq!(col_major[3], 0.0);
    }
}
