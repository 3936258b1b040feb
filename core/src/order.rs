//! Column-wise dominant-row reduction.

use crate::matrix::SquareMatrix;

/// For every column, the row holding the largest absolute value.
///
/// Ties go to the lowest row index. A NaN entry wins its column, and the
/// first NaN wins among several.
pub fn new_mode_order(matrix: &SquareMatrix) -> Vec<usize> {
    (0..matrix.n())
        .map(|col| dominant_row(matrix.column(col)))
        .collect()
}

fn dominant_row(column: impl Iterator<Item = f64>) -> usize {
    let mut best_row = 0;
    let mut best = f64::NEG_INFINITY;
    for (row, value) in column.enumerate() {
        let magnitude = value.abs();
        if best.is_nan() {
            break;
        }
        if magnitude.is_nan() || magnitude > best {
            best_row = row;
            best = magnitude;
        }
    }
    best_row
}
