//! Dense square matrix of overlap values.

/// An `n x n` matrix of `f64` stored row-major.
///
/// Cells start at `0.0`; the parser overwrites them row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    n: usize,
    values: Vec<f64>,
}

impl SquareMatrix {
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            values: vec![0.0; n * n],
        }
    }

    /// Build a matrix from explicit rows.
    ///
    /// Returns `None` if any row length differs from the number of rows.
    pub fn from_rows(rows: &[&[f64]]) -> Option<Self> {
        let n = rows.len();
        let mut matrix = Self::zeros(n);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != n {
                return None;
            }
            matrix.values[r * n..(r + 1) * n].copy_from_slice(row);
        }
        Some(matrix)
    }

    /// Side length of the matrix.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.n || col >= self.n {
            return None;
        }
        Some(self.values[row * self.n + col])
    }

    /// Overwrite one cell. Panics if either index is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(
            row < self.n && col < self.n,
            "cell ({row}, {col}) outside {n}x{n} matrix",
            n = self.n
        );
        self.values[row * self.n + col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.n..(row + 1) * self.n]
    }

    /// Iterate the values of column `col` from row 0 downwards.
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().skip(col).step_by(self.n.max(1)).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.n.max(1)).take(self.n)
    }
}
