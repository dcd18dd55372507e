//! Integer matrices as reported on the benchmark wire.

use serde::{Deserialize, Serialize};

use crate::error::{CalificarError, Result};

/// A non-empty rectangular grid of integers (row-major storage).
///
/// When the record carries a `tile_size`, each cell stands for an entire
/// `tile_size × tile_size` submatrix of constant value; the matrix itself
/// stores whatever the wire reported and leaves tile semantics to the
/// report builder.
///
/// # Examples
///
/// ```
/// use calificar::record::IntMatrix;
///
/// let m = IntMatrix::parse_literal("[1 2; 3 4]").unwrap();
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m.get(1, 0), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntMatrix {
    data: Vec<i64>,
    rows: usize,
    cols: usize,
}

impl IntMatrix {
    /// Creates a matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix would be empty or data length doesn't
    /// match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<i64>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err("Matrix must have at least one row and one column".into());
        }
        if data.len() != rows * cols {
            return Err("Data length must equal rows * cols".into());
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from row vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows or the rows have unequal
    /// lengths.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err("Matrix must have at least one row and one column".into());
        }
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in &rows {
            if row.len() != n_cols {
                return Err("All rows must have equal length".into());
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.cols + col]
    }

    /// Gets element at (row, col), or `None` if out of bounds.
    ///
    /// The report builder uses this to degrade to a `?` cell when a record
    /// reports dimensions larger than the matrix it actually carried.
    #[must_use]
    pub fn get_checked(&self, row: usize, col: usize) -> Option<i64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Parses the wire literal format: `[r0c0 r0c1; r1c0 r1c1]`.
    ///
    /// A single leading `[` and trailing `]` are stripped, rows are split
    /// on `;` and trimmed, cells within a row are separated by single
    /// spaces.
    ///
    /// # Errors
    ///
    /// Returns [`CalificarError::MalformedMatrix`] on a non-integer token
    /// or inconsistent row lengths.
    pub fn parse_literal(literal: &str) -> Result<Self> {
        let malformed = |reason: String| CalificarError::MalformedMatrix {
            literal: literal.to_string(),
            reason,
        };

        let inner = literal.strip_prefix('[').unwrap_or(literal);
        let inner = inner.strip_suffix(']').unwrap_or(inner);

        let mut rows: Vec<Vec<i64>> = Vec::new();
        for (i, raw_row) in inner.split(';').enumerate() {
            let mut row = Vec::new();
            for token in raw_row.trim().split(' ') {
                let cell = token
                    .parse::<i64>()
                    .map_err(|_| malformed(format!("bad cell {token:?} in row {i}")))?;
                row.push(cell);
            }
            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(malformed(format!(
                        "row {i} has {} cells, expected {}",
                        row.len(),
                        first.len()
                    )));
                }
            }
            rows.push(row);
        }

        Self::from_rows(rows)
    }

    /// Serializes back to the wire literal format.
    ///
    /// Round-trips with [`IntMatrix::parse_literal`] on values.
    #[must_use]
    pub fn to_literal(&self) -> String {
        let rows: Vec<String> = (0..self.rows)
            .map(|r| {
                let cells: Vec<String> = (0..self.cols)
                    .map(|c| self.get(r, c).to_string())
                    .collect();
                cells.join(" ")
            })
            .collect();
        format!("[{}]", rows.join("; "))
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
