use std::fmt;
use std::ops::Index;

use crate::element::Element;
use crate::error::{MatrixError, Result};

/// Rows and columns shown per corner when a large matrix is displayed.
const DISPLAY_CORNER: usize = 3;

/// Largest side length displayed in full.
const DISPLAY_FULL_MAX: usize = 10;

/// Element count of a `side x side` matrix.
///
/// # Panics
/// Panics if the count does not fit in `usize`.
fn element_count(side: usize) -> usize {
    side.checked_mul(side).unwrap_or_else(|| {
        panic!("{}x{} matrix has more elements than usize can count", side, side)
    })
}

/// A square `side x side` matrix.
///
/// Elements are stored contiguously in row-major order. Every constructor
/// checks that the data forms a square grid, so a `Matrix` is never jagged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    side: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Create a matrix from row-major data.
    ///
    /// # Errors
    /// Returns `NotSquare` if `data.len() != side * side`.
    pub fn new(side: usize, data: Vec<T>) -> Result<Self> {
        match side.checked_mul(side) {
            Some(len) if len == data.len() => Ok(Matrix { side, data }),
            _ => Err(MatrixError::NotSquare {
                side,
                len: data.len(),
            }),
        }
    }

    /// Create a matrix from a sequence of rows.
    ///
    /// The side length is the number of rows; every row must have exactly
    /// that many elements.
    ///
    /// # Errors
    /// Returns `RaggedRow` for the first row whose length differs.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let side = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != side) {
            return Err(MatrixError::RaggedRow {
                row,
                expected: side,
                got: r.len(),
            });
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Matrix { side, data })
    }

    /// Create a matrix whose element at `(i, j)` is `f(i, j)`.
    ///
    /// # Panics
    /// Panics if `side * side` overflows `usize`.
    pub fn from_fn<F>(side: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(element_count(side));
        for i in 0..side {
            for j in 0..side {
                data.push(f(i, j));
            }
        }
        Matrix { side, data }
    }

    /// Wraps data whose length the caller has already checked.
    pub(crate) fn from_checked(side: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), side * side);
        Matrix { side, data }
    }

    /// Side length n of this n x n matrix.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns true for the 0 x 0 matrix.
    pub fn is_empty(&self) -> bool {
        self.side == 0
    }

    /// Element at row `i`, column `j`, or `None` if out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.side && j < self.side {
            self.data.get(i * self.side + j)
        } else {
            None
        }
    }

    /// Row `i` as a contiguous slice.
    ///
    /// # Panics
    /// Panics if `i >= side()`.
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.side, "row {} out of bounds for side {}", i, self.side);
        &self.data[i * self.side..(i + 1) * self.side]
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.side).map(move |i| self.row(i))
    }

    /// The row-major element data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix and returns its rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        let side = self.side;
        let mut rows = Vec::with_capacity(side);
        let mut iter = self.data.into_iter();
        for _ in 0..side {
            rows.push(iter.by_ref().take(side).collect());
        }
        rows
    }

    /// Applies `f` to every element, producing a matrix of the same side.
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            side: self.side,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Element> Matrix<T> {
    /// The all-zero matrix.
    ///
    /// # Panics
    /// Panics if `side * side` overflows `usize`.
    pub fn zeros(side: usize) -> Self {
        Matrix {
            side,
            data: vec![T::zero(); element_count(side)],
        }
    }

    /// The identity matrix.
    ///
    /// # Panics
    /// Panics if `side * side` overflows `usize`.
    pub fn identity(side: usize) -> Self {
        Matrix::from_fn(side, |i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.side && j < self.side,
            "index ({}, {}) out of bounds for side {}",
            i,
            j,
            self.side
        );
        &self.data[i * self.side + j]
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

impl<T> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(m: Matrix<T>) -> Self {
        m.into_rows()
    }
}

/// Small matrices are printed in full. Larger ones show the first and last
/// rows, each with its leading columns and its last column.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "({}x{}):", self.side, self.side)?;
        if self.side <= DISPLAY_FULL_MAX {
            for row in self.rows() {
                write!(f, "  [")?;
                for (j, x) in row.iter().enumerate() {
                    if j > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:>4}", x)?;
                }
                writeln!(f, "]")?;
            }
            return Ok(());
        }

        let write_corner_row = |f: &mut fmt::Formatter<'_>, row: &[T]| -> fmt::Result {
            write!(f, "  [")?;
            for x in &row[..DISPLAY_CORNER] {
                write!(f, "{:>4}, ", x)?;
            }
            writeln!(f, "..., {:>4}]", row[self.side - 1])
        };

        for i in 0..DISPLAY_CORNER {
            write_corner_row(f, self.row(i))?;
        }
        writeln!(f, "  {}", ".".repeat(30))?;
        for i in self.side - DISPLAY_CORNER..self.side {
            write_corner_row(f, self.row(i))?;
        }
        Ok(())
    }
}
