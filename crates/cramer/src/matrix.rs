//! Dense row-major matrix used for coefficient matrices

use num_complex::Complex64;
use num_traits::Zero;
use std::ops::{Index, IndexMut};

use crate::error::{CramerError, Result};
use crate::scalar::Scalar;

/// Simple 2D matrix backed by Vec
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

impl<T: Clone> Matrix<T> {
    /// Create a new matrix from dimensions and initial value
    pub fn from_elem(nrows: usize, ncols: usize, elem: T) -> Self {
        Self {
            data: vec![elem; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix from a 2D vector (row-major).
    ///
    /// Every row must have the same length as the first one.
    pub fn from_vec2d(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != ncols {
                return Err(CramerError::RaggedRows {
                    row,
                    expected: ncols,
                    actual: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Get a row as a vector
    pub fn row(&self, i: usize) -> Vec<T> {
        self.data[i * self.ncols..(i + 1) * self.ncols].to_vec()
    }

    /// Get a column as a vector
    pub fn col(&self, j: usize) -> Vec<T> {
        (0..self.nrows).map(|i| self[[i, j]].clone()).collect()
    }

    /// Copy of `self` with column `j` overwritten by `values`.
    ///
    /// # Errors
    /// Returns `ColumnOutOfBounds` if `j >= ncols` and `DimensionMismatch` if
    /// `values.len() != nrows`.
    pub fn with_col_replaced(&self, j: usize, values: &[T]) -> Result<Self> {
        if j >= self.ncols {
            return Err(CramerError::ColumnOutOfBounds {
                col: j,
                ncols: self.ncols,
            });
        }
        if values.len() != self.nrows {
            return Err(CramerError::DimensionMismatch {
                expected: self.nrows,
                actual: values.len(),
            });
        }
        let mut result = self.clone();
        for (i, v) in values.iter().enumerate() {
            result[[i, j]] = v.clone();
        }
        Ok(result)
    }

    /// Swap two rows in place
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.ncols {
            self.data.swap(a * self.ncols + j, b * self.ncols + j);
        }
    }
}

impl<T: Clone + Zero> Matrix<T> {
    /// Create a zeros matrix
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_elem(nrows, ncols, T::zero())
    }
}

impl<T: Scalar> Matrix<T> {
    /// Create an identity matrix
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[[i, i]] = T::one();
        }
        m
    }

    /// Matrix-vector product `self * x`.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `x.len() != ncols`.
    pub fn mul_vec(&self, x: &[T]) -> Result<Vec<T>> {
        if x.len() != self.ncols {
            return Err(CramerError::DimensionMismatch {
                expected: self.ncols,
                actual: x.len(),
            });
        }
        Ok((0..self.nrows)
            .map(|i| {
                (0..self.ncols).fold(T::zero(), |acc, j| acc + self[[i, j]] * x[j])
            })
            .collect())
    }

    /// Lift every entry into `Complex64`.
    pub fn to_complex(&self) -> Matrix<Complex64> {
        Matrix {
            data: self.data.iter().map(|&v| v.to_complex()).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl Matrix<Complex64> {
    /// Build a complex matrix from real rows.
    pub fn from_real_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        Ok(Matrix::from_vec2d(rows)?.to_complex())
    }
}

impl<T> Index<[usize; 2]> for Matrix<T> {
    type Output = T;

    fn index(&self, idx: [usize; 2]) -> &Self::Output {
        assert!(
            idx[0] < self.nrows && idx[1] < self.ncols,
            "index ({}, {}) out of bounds for a ({}, {}) matrix",
            idx[0],
            idx[1],
            self.nrows,
            self.ncols
        );
        &self.data[idx[0] * self.ncols + idx[1]]
    }
}

impl<T> IndexMut<[usize; 2]> for Matrix<T> {
    fn index_mut(&mut self, idx: [usize; 2]) -> &mut Self::Output {
        assert!(
            idx[0] < self.nrows && idx[1] < self.ncols,
            "index ({}, {}) out of bounds for a ({}, {}) matrix",
            idx[0],
            idx[1],
            self.nrows,
            self.ncols
        );
        &mut self.data[idx[0] * self.ncols + idx[1]]
    }
}
