//! Error types for the cramer crate

use thiserror::Error;

/// Errors that can occur while building or solving a linear system
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CramerError {
    /// The coefficient determinant is zero: no unique solution exists
    #[error("Singular matrix: the coefficient determinant is zero, so the system has no solution or infinitely many")]
    SingularMatrix,

    /// The coefficient matrix is not square
    #[error("Coefficient matrix must be square, got ({nrows}, {ncols})")]
    NotSquare { nrows: usize, ncols: usize },

    /// Right-hand side length does not match the matrix dimension
    #[error("Dimension mismatch: expected a right-hand side of length {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The system has no unknowns
    #[error("Cannot solve an empty (0x0) system")]
    EmptySystem,

    /// Rows of different lengths passed to a matrix constructor
    #[error("Row {row} has length {actual}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Column index past the last column
    #[error("Column {col} out of bounds for a matrix with {ncols} columns")]
    ColumnOutOfBounds { col: usize, ncols: usize },

    /// Tolerance is negative or not finite
    #[error("Invalid tolerance value: {0}. Tolerances must be finite and non-negative.")]
    InvalidTolerance(f64),
}

/// Result type for cramer operations
pub type Result<T> = std::result::Result<T, CramerError>;

/// Check that a tolerance is usable.
pub(crate) fn check_tolerance(tol: f64) -> Result<f64> {
    if !tol.is_finite() || tol < 0.0 {
        return Err(CramerError::InvalidTolerance(tol));
    }
    Ok(tol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_tolerance() {
        assert_eq!(check_tolerance(0.0), Ok(0.0));
        assert_eq!(check_tolerance(1e-12), Ok(1e-12));
        assert!(matches!(
            check_tolerance(-1.0),
            Err(CramerError::InvalidTolerance(_))
        ));
        assert!(check_tolerance(f64::NAN).is_err());
        assert!(check_tolerance(f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = CramerError::NotSquare { nrows: 2, ncols: 3 };
        assert_eq!(
            err.to_string(),
            "Coefficient matrix must be square, got (2, 3)"
        );
        assert!(CramerError::SingularMatrix.to_string().contains("zero"));
        assert_eq!(
            CramerError::ColumnOutOfBounds { col: 4, ncols: 2 }.to_string(),
            "Column 4 out of bounds for a matrix with 2 columns"
        );
    }
}
