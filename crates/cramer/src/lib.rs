//! Cramer's rule solver for small complex linear systems
//!
//! This crate provides:
//! - `Matrix`: dense row-major matrix value type
//! - `determinant`: determinant via LU with partial pivoting
//! - `solve`: Cramer's rule with normalization of the result to integer,
//!   real or complex values
//!
//! # Example
//!
//! ```
//! use cramer::{solve, Complex64, Matrix, Solution};
//!
//! let a = Matrix::from_vec2d(vec![
//!     vec![Complex64::new(1.0, 2.0), Complex64::new(2.0, 0.0)],
//!     vec![Complex64::new(3.0, 0.0), Complex64::new(4.0, 4.0)],
//! ])
//! .unwrap();
//! let b = [Complex64::new(5.0, 0.0), Complex64::new(11.0, 0.0)];
//!
//! let x = solve(&a, &b).unwrap();
//! assert!(matches!(x, Solution::Complex(_)));
//! ```

pub mod determinant;
pub mod error;
pub mod matrix;
pub mod scalar;
pub mod solution;
pub mod solver;

// Re-export main types
pub use determinant::determinant;
pub use error::{CramerError, Result};
pub use matrix::Matrix;
pub use num_complex::Complex64;
pub use scalar::Scalar;
pub use solution::{
    default_close_tolerance, normalize, set_default_close_tolerance, CloseTolerance, Solution,
    SolutionKind,
};
pub use solver::{
    default_singular_tol, set_default_singular_tol, solve, solve_raw, solve_with, SolveOptions,
};
