//! Cramer's rule solver.
//!
//! For a square system `A * x = b` with `det(A) != 0`,
//!
//! \[ x_i = det(A_i) / det(A) \]
//!
//! where `A_i` is `A` with column `i` replaced by `b`. This costs `n + 1`
//! determinants and is only meant for small systems.

use num_complex::Complex64;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

use crate::determinant::determinant;
use crate::error::{check_tolerance, CramerError, Result};
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::solution::{default_close_tolerance, normalize, CloseTolerance, Solution};

/// Options for [`solve_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveOptions {
    /// A main determinant with `|det| <= singular_tol` is reported as
    /// singular. If `None`, uses the global default (initially `0.0`, i.e.
    /// only an exactly zero determinant is singular).
    pub singular_tol: Option<f64>,
    /// Tolerance for collapsing the solution to real or integer values.
    /// If `None`, uses the global default.
    pub tolerance: Option<CloseTolerance>,
}

impl SolveOptions {
    /// Options with the given singularity threshold.
    ///
    /// # Errors
    /// Returns `CramerError::InvalidTolerance` if `tol` is negative or not finite.
    pub fn with_singular_tol(self, tol: f64) -> Result<Self> {
        Ok(Self {
            singular_tol: Some(check_tolerance(tol)?),
            ..self
        })
    }

    /// Options with the given normalization tolerance.
    pub fn with_tolerance(self, tolerance: CloseTolerance) -> Self {
        Self {
            tolerance: Some(tolerance),
            ..self
        }
    }

    fn resolved_singular_tol(&self) -> Result<f64> {
        match self.singular_tol {
            Some(tol) => check_tolerance(tol),
            None => Ok(default_singular_tol()),
        }
    }

    fn resolved_tolerance(&self) -> Result<CloseTolerance> {
        match self.tolerance {
            Some(tol) => CloseTolerance::new(tol.rtol, tol.atol),
            None => Ok(default_close_tolerance()),
        }
    }
}

// Global default singular tolerance stored as f64::to_bits().
// 0.0 keeps the check an exact comparison against zero.
static DEFAULT_SINGULAR_TOL: AtomicU64 = AtomicU64::new(0.0_f64.to_bits());

/// Get the global default singularity threshold.
pub fn default_singular_tol() -> f64 {
    f64::from_bits(DEFAULT_SINGULAR_TOL.load(Ordering::Relaxed))
}

/// Set the global default singularity threshold.
///
/// # Errors
/// Returns `CramerError::InvalidTolerance` if `tol` is negative or not finite.
pub fn set_default_singular_tol(tol: f64) -> Result<()> {
    let tol = check_tolerance(tol)?;
    DEFAULT_SINGULAR_TOL.store(tol.to_bits(), Ordering::Relaxed);
    Ok(())
}

/// Solve `a * x = b` with the global default options.
///
/// # Example
///
/// ```
/// use cramer::{solve, Complex64, Matrix, Solution};
///
/// let a = Matrix::from_real_rows(vec![vec![2.0, 0.0], vec![0.0, 2.0]]).unwrap();
/// let b = [4.0, 6.0].map(|v| Complex64::new(v, 0.0));
///
/// assert_eq!(solve(&a, &b).unwrap(), Solution::Integer(vec![2, 3]));
/// ```
pub fn solve(a: &Matrix<Complex64>, b: &[Complex64]) -> Result<Solution> {
    solve_with(a, b, &SolveOptions::default())
}

/// Solve `a * x = b` and normalize the result.
///
/// # Errors
/// - `SingularMatrix` if `|det(a)| <= singular_tol` (exactly zero by default)
/// - `NotSquare`, `EmptySystem` for a malformed `a`
/// - `DimensionMismatch` if `b.len() != a.nrows()`
/// - `InvalidTolerance` for bad values in `options`
pub fn solve_with(
    a: &Matrix<Complex64>,
    b: &[Complex64],
    options: &SolveOptions,
) -> Result<Solution> {
    let tolerance = options.resolved_tolerance()?;
    let raw = solve_raw_with(a, b, options)?;
    let solution = normalize(raw, &tolerance);
    debug!(kind = ?solution.kind(), "solved linear system");
    Ok(solution)
}

/// Solve `a * x = b` without normalizing, always returning complex values.
pub fn solve_raw(a: &Matrix<Complex64>, b: &[Complex64]) -> Result<Vec<Complex64>> {
    solve_raw_with(a, b, &SolveOptions::default())
}

fn solve_raw_with(
    a: &Matrix<Complex64>,
    b: &[Complex64],
    options: &SolveOptions,
) -> Result<Vec<Complex64>> {
    let singular_tol = options.resolved_singular_tol()?;
    let n = a.nrows();
    if a.is_square() && b.len() != n {
        return Err(CramerError::DimensionMismatch {
            expected: n,
            actual: b.len(),
        });
    }

    debug!(n, "solving linear system by Cramer's rule");
    let det_main = determinant(a)?;
    if det_main.abs_val() <= singular_tol {
        debug!(det = %det_main, singular_tol, "coefficient matrix is singular");
        return Err(CramerError::SingularMatrix);
    }

    (0..n)
        .map(|i| -> Result<Complex64> {
            let det_i = determinant(&a.with_col_replaced(i, b)?)?;
            trace!(column = i, det = %det_i, "auxiliary determinant");
            Ok(det_i.scaled_div(det_main))
        })
        .collect()
}
