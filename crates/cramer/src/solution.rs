//! Solution vectors and the normalization applied to raw Cramer results.
//!
//! A raw solution is always complex. Before it is handed back it is collapsed
//! to the simplest representation that is numerically faithful:
//!
//! - every imaginary part close to zero: drop them,
//!   - and every real part close to an integer: round to integers;
//! - otherwise the whole vector stays complex.
//!
//! Closeness follows `|a - b| <= atol + rtol * |b|`.

use num_complex::Complex64;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::error::{check_tolerance, Result};

/// Relative and absolute tolerance used to decide whether a value is "close"
/// to a reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloseTolerance {
    /// Relative tolerance, scaled by the magnitude of the reference value.
    pub rtol: f64,
    /// Absolute tolerance.
    pub atol: f64,
}

impl CloseTolerance {
    /// Create a tolerance pair, rejecting negative or non-finite values.
    pub fn new(rtol: f64, atol: f64) -> Result<Self> {
        Ok(Self {
            rtol: check_tolerance(rtol)?,
            atol: check_tolerance(atol)?,
        })
    }

    /// `|value - reference| <= atol + rtol * |reference|`, false for
    /// non-finite inputs.
    pub fn is_close(&self, value: f64, reference: f64) -> bool {
        value.is_finite()
            && reference.is_finite()
            && (value - reference).abs() <= self.atol + self.rtol * reference.abs()
    }
}

impl Default for CloseTolerance {
    fn default() -> Self {
        Self {
            rtol: 1e-5,
            atol: 1e-8,
        }
    }
}

// Global defaults stored as f64::to_bits()
static DEFAULT_RTOL: AtomicU64 = AtomicU64::new(1e-5_f64.to_bits());
static DEFAULT_ATOL: AtomicU64 = AtomicU64::new(1e-8_f64.to_bits());

/// Get the process-wide default tolerance used for normalization.
///
/// Starts out as `rtol = 1e-5`, `atol = 1e-8`.
pub fn default_close_tolerance() -> CloseTolerance {
    CloseTolerance {
        rtol: f64::from_bits(DEFAULT_RTOL.load(Ordering::Relaxed)),
        atol: f64::from_bits(DEFAULT_ATOL.load(Ordering::Relaxed)),
    }
}

/// Set the process-wide default tolerance used for normalization.
///
/// # Errors
/// Returns `CramerError::InvalidTolerance` if either component is negative or
/// not finite. Nothing is stored in that case.
pub fn set_default_close_tolerance(tol: CloseTolerance) -> Result<()> {
    let tol = CloseTolerance::new(tol.rtol, tol.atol)?;
    DEFAULT_RTOL.store(tol.rtol.to_bits(), Ordering::Relaxed);
    DEFAULT_ATOL.store(tol.atol.to_bits(), Ordering::Relaxed);
    Ok(())
}

/// Element type a [`Solution`] ended up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionKind {
    Integer,
    Real,
    Complex,
}

/// Solution vector of a linear system, one entry per unknown.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// All entries were real and integral.
    Integer(Vec<i64>),
    /// All entries were real.
    Real(Vec<f64>),
    /// At least one entry kept a non-negligible imaginary part.
    Complex(Vec<Complex64>),
}

impl Solution {
    pub fn kind(&self) -> SolutionKind {
        match self {
            Solution::Integer(_) => SolutionKind::Integer,
            Solution::Real(_) => SolutionKind::Real,
            Solution::Complex(_) => SolutionKind::Complex,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Solution::Integer(v) => v.len(),
            Solution::Real(v) => v.len(),
            Solution::Complex(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Widen every entry back to `Complex64`.
    pub fn to_complex(&self) -> Vec<Complex64> {
        match self {
            Solution::Integer(v) => v.iter().map(|&x| Complex64::new(x as f64, 0.0)).collect(),
            Solution::Real(v) => v.iter().map(|&x| Complex64::new(x, 0.0)).collect(),
            Solution::Complex(v) => v.clone(),
        }
    }

    pub fn as_integers(&self) -> Option<&[i64]> {
        match self {
            Solution::Integer(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_reals(&self) -> Option<&[f64]> {
        match self {
            Solution::Real(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<&[Complex64]> {
        match self {
            Solution::Complex(v) => Some(v),
            _ => None,
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Integer(v) => write_list(f, v),
            Solution::Real(v) => write_list(f, v),
            Solution::Complex(v) => write_list(f, v),
        }
    }
}

// 2^63; rounded values at or beyond this do not fit in i64.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Collapse a raw complex solution to its simplest faithful representation.
///
/// The decision is all-or-nothing: a single entry with a non-negligible
/// imaginary part keeps the whole vector complex, and a single non-integral
/// real entry keeps the whole vector real. Rounding is half-to-even.
pub fn normalize(values: Vec<Complex64>, tol: &CloseTolerance) -> Solution {
    if !values.iter().all(|z| tol.is_close(z.im, 0.0)) {
        debug!(n = values.len(), "solution kept as complex");
        return Solution::Complex(values);
    }

    let reals: Vec<f64> = values.iter().map(|z| z.re).collect();
    let rounded: Vec<f64> = reals.iter().map(|x| x.round_ties_even()).collect();
    let integral = reals
        .iter()
        .zip(&rounded)
        .all(|(&x, &r)| tol.is_close(x, r) && r.abs() < I64_LIMIT);

    if integral {
        debug!(n = values.len(), "solution collapsed to integers");
        Solution::Integer(rounded.into_iter().map(|r| r as i64).collect())
    } else {
        debug!(n = values.len(), "solution collapsed to reals");
        Solution::Real(reals)
    }
}
