//! Scalar trait for matrix entries.
//!
//! The determinant is generic over this trait so that real matrices can be
//! handled without lifting them into the complex plane. The solver itself
//! always works in `Complex64`.

use num_complex::Complex64;
use num_traits::{Float, One, Zero};

/// Minimal requirements for scalar types used in determinant computations.
pub trait Scalar:
    Clone
    + Copy
    + Zero
    + One
    + PartialEq
    + std::fmt::Debug
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// `|re| + |im|`, the magnitude LAPACK uses to rank pivot candidates.
    ///
    /// Unlike `|z|^2` it neither underflows for entries below ~1e-162 nor
    /// overflows for entries above ~1e154.
    fn abs1(self) -> f64;

    /// Absolute value as f64.
    fn abs_val(self) -> f64;

    /// `self / rhs` without squaring `rhs`, so tiny or huge divisors keep
    /// full precision.
    fn scaled_div(self, rhs: Self) -> Self;

    /// Lift into the complex plane.
    fn to_complex(self) -> Complex64;
}

impl Scalar for f64 {
    #[inline]
    fn abs1(self) -> f64 {
        Float::abs(self)
    }

    #[inline]
    fn abs_val(self) -> f64 {
        Float::abs(self)
    }

    #[inline]
    fn scaled_div(self, rhs: Self) -> Self {
        self / rhs
    }

    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(self, 0.0)
    }
}

impl Scalar for Complex64 {
    #[inline]
    fn abs1(self) -> f64 {
        self.re.abs() + self.im.abs()
    }

    #[inline]
    fn abs_val(self) -> f64 {
        self.norm()
    }

    /// Smith's algorithm. `Complex64`'s `/` divides by `|rhs|^2`, which turns
    /// into `0 / 0` for `|rhs|` around 1e-170.
    #[inline]
    fn scaled_div(self, rhs: Self) -> Self {
        if rhs.re.abs() >= rhs.im.abs() {
            let r = rhs.im / rhs.re;
            let den = rhs.re + rhs.im * r;
            Complex64::new((self.re + self.im * r) / den, (self.im - self.re * r) / den)
        } else {
            let r = rhs.re / rhs.im;
            let den = rhs.im + rhs.re * r;
            Complex64::new((self.re * r + self.im) / den, (self.im * r - self.re) / den)
        }
    }

    #[inline]
    fn to_complex(self) -> Complex64 {
        self
    }
}
