//! Element types shared by every kernel: real `f32`/`f64` and their complex counterparts.
//!
//! Kernels are written once against [`Scalar`]. Behaviour that only matters for complex
//! data (taking the real part, conjugation) is expressed through the trait so that the
//! real instantiations compile down to no-ops.

use num_complex::Complex;
use num_traits::{Float, NumAssign, One, Zero};
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// Real floating-point type backing a [`Scalar`].
pub trait RealScalar: Float + NumAssign + Debug + Send + Sync + 'static {
    /// Lossy conversion from an `f64` literal or count.
    fn of(v: f64) -> Self;
}

impl RealScalar for f32 {
    #[inline]
    fn of(v: f64) -> Self {
        v as f32
    }
}

impl RealScalar for f64 {
    #[inline]
    fn of(v: f64) -> Self {
        v
    }
}

/// A real or complex matrix/vector element.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
{
    type Real: RealScalar;

    /// `false` for real types; lets real-only code paths be resolved at compile time.
    const IS_COMPLEX: bool;

    fn re(self) -> Self::Real;
    fn im(self) -> Self::Real;
    fn conj(self) -> Self;
    /// Squared magnitude `|x|²`.
    fn abs2(self) -> Self::Real;
    fn abs(self) -> Self::Real;
    fn from_real(re: Self::Real) -> Self;
    /// Builds `re + i·im`; real types drop `im`.
    fn from_parts(re: Self::Real, im: Self::Real) -> Self;
    /// Multiplication by a real factor.
    fn scale(self, s: Self::Real) -> Self;
}

macro_rules! impl_real_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            type Real = $t;
            const IS_COMPLEX: bool = false;

            #[inline]
            fn re(self) -> $t { self }
            #[inline]
            fn im(self) -> $t { 0.0 }
            #[inline]
            fn conj(self) -> Self { self }
            #[inline]
            fn abs2(self) -> $t { self * self }
            #[inline]
            fn abs(self) -> $t { <$t>::abs(self) }
            #[inline]
            fn from_real(re: $t) -> Self { re }
            #[inline]
            fn from_parts(re: $t, _im: $t) -> Self { re }
            #[inline]
            fn scale(self, s: $t) -> Self { self * s }
        }
    )*};
}

impl_real_scalar!(f32, f64);

impl<R: RealScalar> Scalar for Complex<R> {
    type Real = R;
    const IS_COMPLEX: bool = true;

    #[inline]
    fn re(self) -> R {
        self.re
    }
    #[inline]
    fn im(self) -> R {
        self.im
    }
    #[inline]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }
    #[inline]
    fn abs2(self) -> R {
        self.norm_sqr()
    }
    #[inline]
    fn abs(self) -> R {
        self.norm()
    }
    #[inline]
    fn from_real(re: R) -> Self {
        Complex::new(re, R::zero())
    }
    #[inline]
    fn from_parts(re: R, im: R) -> Self {
        Complex::new(re, im)
    }
    #[inline]
    fn scale(self, s: R) -> Self {
        Complex::new(self.re * s, self.im * s)
    }
}
