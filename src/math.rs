use std::ops::{Add, Mul};

use num_traits::{One, Zero};
use tracing::trace;
use twofloat::TwoFloat;

/// Scalar arithmetic the matrix entries need.
pub trait Scalar: Copy + Add<Output = Self> + Mul<Output = Self> {
    fn zero() -> Self;
    fn one() -> Self;
}

macro_rules! primitive_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn zero() -> Self {
                    <$t as Zero>::zero()
                }

                fn one() -> Self {
                    <$t as One>::one()
                }
            }
        )*
    };
}

primitive_scalar!(f32, f64);

impl Scalar for TwoFloat {
    fn zero() -> Self {
        TwoFloat::from(0.0)
    }

    fn one() -> Self {
        TwoFloat::from(1.0)
    }
}

/// Symmetric 2x2 matrix
///
/// ```text
/// | a  b |
/// | b  c |
/// ```
///
/// that is always a power of the Fibonacci base matrix `[[1, 1], [1, 0]]`.
///
/// The entries are private and the only constructors are [`Matrix::identity`]
/// and [`Matrix::base`], so every value reachable through [`matrix_square`]
/// and [`matrix_mult`] commutes with every other. The three-entry product in
/// [`matrix_mult`] is only correct under that condition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<T> {
    a: T,
    b: T,
    c: T,
}

impl<T: Scalar> Matrix<T> {
    /// The base matrix raised to the power zero.
    pub fn identity() -> Self {
        Matrix {
            a: T::one(),
            b: T::zero(),
            c: T::one(),
        }
    }

    /// The base matrix `[[1, 1], [1, 0]]`.
    pub fn base() -> Self {
        Matrix {
            a: T::one(),
            b: T::one(),
            c: T::zero(),
        }
    }

    pub fn a(&self) -> T {
        self.a
    }

    pub fn b(&self) -> T {
        self.b
    }

    pub fn c(&self) -> T {
        self.c
    }

    /// For base^k this is F(k).
    pub fn top_right(&self) -> T {
        self.b
    }
}

// Square a symmetric matrix in place
pub fn matrix_square<T: Scalar>(m: &mut Matrix<T>) {
    let Matrix { a, b, c } = *m;
    let b2 = b * b;

    m.a = a * a + b2;
    m.b = a * b + b * c;
    m.c = b2 + c * c;
}

// Multiply two powers of the base matrix; the off-diagonal entries of the
// product are equal, so only three entries are computed
pub fn matrix_mult<T: Scalar>(m1: &Matrix<T>, m2: &Matrix<T>) -> Matrix<T> {
    let Matrix { a, b, c } = *m1;
    let Matrix { a: d, b: e, c: f } = *m2;
    let be = b * e;

    Matrix {
        a: a * d + be,
        b: a * e + b * f,
        c: be + c * f,
    }
}

// Square-and-multiply over the bits of `exp`, least significant first. With no
// seed the first set bit's power becomes the result as is, so nothing is ever
// multiplied into the zero entries of the identity.
fn square_and_multiply<T: Scalar>(seed: Option<Matrix<T>>, mut exp: u64) -> Option<Matrix<T>> {
    let mut result = seed;
    if exp == 0 {
        return result;
    }

    let mut power = Matrix::base();
    loop {
        trace!(exp, bit = exp & 1, "square-and-multiply step");
        if exp & 1 == 1 {
            result = Some(match result {
                Some(acc) => matrix_mult(&acc, &power),
                None => power,
            });
        }
        exp >>= 1;
        if exp == 0 {
            break;
        }
        matrix_square(&mut power);
    }

    result
}

/// Returns `seed * base^exp` by square-and-multiply over the bits of `exp`.
///
/// The power-of-two matrix is squared only while bits remain, so at most
/// `log2(exp)` squarings and `log2(exp) + 1` multiplications are performed.
pub fn matrix_pow_from<T: Scalar>(seed: Matrix<T>, exp: u64) -> Matrix<T> {
    square_and_multiply(Some(seed), exp).unwrap_or(seed)
}

// Matrix exponentiation using squaring (O(log n))
pub fn matrix_pow<T: Scalar>(exp: u64) -> Matrix<T> {
    square_and_multiply(None, exp).unwrap_or_else(Matrix::identity)
}
