use std::fmt;

use num_bigint::BigInt;
use num_traits::FromPrimitive;
use tracing::debug;
use twofloat::TwoFloat;

use crate::config::{Config, Precision, Real};
use crate::math::{matrix_pow_from, Matrix};

#[derive(Debug, thiserror::Error)]
pub enum FibonacciError {
    #[error("Negative index: {0}")]
    NegativeIndex(i64),
}

/// Computes the `index`-th Fibonacci number (F(0) = 0, F(1) = 1) as a
/// floating-point approximation, using O(log index) matrix multiplications.
///
/// The result is integer-exact up to
/// [`Precision::exact_limit`](crate::config::Precision::exact_limit) of the
/// chosen type, loses trailing digits beyond it and becomes `+inf` past
/// [`Precision::finite_limit`](crate::config::Precision::finite_limit),
/// whatever the type's own overflow behaviour.
///
/// # Example
/// ```
/// use fast_fibonacci::fibonacci::fibonacci;
/// assert_eq!(fibonacci::<f64>(20), 6765.0);
/// assert_eq!(fibonacci::<f64>(78), 8944394323791464.0);
/// ```
pub fn fibonacci<T: Real>(index: u64) -> T {
    let precision = T::PRECISION;
    debug!(index, %precision, "computing fibonacci");

    match index {
        0 => T::zero(),
        1 => T::one(),
        _ => {
            // Seeding with the base matrix turns base^(index-1) into base^index,
            // whose top-right entry is F(index)
            let value = matrix_pow_from(Matrix::<T>::base(), index - 1).top_right();
            if value.is_finite() {
                value
            } else {
                T::infinity()
            }
        }
    }
}

/// Like [`fibonacci`], but takes a signed index and rejects negative values
/// before the exponentiation loop is entered.
///
/// # Example
/// ```
/// use fast_fibonacci::fibonacci::{fibonacci_signed, FibonacciError};
/// assert_eq!(fibonacci_signed::<f32>(10).unwrap(), 55.0);
/// assert!(matches!(fibonacci_signed::<f32>(-1), Err(FibonacciError::NegativeIndex(-1))));
/// ```
pub fn fibonacci_signed<T: Real>(index: i64) -> Result<T, FibonacciError> {
    Ok(fibonacci(non_negative(index)?))
}

fn non_negative(index: i64) -> Result<u64, FibonacciError> {
    u64::try_from(index).map_err(|_| FibonacciError::NegativeIndex(index))
}

/// A Fibonacci number at the width it was computed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FibonacciValue {
    Single(f32),
    Double(f64),
    Extended(TwoFloat),
}

impl FibonacciValue {
    pub fn precision(&self) -> Precision {
        match self {
            FibonacciValue::Single(_) => Precision::Single,
            FibonacciValue::Double(_) => Precision::Double,
            FibonacciValue::Extended(_) => Precision::Extended,
        }
    }

    pub fn to_f64(&self) -> f64 {
        match *self {
            FibonacciValue::Single(v) => v as f64,
            FibonacciValue::Double(v) => v,
            FibonacciValue::Extended(v) => v.hi(),
        }
    }

    pub fn is_finite(&self) -> bool {
        match *self {
            FibonacciValue::Extended(v) => Real::is_finite(v),
            _ => self.to_f64().is_finite(),
        }
    }
}

// Shortest digits that round-trip at the value's own width, no exponent.
// A double-double is printed as the integer hi + lo, every digit it carries.
impl fmt::Display for FibonacciValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FibonacciValue::Single(v) => write!(f, "{v}"),
            FibonacciValue::Double(v) => write!(f, "{v}"),
            FibonacciValue::Extended(v) => {
                match (BigInt::from_f64(v.hi()), BigInt::from_f64(v.lo())) {
                    (Some(hi), Some(lo)) => write!(f, "{}", hi + lo),
                    _ => f.write_str("inf"),
                }
            }
        }
    }
}

/// Outcome of [`fibonacci_with`]: the value plus what is needed to judge it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FibonacciResult {
    pub index: u64,
    pub value: FibonacciValue,
}

impl FibonacciResult {
    pub fn precision(&self) -> Precision {
        self.value.precision()
    }

    /// Whether the value is guaranteed to be the exact integer F(index).
    pub fn is_exact(&self) -> bool {
        self.index <= self.precision().exact_limit()
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

/// Computes F(`index`) at the precision named by `config`.
///
/// # Example
/// ```
/// use fast_fibonacci::config::{Config, Precision};
/// use fast_fibonacci::fibonacci::fibonacci_with;
/// let result = fibonacci_with(100, &Config::new(Precision::Double)).unwrap();
/// assert!(!result.is_exact());
/// let expected = 354224848179261915075.0;
/// assert!((result.value.to_f64() - expected).abs() / expected < 1e-12);
/// ```
pub fn fibonacci_with(index: i64, config: &Config) -> Result<FibonacciResult, FibonacciError> {
    let index = non_negative(index)?;
    let value = match config.precision {
        Precision::Single => FibonacciValue::Single(fibonacci(index)),
        Precision::Double => FibonacciValue::Double(fibonacci(index)),
        Precision::Extended => FibonacciValue::Extended(fibonacci(index)),
    };

    Ok(FibonacciResult { index, value })
}
